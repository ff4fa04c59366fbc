// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The dependency-reconciliation core.
//!
//! ```text
//! discovery --> ModIdentity*     (Mods/*/*.dll on disk)
//! project   --> ModReference*    (Reference items, foreign ones dropped)
//! manifest  --> ManifestEntry*   (ModDependencies.txt lines)
//!        \        |        /
//!         v       v       v
//!        reconcile() --> Candidates + Diagnostics
//!                 |
//!          review (external)
//!                 |
//!                 v
//!        actions() --> apply() --> AppliedResult
//!        manifest() -> write_manifest()   only when all succeeded
//! ```

pub mod apply;
pub mod discovery;
pub mod manifest;
pub mod reconcile;
pub mod reference;
