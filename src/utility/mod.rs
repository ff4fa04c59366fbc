// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   walk:  walk_files()   sequential traversal
//!          find_files()   glob pattern matching
//!          WalkOptions    max_depth, standard filters
//! ```

pub mod fs;
