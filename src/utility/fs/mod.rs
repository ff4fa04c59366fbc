// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! walk:  walk_files()  ignore::Walk (sequential)
//!        find_files()  glob pattern matching
//!        WalkOptions   max_depth, standard filters
//! ```

pub mod walk;

#[cfg(test)]
mod tests;
