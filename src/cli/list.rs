// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the list command.

use clap::Args;
use std::path::PathBuf;

/// Arguments for `hkdeps list`.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Project file used to resolve the mods root when neither --root nor
    /// paths.mods_root is set.
    #[arg(value_name = "PROJECT")]
    pub project: Option<PathBuf>,

    /// Prints the installed mods as JSON.
    #[arg(long)]
    pub json: bool,
}
