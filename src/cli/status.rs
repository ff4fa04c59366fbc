// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the status command.

use clap::Args;
use std::path::PathBuf;

/// Arguments for `hkdeps status`.
#[derive(Debug, Clone, Default, Args)]
pub struct StatusArgs {
    /// Project file to inspect. Defaults to the only .csproj in the
    /// current directory.
    #[arg(value_name = "PROJECT")]
    pub project: Option<PathBuf>,

    /// Prints the candidate list and diagnostics as JSON.
    #[arg(long)]
    pub json: bool,
}
