// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the sync command.

use clap::Args;
use std::path::PathBuf;

/// Arguments for `hkdeps sync`.
///
/// Without any of `--enable`, `--disable`, `--yes` or `--decisions` the
/// review runs as an interactive multi-select prompt.
#[derive(Debug, Clone, Default, Args)]
pub struct SyncArgs {
    /// Project file to operate on. Defaults to the only .csproj in the
    /// current directory.
    #[arg(value_name = "PROJECT")]
    pub project: Option<PathBuf>,

    /// Enables (references) a mod by name. Can be specified multiple
    /// times; skips the interactive prompt.
    #[arg(long = "enable", value_name = "NAME", action = clap::ArgAction::Append)]
    pub enable: Vec<String>,

    /// Disables (removes the reference to) a mod by name. Can be
    /// specified multiple times; skips the interactive prompt.
    #[arg(long = "disable", value_name = "NAME", action = clap::ArgAction::Append)]
    pub disable: Vec<String>,

    /// Accepts the current reference state without prompting; still
    /// rewrites the manifest to match it.
    #[arg(short = 'y', long = "yes", conflicts_with_all = ["enable", "disable", "decisions"])]
    pub yes: bool,

    /// Reads review decisions from a JSON file (an array of
    /// {"name": ..., "enable": ...} objects) instead of prompting.
    #[arg(long = "decisions", value_name = "FILE", conflicts_with_all = ["enable", "disable"])]
    pub decisions: Option<PathBuf>,
}
