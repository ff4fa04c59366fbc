// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for hkdeps using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! hkdeps [global options] <command>
//! sync [PROJECT]     reconcile, review, apply
//! status [PROJECT]   show the three-way state, change nothing
//! list               list installed mods
//! options            dump effective configuration
//! inis               list loaded configuration files
//! version
//! ```

pub mod global;
pub mod list;
pub mod status;
pub mod sync;

#[cfg(test)]
mod tests;

use clap::{Parser, Subcommand};

use crate::cli::global::GlobalOptions;
use crate::cli::list::ListArgs;
use crate::cli::status::StatusArgs;
use crate::cli::sync::SyncArgs;

/// Hollow Knight Mod Dependency Tool
///
/// Keeps a mod project's references, the installed mods on disk, and the
/// `ModDependencies.txt` manifest in agreement.
#[derive(Debug, Parser)]
#[command(
    name = "hkdeps",
    author,
    version,
    about = "Hollow Knight Mod Dependency Tool",
    long_about = "hkdeps Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  hkdeps discovers the mods installed under the game's managed\n\
                  directory, compares them with the Reference items of a mod\n\
                  project and with ModDependencies.txt, and applies the reviewed\n\
                  changes. See `hkdeps <command> --help` for details.",
    after_help = "INI FILES:\n\n\
                  By default, hkdeps will look for a master INI `hkdeps.toml` next\n\
                  to the executable and then for the same filename in the current\n\
                  directory; both are loaded, the local one wins. Additional INIs\n\
                  can be specified with --ini, loaded after the two mentioned\n\
                  above. Use --no-default-inis to disable auto detection and only\n\
                  use --ini."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the INIs.
    Options,

    /// Lists the INIs used by hkdeps.
    Inis,

    /// Reconciles references, manifest and installed mods.
    Sync(SyncArgs),

    /// Shows the three-way state without changing anything.
    Status(StatusArgs),

    /// Lists the mods installed under the mods root.
    List(ListArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
