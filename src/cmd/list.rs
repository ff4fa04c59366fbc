// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation.

use std::path::PathBuf;

use crate::cli::list::ListArgs;
use crate::config::Config;
use crate::deps::discovery::discover;
use crate::deps::reference::ModIdentity;
use crate::error::Result;
use crate::project::Project;

use super::{resolve_mods_root, resolve_project_file};

/// Main handler for the list command.
///
/// # Errors
///
/// Returns an error when no mods root can be resolved or it is invalid.
pub fn run_list_command(args: &ListArgs, config: &Config) -> Result<()> {
    let mods_root = resolve_list_root(args, config)?;

    let mut mods: Vec<ModIdentity> = discover(&mods_root)?.collect();
    mods.sort_by(|a, b| a.name().cmp(b.name()));

    if args.json {
        let value: Vec<_> = mods
            .iter()
            .map(|m| {
                serde_json::json!({
                    "name": m.name(),
                    "assembly": m.assembly_file_name(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if mods.is_empty() {
        println!("No mods installed under {}", mods_root.display());
    } else {
        for identity in &mods {
            println!("{identity}");
        }
    }
    Ok(())
}

/// `list` works without a project when the root comes from the
/// configuration; otherwise the project's refs property supplies it.
fn resolve_list_root(args: &ListArgs, config: &Config) -> Result<PathBuf> {
    if let Some(root) = &config.paths.mods_root {
        return Ok(root.clone());
    }
    let project_path = resolve_project_file(args.project.as_deref(), config)?;
    let project = Project::load(&project_path)?;
    resolve_mods_root(config, &project)
}
