// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   sync, status, list, config
//! ```
//!
//! Shared here: project-file lookup, mods-root resolution and manifest
//! path derivation. The mods root resolves `--root` (already folded into
//! `paths.mods_root`) first, then the project's refs property; relative
//! roots are anchored at the project directory.

pub mod config;
pub mod list;
pub mod status;
pub mod sync;

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::deps::reconcile::Diagnostic;
use crate::deps::reference::ModReference;
use crate::error::{ConfigError, Result};
use crate::project::Project;
use crate::utility::fs::walk::{WalkOptions, find_files};

/// Resolves the project file: explicit argument, then `[project] file`,
/// then the single `.csproj` in the current directory.
pub(crate) fn resolve_project_file(explicit: Option<&Path>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = &config.project.file {
        return Ok(path.clone());
    }

    let cwd = std::env::current_dir()?;
    let options = WalkOptions::builder().with_max_depth(1).build();
    let mut found = find_files(&cwd, "*.csproj", &options)?;

    match found.len() {
        1 => Ok(found.remove(0)),
        0 => Err(ConfigError::ProjectFileNotFound {
            dir: cwd.display().to_string(),
        }
        .into()),
        _ => Err(ConfigError::AmbiguousProjectFile {
            dir: cwd.display().to_string(),
        }
        .into()),
    }
}

/// Resolves the discovery root for a loaded project.
pub(crate) fn resolve_mods_root(config: &Config, project: &Project) -> Result<PathBuf> {
    let root = config
        .paths
        .mods_root
        .clone()
        .or_else(|| {
            project
                .property(&config.project.refs_property)
                .map(PathBuf::from)
        })
        .ok_or_else(|| ConfigError::ModsRootNotConfigured {
            property: config.project.refs_property.clone(),
        })?;

    if root.is_relative()
        && let Some(dir) = project.directory()
    {
        return Ok(dir.join(root));
    }
    Ok(root)
}

/// The manifest lives next to the project file.
pub(crate) fn manifest_path(config: &Config, project_path: &Path) -> PathBuf {
    project_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(&config.project.manifest)
}

/// The project's references that are mod references; foreign items drop out.
pub(crate) fn mod_references(project: &Project) -> Vec<ModReference> {
    project
        .references()
        .iter()
        .filter_map(ModReference::parse)
        .collect()
}

/// Diagnostics are surfaced after the run, as one list.
pub(crate) fn print_diagnostics(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    println!();
    println!("Diagnostics:");
    for diagnostic in diagnostics {
        println!("  {diagnostic}");
    }
}
