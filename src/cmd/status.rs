// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Status command implementation: the three-way state, read-only.

use crate::cli::status::StatusArgs;
use crate::config::Config;
use crate::deps::discovery::discover;
use crate::deps::manifest::read_manifest;
use crate::deps::reconcile::{ReconcileReport, reconcile};
use crate::error::Result;
use crate::project::Project;

use anyhow::Context as _;

use super::{manifest_path, mod_references, print_diagnostics, resolve_mods_root,
    resolve_project_file};

/// Main handler for the status command.
///
/// # Errors
///
/// Returns an error for configuration problems or unreadable inputs.
pub fn run_status_command(args: &StatusArgs, config: &Config) -> Result<()> {
    let project_path = resolve_project_file(args.project.as_deref(), config)?;
    let project = Project::load(&project_path)?;

    let manifest_path = manifest_path(config, &project_path);
    let manifest = read_manifest(&manifest_path)
        .with_context(|| format!("failed to read manifest {}", manifest_path.display()))?;

    let mods_root = resolve_mods_root(config, &project)?;
    let discovered = discover(&mods_root)?;

    let report = reconcile(discovered, mod_references(&project), &manifest);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report_json(&report))?);
        return Ok(());
    }

    if report.candidates().is_empty() {
        println!("No mods installed or referenced.");
    } else {
        println!(
            "{:<28} {:^9} {:^10} {:^8}  Constraint",
            "Mod", "Installed", "Referenced", "Manifest"
        );
        for candidate in report.candidates() {
            println!(
                "{:<28} {:^9} {:^10} {:^8}  {}",
                candidate.name(),
                mark(candidate.is_available()),
                mark(candidate.is_in_project()),
                mark(candidate.is_in_manifest()),
                candidate.constraint().unwrap_or("")
            );
        }
    }

    print_diagnostics(report.diagnostics());
    Ok(())
}

const fn mark(set: bool) -> &'static str {
    if set { "x" } else { "-" }
}

fn report_json(report: &ReconcileReport) -> serde_json::Value {
    serde_json::json!({
        "candidates": report
            .candidates()
            .iter()
            .map(|c| {
                serde_json::json!({
                    "name": c.name(),
                    "assembly": c.reference().identity().assembly_file_name(),
                    "installed": c.is_available(),
                    "referenced": c.is_in_project(),
                    "in_manifest": c.is_in_manifest(),
                    "constraint": c.constraint(),
                })
            })
            .collect::<Vec<_>>(),
        "diagnostics": report
            .diagnostics()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
    })
}
