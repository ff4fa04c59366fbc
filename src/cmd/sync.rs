// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sync command implementation: the full reconcile-review-apply cycle.
//!
//! ```text
//! load project + manifest + discover mods
//!   --> reconcile --> review (prompt | flags | decision file)
//!   --> apply
//!   --> all succeeded?  yes: save project, write manifest
//!                       no:  report, leave everything on disk untouched
//! ```

use std::collections::HashSet;

use anyhow::Context as _;
use dialoguer::MultiSelect;
use dialoguer::theme::ColorfulTheme;

use crate::cli::sync::SyncArgs;
use crate::config::Config;
use crate::deps::apply::{apply, write_manifest};
use crate::deps::discovery::discover;
use crate::deps::manifest::read_manifest;
use crate::deps::reconcile::{Candidate, Decision, ReconcileReport, reconcile};
use crate::error::{ConfigError, Result};
use crate::project::Project;

use super::{manifest_path, mod_references, print_diagnostics, resolve_mods_root,
    resolve_project_file};

/// Main handler for the sync command.
///
/// # Errors
///
/// Returns an error for configuration problems, unreadable inputs, or a
/// partially failed apply (in which case nothing was persisted).
pub fn run_sync_command(args: &SyncArgs, config: &Config, dry: bool) -> Result<()> {
    let project_path = resolve_project_file(args.project.as_deref(), config)?;
    let mut project = Project::load(&project_path)?;

    let manifest_path = manifest_path(config, &project_path);
    let manifest = read_manifest(&manifest_path)
        .with_context(|| format!("failed to read manifest {}", manifest_path.display()))?;

    let mods_root = resolve_mods_root(config, &project)?;
    let discovered = discover(&mods_root)?;

    let report = reconcile(discovered, mod_references(&project), &manifest);

    let Some(decisions) = collect_decisions(args, &report)? else {
        println!("Aborted, nothing changed.");
        return Ok(());
    };
    let actions = report.actions(&decisions);

    if dry {
        if actions.is_empty() {
            println!("Nothing to do.");
        } else {
            for action in &actions {
                let verb = if action.enable() { "add" } else { "remove" };
                println!("would {verb} reference '{}'", action.reference().name());
            }
        }
        print_diagnostics(report.diagnostics());
        return Ok(());
    }

    let added = actions.iter().filter(|a| a.enable()).count();
    let removed = actions.len() - added;

    let result = apply(actions, &mut project);
    if !result.all_succeeded() {
        for failure in result.failures() {
            eprintln!("{failure}");
        }
        print_diagnostics(report.diagnostics());
        anyhow::bail!(
            "{} reference action(s) failed, project was not saved",
            result.failures().len()
        );
    }

    // Register the manifest with the project before the single save.
    if !project.has_item("None", &config.project.manifest) {
        project.add_item("None", &config.project.manifest);
    }
    project.save()?;

    // Only reached when every reference action succeeded: the saved
    // project and the manifest never diverge within one run.
    write_manifest(&manifest_path, &report.manifest(&decisions))?;

    println!("{added} reference(s) added, {removed} removed");
    println!("Manifest written to {}", manifest_path.display());
    print_diagnostics(report.diagnostics());
    Ok(())
}

/// Collects the review decisions, or `None` when the user cancelled.
fn collect_decisions(args: &SyncArgs, report: &ReconcileReport) -> Result<Option<Vec<Decision>>> {
    if let Some(path) = &args.decisions {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read decision file {}", path.display()))?;
        let decisions: Vec<Decision> = serde_json::from_str(&raw)
            .with_context(|| format!("invalid decision file {}", path.display()))?;
        return Ok(Some(decisions));
    }

    if !args.enable.is_empty() || !args.disable.is_empty() {
        let mut decisions = report.current_decisions();
        for name in &args.enable {
            ensure_candidate(report, name)?;
            decisions.push(Decision::new(name, true));
        }
        for name in &args.disable {
            ensure_candidate(report, name)?;
            decisions.push(Decision::new(name, false));
        }
        return Ok(Some(decisions));
    }

    if args.yes {
        return Ok(Some(report.current_decisions()));
    }

    interactive_decisions(report)
}

/// A typo on the command line must not silently do nothing.
fn ensure_candidate(report: &ReconcileReport, name: &str) -> Result<()> {
    if report.find(name).is_none() {
        return Err(ConfigError::UnknownMod {
            name: name.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Multi-select review: preselected entries are the current references.
fn interactive_decisions(report: &ReconcileReport) -> Result<Option<Vec<Decision>>> {
    if report.candidates().is_empty() {
        println!("No mods installed or referenced.");
        return Ok(Some(Vec::new()));
    }

    let labels: Vec<String> = report.candidates().iter().map(candidate_label).collect();
    let defaults: Vec<bool> = report
        .candidates()
        .iter()
        .map(Candidate::is_in_project)
        .collect();

    let selection = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Select the mods this project depends on")
        .items(&labels)
        .defaults(&defaults)
        .interact_opt()?;

    let Some(selected) = selection else {
        return Ok(None);
    };
    let selected: HashSet<usize> = selected.into_iter().collect();

    Ok(Some(
        report
            .candidates()
            .iter()
            .enumerate()
            .map(|(idx, candidate)| Decision::new(candidate.name(), selected.contains(&idx)))
            .collect(),
    ))
}

fn candidate_label(candidate: &Candidate) -> String {
    let mut label = candidate.name().to_string();
    if let Some(constraint) = candidate.constraint() {
        label.push_str(&format!(" ({constraint})"));
    }
    if !candidate.is_available() {
        label.push_str(" [not installed]");
    } else if candidate.is_in_project() && !candidate.is_in_manifest() {
        label.push_str(" [not in manifest]");
    }
    label
}
