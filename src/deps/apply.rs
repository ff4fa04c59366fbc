// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Committing reconciliation results.
//!
//! Reference actions are best-effort per action; the manifest write and
//! the project save are gated on every action having succeeded, so the
//! persisted build file and manifest never diverge within one run.

use std::fmt;
use std::io::Write;
use std::path::Path;

use tracing::error;

use crate::error::ApplyError;
use crate::project::Project;

use super::manifest::{ManifestEntry, render_manifest};
use super::reconcile::Action;

/// Which operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOp {
    Add,
    Remove,
}

impl fmt::Display for ApplyOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Remove => write!(f, "remove"),
        }
    }
}

/// One failed action, with enough context to retry manually.
#[derive(Debug, Clone)]
pub struct ApplyFailure {
    name: String,
    op: ApplyOp,
    reason: String,
}

impl ApplyFailure {
    /// The mod whose action failed.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The operation that failed.
    #[must_use]
    pub const fn op(&self) -> ApplyOp {
        self.op
    }

    /// Why it failed.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for ApplyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to {} reference '{}': {}", self.op, self.name, self.reason)
    }
}

/// Result of applying a batch of actions.
#[derive(Debug)]
pub struct AppliedResult {
    applied: usize,
    failures: Vec<ApplyFailure>,
}

impl AppliedResult {
    /// Whether every action succeeded.
    ///
    /// When false the caller must not save the project and must not write
    /// the manifest.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of successfully applied actions.
    #[must_use]
    pub const fn applied(&self) -> usize {
        self.applied
    }

    /// The recorded failures.
    #[must_use]
    pub fn failures(&self) -> &[ApplyFailure] {
        &self.failures
    }
}

/// Applies every action against the in-memory project model.
///
/// Best-effort: a failing action is recorded and the rest still run, so
/// one bad item does not block unrelated ones. Already-applied actions are
/// not rolled back.
pub fn apply(actions: Vec<Action>, project: &mut Project) -> AppliedResult {
    let mut applied = 0;
    let mut failures = Vec::new();

    for action in actions {
        let mut reference = action.reference;
        let (op, result) = if action.enable {
            (ApplyOp::Add, reference.add_to_project(project))
        } else {
            (ApplyOp::Remove, reference.remove_from_project(project))
        };
        match result {
            Ok(()) => applied += 1,
            Err(e) => {
                error!(name = %reference.name(), %op, error = %e, "apply failed");
                failures.push(ApplyFailure {
                    name: reference.name().to_string(),
                    op,
                    reason: e.to_string(),
                });
            }
        }
    }

    AppliedResult { applied, failures }
}

/// Overwrites the manifest file with the given entries.
///
/// The content is staged in a temporary file next to the target and moved
/// into place, so a failed write never leaves a half-written manifest.
///
/// # Errors
///
/// Returns an [`ApplyError`] describing the failed write.
pub fn write_manifest(path: &Path, entries: &[ManifestEntry]) -> Result<(), ApplyError> {
    let manifest_write = |source: std::io::Error| ApplyError::ManifestWrite {
        path: path.display().to_string(),
        source,
    };

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut file =
        tempfile::NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new("."))).map_err(manifest_write)?;
    file.write_all(render_manifest(entries).as_bytes())
        .map_err(manifest_write)?;
    file.persist(path)
        .map_err(|e| manifest_write(e.error))?;
    Ok(())
}
