// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Three-way reconciliation of discovered mods, project references and
//! manifest entries.
//!
//! ```text
//! reconcile(available, existing, manifest)
//!        |
//!        v
//!   ReconcileReport
//!     candidates   name-sorted, tri-state (installed/referenced/manifest)
//!     diagnostics  missing on disk, undeclared in manifest
//!        |
//!        | decisions: (name, enable) from the review boundary
//!        v
//!     actions()    add/remove only, no-ops never emitted
//!     manifest()   resulting manifest content
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::manifest::ManifestEntry;
use super::reference::{ModIdentity, ModReference};

/// One reviewable mod: the union of what is installed and what the
/// project references, annotated with its manifest state.
#[derive(Debug, Clone)]
pub struct Candidate {
    reference: ModReference,
    available: bool,
    in_manifest: bool,
    constraint: Option<String>,
    manifest_rank: Option<usize>,
}

impl Candidate {
    /// The mod name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.reference.name()
    }

    /// The existing or proposed reference for this mod.
    #[must_use]
    pub const fn reference(&self) -> &ModReference {
        &self.reference
    }

    /// Whether the mod is installed on disk.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.available
    }

    /// Whether the project currently references the mod.
    #[must_use]
    pub const fn is_in_project(&self) -> bool {
        self.reference.is_in_project()
    }

    /// Whether the manifest declares the mod.
    #[must_use]
    pub const fn is_in_manifest(&self) -> bool {
        self.in_manifest
    }

    /// Constraint text carried over from the manifest, if any.
    #[must_use]
    pub fn constraint(&self) -> Option<&str> {
        self.constraint.as_deref()
    }
}

/// A non-fatal inconsistency found during reconciliation.
///
/// Diagnostics inform the review; they never remove anything by
/// themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The project references a mod that is not installed.
    MissingOnDisk { name: String },
    /// The project references a mod the manifest does not declare.
    NotInManifest { name: String },
}

impl Diagnostic {
    /// The mod the diagnostic is about.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::MissingOnDisk { name } | Self::NotInManifest { name } => name,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOnDisk { name } => {
                write!(f, "referenced mod '{name}' was not found on disk")
            }
            Self::NotInManifest { name } => {
                write!(f, "reference '{name}' is not declared in the dependency manifest")
            }
        }
    }
}

/// One reviewed choice: keep or drop the mod named `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub name: String,
    pub enable: bool,
}

impl Decision {
    pub fn new(name: impl Into<String>, enable: bool) -> Self {
        Self {
            name: name.into(),
            enable,
        }
    }
}

/// A concrete change to carry out against the project.
///
/// Enable means "add the reference", disable means "remove it"; decisions
/// that match the current state never become actions.
#[derive(Debug, Clone)]
pub struct Action {
    pub(crate) enable: bool,
    pub(crate) reference: ModReference,
}

impl Action {
    /// Whether this action adds (true) or removes (false) the reference.
    #[must_use]
    pub const fn enable(&self) -> bool {
        self.enable
    }

    /// The reference being added or removed.
    #[must_use]
    pub const fn reference(&self) -> &ModReference {
        &self.reference
    }
}

/// The outcome of one reconciliation pass.
#[derive(Debug, Clone)]
pub struct ReconcileReport {
    candidates: Vec<Candidate>,
    diagnostics: Vec<Diagnostic>,
}

impl ReconcileReport {
    /// The candidates, sorted by name.
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Diagnostics gathered while merging the three sources.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Looks up a candidate by exact name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Candidate> {
        self.candidates
            .binary_search_by(|c| c.name().cmp(name))
            .ok()
            .map(|idx| &self.candidates[idx])
    }

    /// The decision set that reproduces the current project state.
    ///
    /// Reviewing this unchanged yields zero actions.
    #[must_use]
    pub fn current_decisions(&self) -> Vec<Decision> {
        self.candidates
            .iter()
            .map(|c| Decision::new(c.name(), c.is_in_project()))
            .collect()
    }

    /// Maps reviewed decisions to actions.
    ///
    /// No-ops (decisions matching the current state) are skipped, unknown
    /// names are logged and skipped, duplicate decisions collapse with the
    /// last one winning. At most one action per mod is produced.
    #[must_use]
    pub fn actions(&self, decisions: &[Decision]) -> Vec<Action> {
        let mut actions = Vec::new();
        for (name, enable) in effective_decisions(decisions) {
            let Some(candidate) = self.find(name) else {
                warn!(name, "decision for unknown mod, skipping");
                continue;
            };
            if enable != candidate.is_in_project() {
                actions.push(Action {
                    enable,
                    reference: candidate.reference.clone(),
                });
            }
        }
        actions
    }

    /// Renders the manifest that matches the reviewed decisions.
    ///
    /// Enabled mods keep their original manifest position (new ones append
    /// in name order) and their known constraint text; disabled mods and
    /// manifest entries matching nothing are dropped.
    #[must_use]
    pub fn manifest(&self, decisions: &[Decision]) -> Vec<ManifestEntry> {
        let effective = effective_decisions(decisions);
        let mut enabled: Vec<&Candidate> = self
            .candidates
            .iter()
            .filter(|c| {
                effective
                    .get(c.name())
                    .copied()
                    .unwrap_or_else(|| c.is_in_project())
            })
            .collect();
        enabled.sort_by_key(|c| c.manifest_rank.unwrap_or(usize::MAX));
        enabled
            .into_iter()
            .map(|c| ManifestEntry::new(c.name(), c.constraint.clone()))
            .collect()
    }
}

/// Merges the three sources into a report.
///
/// Candidates are the union of installed mods and project references;
/// manifest entries only annotate them. Names match exactly, no fuzzing.
#[must_use]
pub fn reconcile(
    available: impl IntoIterator<Item = ModIdentity>,
    existing: impl IntoIterator<Item = ModReference>,
    manifest: &[ManifestEntry],
) -> ReconcileReport {
    #[derive(Default)]
    struct Slot {
        reference: Option<ModReference>,
        available: bool,
        in_manifest: bool,
        constraint: Option<String>,
        manifest_rank: Option<usize>,
    }

    let mut slots: BTreeMap<String, Slot> = BTreeMap::new();

    for reference in existing {
        let slot = slots.entry(reference.name().to_string()).or_default();
        if slot.reference.is_some() {
            warn!(name = %reference.name(), "duplicate project reference, keeping the first");
            continue;
        }
        slot.reference = Some(reference);
    }

    for identity in available {
        let slot = slots.entry(identity.name().to_string()).or_default();
        slot.available = true;
        if slot.reference.is_none() {
            slot.reference = Some(ModReference::construct(identity));
        }
    }

    for (rank, entry) in manifest.iter().enumerate() {
        if let Some(slot) = slots.get_mut(entry.name()) {
            if slot.in_manifest {
                debug!(name = %entry.name(), "duplicate manifest entry, keeping the first");
                continue;
            }
            slot.in_manifest = true;
            slot.constraint = entry.constraint().map(str::to_string);
            slot.manifest_rank = Some(rank);
        } else {
            debug!(name = %entry.name(), "manifest entry matches no installed or referenced mod");
        }
    }

    let mut candidates = Vec::with_capacity(slots.len());
    let mut diagnostics = Vec::new();

    // BTreeMap iteration keeps the candidate list name-sorted regardless
    // of filesystem enumeration order.
    for (name, slot) in slots {
        let Some(reference) = slot.reference else {
            continue;
        };
        if reference.is_in_project() {
            if !slot.available {
                diagnostics.push(Diagnostic::MissingOnDisk { name: name.clone() });
            }
            if !slot.in_manifest {
                diagnostics.push(Diagnostic::NotInManifest { name });
            }
        }
        candidates.push(Candidate {
            reference,
            available: slot.available,
            in_manifest: slot.in_manifest,
            constraint: slot.constraint,
            manifest_rank: slot.manifest_rank,
        });
    }

    ReconcileReport {
        candidates,
        diagnostics,
    }
}

/// Collapses duplicate decisions; the last decision for a name wins.
fn effective_decisions(decisions: &[Decision]) -> BTreeMap<&str, bool> {
    let mut map = BTreeMap::new();
    for decision in decisions {
        if let Some(previous) = map.insert(decision.name.as_str(), decision.enable)
            && previous != decision.enable
        {
            debug!(name = %decision.name, "conflicting decisions, last wins");
        }
    }
    map
}
