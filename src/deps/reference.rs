// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mod identities and project references.

use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ProjectError;
use crate::project::{ItemHandle, Project, ReferenceItem};

/// Hint paths of installed mods end in `Mods/<name>/<file>.dll`, with any
/// prefix (`$(HollowKnightRefs)`, `..`, absolute) and either separator
/// style in front.
static INSTALLED_MOD_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[/\\])Mods[/\\]([^/\\]+)[/\\]([^/\\]+\.dll)$")
        .expect("installed-mod hint pattern is valid")
});

/// Identity of an installed mod: directory name and main assembly file.
///
/// Name comparison is ordinal; the assembly file name compares
/// case-insensitively, matching the filesystem the mods live on.
#[derive(Debug, Clone, Eq)]
pub struct ModIdentity {
    name: String,
    assembly_file_name: String,
}

impl ModIdentity {
    pub fn new(name: impl Into<String>, assembly_file_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assembly_file_name: assembly_file_name.into(),
        }
    }

    /// The mod name (the directory segment under `Mods/`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The assembly file name (e.g. `Satchel.dll`).
    #[must_use]
    pub fn assembly_file_name(&self) -> &str {
        &self.assembly_file_name
    }

    /// The hint path for a reference to this mod.
    #[must_use]
    pub fn hint_path(&self) -> String {
        format!("Mods/{}/{}", self.name, self.assembly_file_name)
    }
}

impl PartialEq for ModIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self
                .assembly_file_name
                .eq_ignore_ascii_case(&other.assembly_file_name)
    }
}

impl Hash for ModIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.assembly_file_name.to_ascii_lowercase().hash(state);
    }
}

impl std::fmt::Display for ModIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.assembly_file_name)
    }
}

/// A mod reference: either present in the project file (handle set) or
/// proposed from a discovered mod (handle absent).
#[derive(Debug, Clone)]
pub struct ModReference {
    identity: ModIdentity,
    hint_path: String,
    item: Option<ItemHandle>,
}

impl ModReference {
    /// Parses a project `Reference` item into a mod reference.
    ///
    /// Returns `None` for foreign references: items without a hint path,
    /// or whose hint path does not match the installed-mod layout. Those
    /// are simply not mods and stay untouched.
    #[must_use]
    pub fn parse(item: &ReferenceItem) -> Option<Self> {
        let hint_path = item.hint_path()?;
        let captures = INSTALLED_MOD_HINT.captures(hint_path)?;
        Some(Self {
            identity: ModIdentity::new(&captures[1], &captures[2]),
            hint_path: hint_path.to_string(),
            item: Some(item.handle()),
        })
    }

    /// Constructs a proposed reference for a discovered mod.
    #[must_use]
    pub fn construct(identity: ModIdentity) -> Self {
        let hint_path = identity.hint_path();
        Self {
            identity,
            hint_path,
            item: None,
        }
    }

    /// The mod identity behind this reference.
    #[must_use]
    pub const fn identity(&self) -> &ModIdentity {
        &self.identity
    }

    /// Shorthand for the identity's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.identity.name()
    }

    /// The hint path as written (or to be written) in the project file.
    #[must_use]
    pub fn hint_path(&self) -> &str {
        &self.hint_path
    }

    /// The backing project item, if any.
    #[must_use]
    pub const fn item(&self) -> Option<ItemHandle> {
        self.item
    }

    /// Whether the reference is currently part of the project.
    #[must_use]
    pub const fn is_in_project(&self) -> bool {
        self.item.is_some()
    }

    /// Inserts this reference into the project.
    ///
    /// On success the reference takes ownership of the new item handle.
    ///
    /// # Errors
    ///
    /// Fails when the project rejects the insertion (e.g. a duplicate
    /// item). The caller must treat failure as "stop, do not save".
    pub fn add_to_project(&mut self, project: &mut Project) -> Result<(), ProjectError> {
        let handle = project.add_reference(self.identity.name(), &self.hint_path)?;
        self.item = Some(handle);
        Ok(())
    }

    /// Removes the backing item from the project.
    ///
    /// # Errors
    ///
    /// Fails when the reference has no backing item or the handle is
    /// stale. Same caller contract as [`ModReference::add_to_project`].
    pub fn remove_from_project(&mut self, project: &mut Project) -> Result<(), ProjectError> {
        let handle = self.item.ok_or_else(|| ProjectError::NotInProject {
            name: self.identity.name().to_string(),
        })?;
        project.remove_reference(handle)?;
        self.item = None;
        Ok(())
    }
}
