// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The build-description boundary: an in-memory MSBuild project document.
//!
//! ```text
//! Project::load(csproj)
//!   references()      <Reference Include=..><HintPath>..</HintPath>
//!   property(name)    <PropertyGroup><HollowKnightRefs>..</..>
//!   add_reference()   duplicate-checked insert, Private=False
//!   remove_reference() by ItemHandle
//!   save()            only the command layer calls this, and only
//!                     after every reference action succeeded
//! ```
//!
//! Items are addressed by [`ItemHandle`], a plain value standing in for
//! the IDE object handles of the original tooling.

mod xml;


use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::ProjectError;
use xml::{Element, XmlDocument};

const ITEM_GROUP: &str = "ItemGroup";
const PROPERTY_GROUP: &str = "PropertyGroup";
const REFERENCE: &str = "Reference";

/// Opaque handle to one item element inside a [`Project`].
///
/// Handles stay valid across unrelated edits and go stale when their item
/// is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemHandle(u64);

/// One `Reference` item as read from the project file.
#[derive(Debug, Clone)]
pub struct ReferenceItem {
    handle: ItemHandle,
    include: String,
    hint_path: Option<String>,
}

impl ReferenceItem {
    /// Handle of the underlying project item.
    #[must_use]
    pub const fn handle(&self) -> ItemHandle {
        self.handle
    }

    /// The `Include` attribute (the assembly name).
    #[must_use]
    pub fn include(&self) -> &str {
        &self.include
    }

    /// The `HintPath` metadata, if present.
    #[must_use]
    pub fn hint_path(&self) -> Option<&str> {
        self.hint_path.as_deref()
    }
}

/// An MSBuild project document.
#[derive(Debug, Clone)]
pub struct Project {
    doc: XmlDocument,
    path: Option<PathBuf>,
}

impl Project {
    /// Parses a project document from an XML string.
    ///
    /// The resulting project has no backing file; [`Project::save`] will
    /// fail until one is loaded from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the XML is malformed or has no root element.
    pub fn parse(xml: &str) -> Result<Self, ProjectError> {
        let doc = XmlDocument::parse(xml)?;
        Ok(Self { doc, path: None })
    }

    /// Loads a project document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ProjectError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ProjectError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let doc = XmlDocument::parse(&raw)?;
        Ok(Self {
            doc,
            path: Some(path.to_path_buf()),
        })
    }

    /// Writes the document back to the file it was loaded from.
    ///
    /// # Errors
    ///
    /// Returns an error if the project has no backing file or the write
    /// fails.
    pub fn save(&self) -> Result<(), ProjectError> {
        let path = self.path.as_deref().ok_or(ProjectError::NoFilePath)?;
        std::fs::write(path, self.to_xml()).map_err(|source| ProjectError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Serializes the document.
    #[must_use]
    pub fn to_xml(&self) -> String {
        self.doc.to_xml()
    }

    /// Path of the backing file, if loaded from disk.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Directory containing the backing file.
    #[must_use]
    pub fn directory(&self) -> Option<&Path> {
        self.file_path().and_then(Path::parent)
    }

    /// Looks up an MSBuild property by element name.
    ///
    /// The last definition across all `PropertyGroup`s wins, matching
    /// MSBuild evaluation order.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<String> {
        let mut value = None;
        for group in self.groups(PROPERTY_GROUP) {
            if let Some(prop) = group.find_child(name) {
                value = prop.text();
            }
        }
        value.map(|v| v.trim().to_string())
    }

    /// All `Reference` items across all item groups.
    ///
    /// Items without an `Include` attribute are skipped.
    #[must_use]
    pub fn references(&self) -> Vec<ReferenceItem> {
        let mut items = Vec::new();
        for group in self.groups(ITEM_GROUP) {
            for elem in group.child_elements().filter(|e| e.name() == REFERENCE) {
                let Some(include) = elem.attr("Include") else {
                    warn!("skipping Reference item without Include attribute");
                    continue;
                };
                items.push(ReferenceItem {
                    handle: ItemHandle(elem.id()),
                    include: include.to_string(),
                    hint_path: elem
                        .find_child("HintPath")
                        .and_then(Element::text)
                        .map(|t| t.trim().to_string()),
                });
            }
        }
        items
    }

    /// Inserts a new non-copy-local `Reference` item.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::DuplicateReference`] when a reference with
    /// the same `Include` (case-insensitive, MSBuild item semantics)
    /// already exists.
    pub fn add_reference(
        &mut self,
        include: &str,
        hint_path: &str,
    ) -> Result<ItemHandle, ProjectError> {
        if self
            .references()
            .iter()
            .any(|item| item.include.eq_ignore_ascii_case(include))
        {
            return Err(ProjectError::DuplicateReference {
                include: include.to_string(),
            });
        }

        let mut reference = Element::new(self.doc.alloc_id(), REFERENCE);
        reference.push_attr("Include", include);

        let mut hint = Element::new(self.doc.alloc_id(), "HintPath");
        hint.push_text(hint_path);
        reference.push_element(hint);

        let mut private = Element::new(self.doc.alloc_id(), "Private");
        private.push_text("False");
        reference.push_element(private);

        let handle = ItemHandle(reference.id());
        self.push_into_group(REFERENCE, reference);
        Ok(handle)
    }

    /// Removes the `Reference` item behind `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::ItemNotFound`] when the handle is stale or
    /// does not address a `Reference` item.
    pub fn remove_reference(&mut self, handle: ItemHandle) -> Result<(), ProjectError> {
        let is_reference = self
            .doc
            .find(handle.0)
            .is_some_and(|e| e.name() == REFERENCE);
        if is_reference && self.doc.remove(handle.0) {
            Ok(())
        } else {
            Err(ProjectError::ItemNotFound)
        }
    }

    /// Whether an item of `item_type` with the given `Include` exists.
    #[must_use]
    pub fn has_item(&self, item_type: &str, include: &str) -> bool {
        self.groups(ITEM_GROUP).any(|group| {
            group
                .child_elements()
                .any(|e| e.name() == item_type && e.attr("Include") == Some(include))
        })
    }

    /// Appends an item of `item_type` (e.g. a `None` entry registering the
    /// dependency manifest with the project).
    pub fn add_item(&mut self, item_type: &str, include: &str) -> ItemHandle {
        let mut item = Element::new(self.doc.alloc_id(), item_type);
        item.push_attr("Include", include);
        let handle = ItemHandle(item.id());
        self.push_into_group(item_type, item);
        handle
    }

    fn groups(&self, name: &'static str) -> impl Iterator<Item = &Element> {
        self.doc
            .root()
            .child_elements()
            .filter(move |e| e.name() == name)
    }

    /// Appends `item` to the last item group already holding items of the
    /// same type, creating a fresh group at the end of the document when
    /// none exists.
    fn push_into_group(&mut self, item_type: &str, item: Element) {
        let target = self
            .groups(ITEM_GROUP)
            .filter(|group| group.child_elements().any(|e| e.name() == item_type))
            .last()
            .map(Element::id);

        if let Some(id) = target
            && let Some(group) = self.doc.find_mut(id)
        {
            group.push_element(item);
            return;
        }

        let mut group = Element::new(self.doc.alloc_id(), ITEM_GROUP);
        group.push_element(item);
        self.doc.root_mut().push_element(group);
    }
}
