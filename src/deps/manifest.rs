// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The dependency manifest: one mod per line, optional constraint text.
//!
//! ```text
//! Satchel
//! Vasi 2
//! # comments and blank lines are dropped on round-trip
//! ```

use std::fmt;
use std::io;
use std::path::Path;

/// Lines starting with this character are comments.
pub const COMMENT_PREFIX: char = '#';

/// Platform line separator used when rendering manifest content.
pub const LINE_SEPARATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// One line of the dependency manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    name: String,
    constraint: Option<String>,
}

impl ManifestEntry {
    pub fn new(name: impl Into<String>, constraint: Option<String>) -> Self {
        Self {
            name: name.into(),
            constraint,
        }
    }

    /// Parses one manifest line.
    ///
    /// Blank and comment lines yield `None`. Otherwise the first
    /// whitespace run separates the mod name from free-form constraint
    /// text.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            return None;
        }
        let (name, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));
        let rest = rest.trim();
        Some(Self {
            name: name.to_string(),
            constraint: (!rest.is_empty()).then(|| rest.to_string()),
        })
    }

    /// The mod name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Optional constraint text.
    #[must_use]
    pub fn constraint(&self) -> Option<&str> {
        self.constraint.as_deref()
    }
}

/// Inverse of [`ManifestEntry::parse`] for parse-produced entries. Not
/// guaranteed for hand-built entries with whitespace inside the name.
impl fmt::Display for ManifestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.constraint {
            Some(constraint) => write!(f, "{} {}", self.name, constraint),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Parses manifest text. Blank, comment and otherwise unparseable lines
/// are dropped, so they do not survive a rewrite.
#[must_use]
pub fn parse_manifest(text: &str) -> Vec<ManifestEntry> {
    text.lines().filter_map(ManifestEntry::parse).collect()
}

/// Reads the manifest file at `path`.
///
/// A missing file is an empty manifest, not an error.
///
/// # Errors
///
/// Propagates any I/O error other than the file not existing.
pub fn read_manifest(path: &Path) -> io::Result<Vec<ManifestEntry>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(parse_manifest(&text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

/// Renders entries as manifest file content.
#[must_use]
pub fn render_manifest(entries: &[ManifestEntry]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR)
}
