// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              HkError (~24 bytes)
//!                    |
//!        +------+----+----+------+
//!        |      |         |      |
//!        v      v         v      v
//!       Cfg   Project   Apply  Io/Other
//!       Box    Box       Box   Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Config   InvalidValue, ModsRoot*, ProjectFile*, UnknownMod
//!   Project  Xml, Io, DuplicateReference, ItemNotFound
//!   Apply    ManifestWrite
//!
//! All variants boxed => HkError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`HkError`].
pub type HkResult<T> = std::result::Result<T, HkError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum HkError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Project file error.
    #[error("project error: {0}")]
    Project(#[from] Box<ProjectError>),

    /// Apply phase error.
    #[error("apply error: {0}")]
    Apply(#[from] Box<ApplyError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for HkError {
                fn from(err: $error) -> Self {
                    HkError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    ProjectError => Project,
    ApplyError => Apply,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
///
/// Fatal to a run: nothing is discovered, reconciled or written once one
/// of these surfaces.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// No mods root was given on the command line, in the configuration,
    /// or as a project property.
    #[error("mods root is not configured (use --root, [paths] mods_root, or the '{property}' project property)")]
    ModsRootNotConfigured { property: String },

    /// The configured mods root does not exist.
    #[error("mods root does not point to an existing directory: {path}")]
    ModsRootNotFound { path: String },

    /// The configured mods root exists but is not a directory.
    #[error("mods root is not a directory: {path}")]
    ModsRootNotADirectory { path: String },

    /// No project file was given and none could be found.
    #[error("no project file found in {dir} (pass one explicitly or set [project] file)")]
    ProjectFileNotFound { dir: String },

    /// More than one project file matched.
    #[error("multiple project files found in {dir}, pass one explicitly")]
    AmbiguousProjectFile { dir: String },

    /// A name given on the command line matched no reconciliation candidate.
    #[error("'{name}' is neither installed nor referenced by the project")]
    UnknownMod { name: String },
}

// --- Project Errors ---

/// Errors from the MSBuild project document.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// The project XML could not be parsed.
    #[error("failed to parse project XML: {message}")]
    Xml { message: String },

    /// The document has no root element.
    #[error("project file has no root element")]
    NoRootElement,

    /// I/O error reading or writing the project file.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A reference with the same `Include` already exists.
    #[error("reference '{include}' already exists in the project")]
    DuplicateReference { include: String },

    /// The item handle no longer resolves to an element.
    #[error("project item not found (stale handle)")]
    ItemNotFound,

    /// Attempted to remove a reference that has no project item.
    #[error("reference '{name}' is not part of the project")]
    NotInProject { name: String },

    /// The document was parsed from a string and has no backing file.
    #[error("project document has no file path to save to")]
    NoFilePath,
}

// --- Apply Errors ---

/// Errors surfaced while committing reconciliation results.
#[derive(Debug, Error)]
pub enum ApplyError {
    /// Writing the dependency manifest failed.
    #[error("failed to write manifest '{path}': {source}")]
    ManifestWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
