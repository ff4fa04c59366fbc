// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for hkdeps.
//!
//! ```text
//! Config: GlobalConfig, ProjectConfig, PathsConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Report planned changes without applying them.
    pub dry: bool,
    /// Log level for stdout output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file. No file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Project-file related configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project file to operate on. When unset, the single .csproj in the
    /// current directory is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// File name of the dependency manifest, next to the project file.
    pub manifest: String,
    /// MSBuild property that points at the game's managed directory.
    pub refs_property: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            file: None,
            manifest: "ModDependencies.txt".to_string(),
            refs_property: "HollowKnightRefs".to_string(),
        }
    }
}

/// Paths configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Root directory the installed mods are discovered under. Falls back
    /// to the project's refs property when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mods_root: Option<PathBuf>,
}
