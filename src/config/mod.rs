// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for hkdeps.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. master hkdeps.toml (exe dir)
//! 3. local hkdeps.toml (cwd)
//! 4. --ini files
//! 5. HKDEPS_* env vars
//! 6. --set / CLI overrides
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
pub use types::{GlobalConfig, PathsConfig, ProjectConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Project file options.
    pub project: ProjectConfig,
    /// Paths configuration.
    pub paths: PathsConfig,
}

impl Config {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML,
    /// or does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match
    /// the `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate values that serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty manifest name or refs property.
    pub fn resolve_and_validate(&self) -> Result<()> {
        if self.project.manifest.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "project".to_string(),
                key: "manifest".to_string(),
                message: "manifest file name must not be empty".to_string(),
            }
            .into());
        }
        if self.project.refs_property.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "project".to_string(),
                key: "refs_property".to_string(),
                message: "refs property name must not be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();

        options.insert("global.dry".to_string(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".to_string(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".to_string(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".to_string(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert(
            "project.file".to_string(),
            self.project
                .file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("project.manifest".to_string(), self.project.manifest.clone());
        options.insert(
            "project.refs_property".to_string(),
            self.project.refs_property.clone(),
        );
        options.insert(
            "paths.mods_root".to_string(),
            self.paths
                .mods_root
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
