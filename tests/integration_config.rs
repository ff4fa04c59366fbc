// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use hkdeps::config::Config;
use hkdeps::logging::LogLevel;
use std::path::PathBuf;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_minimal() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.project.manifest, "ModDependencies.txt");
    assert_eq!(config.project.refs_property, "HollowKnightRefs");
}

#[test]
fn config_parse_full() {
    let toml = r#"
[global]
dry = true
output_log_level = 2
file_log_level = 5
log_file = "hkdeps.log"

[project]
file = "src/Mod/Mod.csproj"
manifest = "ModDependencies.txt"
refs_property = "HollowKnightRefs"

[paths]
mods_root = "/games/hollow-knight/Managed"
"#;
    let config = Config::parse(toml).unwrap();

    assert!(config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::WARN);
    assert_eq!(config.global.log_file, Some(PathBuf::from("hkdeps.log")));
    assert_eq!(
        config.project.file,
        Some(PathBuf::from("src/Mod/Mod.csproj"))
    );
    assert_eq!(
        config.paths.mods_root,
        Some(PathBuf::from("/games/hollow-knight/Managed"))
    );
}

#[test]
fn config_parse_invalid_toml_fails() {
    assert!(Config::parse("[global\ndry = true").is_err());
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_later_source_wins() {
    let config = Config::builder()
        .add_toml_str("[project]\nmanifest = \"First.txt\"\n")
        .add_toml_str("[project]\nmanifest = \"Second.txt\"\n")
        .build()
        .unwrap();
    assert_eq!(config.project.manifest, "Second.txt");
}

#[test]
fn config_overrides_win_over_files() {
    let config = Config::builder()
        .add_toml_str("[paths]\nmods_root = \"/from-file\"\n")
        .apply_overrides(["paths/mods_root=/from-cli"])
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.paths.mods_root, Some(PathBuf::from("/from-cli")));
}

#[test]
fn config_loads_from_disk() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("hkdeps.toml");
    std::fs::write(&path, "[global]\ndry = true\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert!(config.global.dry);

    // a required file that is missing is an error
    assert!(Config::from_file(temp.path().join("missing.toml")).is_err());
}
