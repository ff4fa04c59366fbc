// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Config;
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(!config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert!(config.global.log_file.is_none());
    assert_eq!(config.project.manifest, "ModDependencies.txt");
    assert_eq!(config.project.refs_property, "HollowKnightRefs");
    assert!(config.project.file.is_none());
    assert!(config.paths.mods_root.is_none());
}

#[test]
fn test_parse_sections() {
    let toml = r#"
[global]
dry = true
output_log_level = 4

[project]
file = "Mod/Mod.csproj"
manifest = "Deps.txt"

[paths]
mods_root = "/games/hk/Managed"
"#;
    let config = Config::parse(toml).unwrap();

    assert!(config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.project.file, Some(PathBuf::from("Mod/Mod.csproj")));
    assert_eq!(config.project.manifest, "Deps.txt");
    // unset keys keep their defaults
    assert_eq!(config.project.refs_property, "HollowKnightRefs");
    assert_eq!(
        config.paths.mods_root,
        Some(PathBuf::from("/games/hk/Managed"))
    );
}

#[test]
fn test_parse_rejects_out_of_range_log_level() {
    let toml = "
[global]
output_log_level = 9
";
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_parse_rejects_unknown_keys() {
    let toml = "
[global]
no_such_option = true
";
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_parse_rejects_empty_manifest_name() {
    let toml = r#"
[project]
manifest = "  "
"#;
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_set_override() {
    let config = Config::builder()
        .set("project.manifest", "Other.txt")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.project.manifest, "Other.txt");
}

#[test]
fn test_apply_overrides() {
    let config = Config::builder()
        .apply_overrides(["global/dry=true", "paths/mods_root=/hk"])
        .unwrap()
        .build()
        .unwrap();

    assert!(config.global.dry);
    assert_eq!(config.paths.mods_root, Some(PathBuf::from("/hk")));
}

#[test]
fn test_apply_overrides_rejects_malformed_entry() {
    assert!(Config::builder().apply_overrides(["no-equals-sign"]).is_err());
}

#[test]
fn test_format_options_is_sorted_and_complete() {
    let config = Config::default();
    let options = config.format_options();

    let mut sorted = options.clone();
    sorted.sort();
    assert_eq!(options, sorted);

    assert!(
        options
            .iter()
            .any(|line| line.starts_with("project.manifest") && line.ends_with("ModDependencies.txt"))
    );
    assert!(options.iter().any(|line| line.starts_with("paths.mods_root")));
}

#[test]
fn test_loader_tracks_files() {
    let loader = Config::builder()
        .add_toml_str("[global]\ndry = true\n")
        .add_toml_file_optional("does-not-exist.toml");
    let listed = loader.format_loaded_files();

    // the optional missing file is not listed
    assert_eq!(listed.len(), 1);
    assert!(listed[0].contains("<string>"));
}
