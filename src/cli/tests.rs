// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use super::{Cli, Command, parse_from};
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["hkdeps", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_sync_defaults() {
    let cli = parse_from(["hkdeps", "sync"]);
    let Some(Command::Sync(args)) = cli.command else {
        panic!("expected sync command");
    };
    assert!(args.project.is_none());
    assert!(args.enable.is_empty());
    assert!(args.disable.is_empty());
    assert!(!args.yes);
    assert!(args.decisions.is_none());
}

#[test]
fn test_parse_sync_batch_flags() {
    let cli = parse_from([
        "hkdeps", "sync", "Mod.csproj", "--enable", "Satchel", "--enable", "Vasi", "--disable",
        "Benchwarp",
    ]);
    let Some(Command::Sync(args)) = cli.command else {
        panic!("expected sync command");
    };
    assert_eq!(args.project, Some(PathBuf::from("Mod.csproj")));
    assert_eq!(args.enable, ["Satchel", "Vasi"]);
    assert_eq!(args.disable, ["Benchwarp"]);
}

#[test]
fn test_sync_yes_conflicts_with_enable() {
    let result = Cli::try_parse_from(["hkdeps", "sync", "--yes", "--enable", "Satchel"]);
    assert!(result.is_err());
}

#[test]
fn test_sync_decisions_conflicts_with_flags() {
    let result =
        Cli::try_parse_from(["hkdeps", "sync", "--decisions", "d.json", "--enable", "Satchel"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_global_options() {
    let cli = parse_from([
        "hkdeps",
        "--root",
        "/games/hk/Managed",
        "--dry",
        "-l",
        "4",
        "--ini",
        "extra.toml",
        "status",
        "--json",
    ]);
    assert_eq!(cli.global.root, Some(PathBuf::from("/games/hk/Managed")));
    assert!(cli.global.dry);
    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(cli.global.inis, [PathBuf::from("extra.toml")]);

    let Some(Command::Status(args)) = cli.command else {
        panic!("expected status command");
    };
    assert!(args.json);
}

#[test]
fn test_log_level_range_enforced() {
    let result = Cli::try_parse_from(["hkdeps", "-l", "6", "status"]);
    assert!(result.is_err());
}

#[test]
fn test_global_options_to_config_overrides() {
    let cli = parse_from([
        "hkdeps",
        "--root",
        "/hk",
        "--dry",
        "-l",
        "2",
        "-s",
        "project/manifest=Deps.txt",
        "list",
    ]);
    let overrides = cli.global.to_config_overrides();

    assert!(overrides.contains(&"project/manifest=Deps.txt".to_string()));
    assert!(overrides.contains(&"global/output_log_level=2".to_string()));
    // file log level falls back to the console level
    assert!(overrides.contains(&"global/file_log_level=2".to_string()));
    assert!(overrides.contains(&"global/dry=true".to_string()));
    assert!(overrides.contains(&"paths/mods_root=/hk".to_string()));
}
