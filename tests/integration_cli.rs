// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use hkdeps::cli::{Cli, Command};
use std::path::PathBuf;

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["hkdeps", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["hkdeps", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

// =============================================================================
// Sync Command
// =============================================================================

#[test]
fn cli_sync_no_args() {
    let cli = Cli::try_parse_from(["hkdeps", "sync"]).unwrap();
    let Some(Command::Sync(args)) = cli.command else {
        panic!("expected sync command");
    };
    assert!(args.project.is_none());
    assert!(!args.yes);
}

#[test]
fn cli_sync_with_project_and_decisions() {
    let cli =
        Cli::try_parse_from(["hkdeps", "sync", "Mod.csproj", "--decisions", "review.json"])
            .unwrap();
    let Some(Command::Sync(args)) = cli.command else {
        panic!("expected sync command");
    };
    assert_eq!(args.project, Some(PathBuf::from("Mod.csproj")));
    assert_eq!(args.decisions, Some(PathBuf::from("review.json")));
}

#[test]
fn cli_sync_enable_disable_repeatable() {
    let cli = Cli::try_parse_from([
        "hkdeps", "sync", "--enable", "Satchel", "--disable", "Vasi", "--enable", "SFCore",
    ])
    .unwrap();
    let Some(Command::Sync(args)) = cli.command else {
        panic!("expected sync command");
    };
    assert_eq!(args.enable, ["Satchel", "SFCore"]);
    assert_eq!(args.disable, ["Vasi"]);
}

#[test]
fn cli_sync_conflicting_review_modes_rejected() {
    let result = Cli::try_parse_from(["hkdeps", "sync", "--yes", "--decisions", "d.json"]);
    assert!(result.is_err());
}

// =============================================================================
// Status / List Commands
// =============================================================================

#[test]
fn cli_status_with_json() {
    let cli = Cli::try_parse_from(["hkdeps", "status", "--json"]).unwrap();
    let Some(Command::Status(args)) = cli.command else {
        panic!("expected status command");
    };
    assert!(args.json);
}

#[test]
fn cli_list_with_root_override() {
    let cli = Cli::try_parse_from(["hkdeps", "--root", "/hk/Managed", "list"]).unwrap();
    assert_eq!(cli.global.root, Some(PathBuf::from("/hk/Managed")));
    assert!(matches!(cli.command, Some(Command::List(_))));
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_global_options_before_command() {
    let cli = Cli::try_parse_from([
        "hkdeps",
        "--dry",
        "-l",
        "5",
        "--log-file",
        "run.log",
        "-s",
        "project/manifest=Deps.txt",
        "sync",
    ])
    .unwrap();

    assert!(cli.global.dry);
    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.log_file, Some(PathBuf::from("run.log")));
    assert_eq!(cli.global.options, ["project/manifest=Deps.txt"]);
}

#[test]
fn cli_rejects_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["hkdeps", "-l", "9", "sync"]).is_err());
}
