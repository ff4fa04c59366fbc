// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end tests for the reconcile-apply cycle against a realistic
//! on-disk layout: a Managed/Mods tree, a .csproj and a manifest.

use std::path::{Path, PathBuf};

use hkdeps::deps::apply::{apply, write_manifest};
use hkdeps::deps::discovery::discover;
use hkdeps::deps::manifest::read_manifest;
use hkdeps::deps::reconcile::{Decision, reconcile};
use hkdeps::deps::reference::ModReference;
use hkdeps::project::Project;

const CSPROJ: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project Sdk="Microsoft.NET.Sdk">
  <PropertyGroup>
    <TargetFramework>net472</TargetFramework>
    <HollowKnightRefs>GAME_ROOT</HollowKnightRefs>
  </PropertyGroup>
  <ItemGroup>
    <Reference Include="Assembly-CSharp">
      <HintPath>$(HollowKnightRefs)/Assembly-CSharp.dll</HintPath>
      <Private>False</Private>
    </Reference>
    <Reference Include="Satchel">
      <HintPath>$(HollowKnightRefs)/Mods/Satchel/Satchel.dll</HintPath>
      <Private>False</Private>
    </Reference>
  </ItemGroup>
</Project>
"#;

struct Fixture {
    _temp: tempfile::TempDir,
    game_root: PathBuf,
    project_path: PathBuf,
    manifest_path: PathBuf,
}

fn fixture(installed: &[&str], manifest: &str) -> Fixture {
    let temp = tempfile::tempdir().unwrap();
    let game_root = temp.path().join("Managed");

    for name in installed {
        let dir = game_root.join("Mods").join(name);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(format!("{name}.dll")), "").unwrap();
    }
    std::fs::create_dir_all(&game_root).unwrap();

    let project_dir = temp.path().join("MyMod");
    std::fs::create_dir_all(&project_dir).unwrap();
    let project_path = project_dir.join("MyMod.csproj");
    std::fs::write(
        &project_path,
        CSPROJ.replace("GAME_ROOT", &game_root.display().to_string()),
    )
    .unwrap();

    let manifest_path = project_dir.join("ModDependencies.txt");
    if !manifest.is_empty() {
        std::fs::write(&manifest_path, manifest).unwrap();
    }

    Fixture {
        _temp: temp,
        game_root,
        project_path,
        manifest_path,
    }
}

fn load_mod_references(project: &Project) -> Vec<ModReference> {
    project
        .references()
        .iter()
        .filter_map(ModReference::parse)
        .collect()
}

fn run_cycle(fx: &Fixture, decisions: &[Decision]) -> (usize, Vec<String>) {
    let mut project = Project::load(&fx.project_path).unwrap();
    let manifest = read_manifest(&fx.manifest_path).unwrap();
    let discovered = discover(&fx.game_root).unwrap();

    let report = reconcile(discovered, load_mod_references(&project), &manifest);

    let mut effective = report.current_decisions();
    effective.extend_from_slice(decisions);

    let actions = report.actions(&effective);
    let action_count = actions.len();

    let result = apply(actions, &mut project);
    assert!(result.all_succeeded());

    project.save().unwrap();
    write_manifest(&fx.manifest_path, &report.manifest(&effective)).unwrap();

    let diagnostics = report
        .diagnostics()
        .iter()
        .map(ToString::to_string)
        .collect();
    (action_count, diagnostics)
}

fn mods_root_of(path: &Path) -> PathBuf {
    let project = Project::load(path).unwrap();
    PathBuf::from(project.property("HollowKnightRefs").unwrap())
}

#[test]
fn sync_enables_and_disables_references() {
    let fx = fixture(&["Satchel", "Vasi"], "Satchel\n");

    let decisions = [Decision::new("Vasi", true), Decision::new("Satchel", false)];
    let (action_count, _) = run_cycle(&fx, &decisions);
    assert_eq!(action_count, 2);

    // the saved project reflects the review
    let project = Project::load(&fx.project_path).unwrap();
    let refs = load_mod_references(&project);
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].name(), "Vasi");

    // the foreign game-assembly reference stayed untouched
    assert!(project.to_xml().contains("Assembly-CSharp"));

    // the manifest matches the enabled set
    let written = std::fs::read_to_string(&fx.manifest_path).unwrap();
    assert_eq!(written.trim(), "Vasi");
}

#[test]
fn sync_is_a_fixed_point() {
    let fx = fixture(&["Satchel", "Vasi"], "");

    let decisions = [Decision::new("Vasi", true)];
    let (first_actions, _) = run_cycle(&fx, &decisions);
    assert_eq!(first_actions, 1);

    // a second run with the same intent proposes nothing
    let (second_actions, diagnostics) = run_cycle(&fx, &decisions);
    assert_eq!(second_actions, 0);
    assert!(diagnostics.is_empty());

    let written = std::fs::read_to_string(&fx.manifest_path).unwrap();
    let mut names: Vec<&str> = written.lines().collect();
    names.sort_unstable();
    assert_eq!(names, ["Satchel", "Vasi"]);
}

#[test]
fn sync_reports_missing_mod_and_keeps_it_until_disabled() {
    // Satchel is referenced but not installed
    let fx = fixture(&["Vasi"], "Satchel\n");

    let (actions, diagnostics) = run_cycle(&fx, &[]);
    assert_eq!(actions, 0);
    assert!(diagnostics.iter().any(|d| d.contains("Satchel")));
    assert!(diagnostics.iter().any(|d| d.contains("not found on disk")));

    // the reference survives until the user disables it
    let project = Project::load(&fx.project_path).unwrap();
    assert_eq!(load_mod_references(&project).len(), 1);

    let (actions, _) = run_cycle(&fx, &[Decision::new("Satchel", false)]);
    assert_eq!(actions, 1);
    let project = Project::load(&fx.project_path).unwrap();
    assert!(load_mod_references(&project).is_empty());
}

#[test]
fn sync_preserves_manifest_constraints() {
    let fx = fixture(&["Satchel", "Vasi"], "Satchel >= 1.5\n");

    run_cycle(&fx, &[Decision::new("Vasi", true)]);

    let written = std::fs::read_to_string(&fx.manifest_path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    // Satchel keeps its position and constraint, Vasi appends
    assert_eq!(lines, ["Satchel >= 1.5", "Vasi"]);
}

#[test]
fn discovery_errors_on_missing_root() {
    let fx = fixture(&["Satchel"], "");
    let missing = fx.game_root.join("nope");

    assert!(discover(&missing).is_err());
    // the fixture root itself resolves through the project property
    let root = mods_root_of(&fx.project_path);
    assert!(discover(&root).is_ok());
}
