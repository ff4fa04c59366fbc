// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::walk::{WalkOptions, find_files, walk_files};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn test_walk_files() {
    let temp = temp_dir();

    std::fs::create_dir(temp.path().join("subdir")).unwrap();
    std::fs::write(temp.path().join("file1.txt"), "").unwrap();
    std::fs::write(temp.path().join("subdir/file2.txt"), "").unwrap();

    let files: Vec<_> = walk_files(temp.path(), &WalkOptions::default())
        .unwrap()
        .collect();

    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|p| p.is_file()));
}

#[test]
fn test_walk_files_missing_root() {
    let temp = temp_dir();
    let missing = temp.path().join("nope");

    assert!(walk_files(&missing, &WalkOptions::default()).is_err());
}

#[test]
fn test_walk_files_max_depth() {
    let temp = temp_dir();

    std::fs::create_dir_all(temp.path().join("a/b")).unwrap();
    std::fs::write(temp.path().join("top.txt"), "").unwrap();
    std::fs::write(temp.path().join("a/mid.txt"), "").unwrap();
    std::fs::write(temp.path().join("a/b/deep.txt"), "").unwrap();

    let options = WalkOptions::builder().with_max_depth(1).build();
    let files: Vec<_> = walk_files(temp.path(), &options).unwrap().collect();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("top.txt"));
}

#[test]
fn test_game_tree_options_see_hidden_files() {
    let temp = temp_dir();

    std::fs::write(temp.path().join(".hidden.dll"), "").unwrap();
    std::fs::write(temp.path().join("plain.dll"), "").unwrap();

    let files: Vec<_> = walk_files(temp.path(), &WalkOptions::for_game_tree(1))
        .unwrap()
        .collect();

    assert_eq!(files.len(), 2);
}

#[test]
fn test_find_files() {
    let temp = temp_dir();

    std::fs::write(temp.path().join("file1.rs"), "").unwrap();
    std::fs::write(temp.path().join("file2.txt"), "").unwrap();
    std::fs::create_dir(temp.path().join("subdir")).unwrap();
    std::fs::write(temp.path().join("subdir/file3.rs"), "").unwrap();

    let rust_files = find_files(temp.path(), "**/*.rs", &WalkOptions::default()).unwrap();

    assert_eq!(rust_files.len(), 2);
    assert!(
        rust_files
            .iter()
            .all(|p| p.extension().is_some_and(|e| e == "rs"))
    );
}

#[test]
fn test_find_files_invalid_pattern() {
    let temp = temp_dir();
    assert!(find_files(temp.path(), "[", &WalkOptions::default()).is_err());
}
