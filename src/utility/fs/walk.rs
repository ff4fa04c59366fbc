// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::Result;
use bon::Builder;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Options for sequential directory traversal.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Maximum depth to traverse (None = unlimited)
    #[builder(setters(name = with_max_depth))]
    max_depth: Option<usize>,
    /// Follow symbolic links
    #[builder(setters(name = with_follow_links), default = false)]
    follow_links: bool,
    /// Apply the standard filters (hidden files, ignore files, gitignore)
    #[builder(setters(name = with_standard_filters), default = true)]
    standard_filters: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WalkOptions {
    /// Returns the maximum depth to traverse.
    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Returns whether to follow symbolic links.
    #[must_use]
    pub const fn follow_links(&self) -> bool {
        self.follow_links
    }

    /// Returns whether the standard filters are applied.
    #[must_use]
    pub const fn standard_filters(&self) -> bool {
        self.standard_filters
    }

    /// Creates options for scanning a game installation tree.
    ///
    /// Mod directories are not source trees: hidden entries and ignore
    /// files must not influence what gets found.
    #[must_use]
    pub fn for_game_tree(max_depth: usize) -> Self {
        Self::builder()
            .with_max_depth(max_depth)
            .with_standard_filters(false)
            .build()
    }
}

/// Lazy iterator over the files under a root directory.
///
/// Directories are skipped; unreadable entries are logged and skipped.
pub struct FileWalk {
    inner: ignore::Walk,
}

impl Iterator for FileWalk {
    type Item = PathBuf;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|ft| ft.is_file()) {
                        return Some(entry.into_path());
                    }
                }
                Err(e) => {
                    warn!(error = %e, "walk error");
                }
            }
        }
    }
}

/// Performs a sequential directory traversal yielding files.
///
/// # Errors
///
/// Returns an error if the root directory does not exist.
pub fn walk_files<P: AsRef<Path>>(root: P, options: &WalkOptions) -> Result<FileWalk> {
    let root = root.as_ref();

    if !root.exists() {
        anyhow::bail!("root directory does not exist: {}", root.display());
    }

    let mut builder = WalkBuilder::new(root);
    builder.max_depth(options.max_depth());
    builder.follow_links(options.follow_links());
    builder.standard_filters(options.standard_filters());

    Ok(FileWalk {
        inner: builder.build(),
    })
}

/// Finds files matching a glob pattern relative to `root`.
///
/// # Errors
///
/// Returns an error if:
/// - The root directory does not exist.
/// - The glob pattern is invalid.
pub fn find_files<P: AsRef<Path>>(
    root: P,
    pattern: &str,
    options: &WalkOptions,
) -> Result<Vec<PathBuf>> {
    use wax::{Glob, Program};

    let root = root.as_ref();

    let glob =
        Glob::new(pattern).map_err(|e| anyhow::anyhow!("invalid glob pattern '{pattern}': {e}"))?;

    let files = walk_files(root, options)?
        .filter(|path| {
            path.strip_prefix(root)
                .is_ok_and(|rel| glob.is_match(rel))
        })
        .collect();

    Ok(files)
}
