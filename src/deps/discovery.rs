// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Discovery of installed mods under the game's managed-assembly root.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use tracing::warn;
use wax::{Glob, Program};

use crate::error::ConfigError;
use crate::utility::fs::walk::{FileWalk, WalkOptions, walk_files};

use super::reference::ModIdentity;

/// Installed mods live at `<root>/Mods/<name>/<file>.dll`.
static INSTALLED_MOD_GLOB: LazyLock<Glob<'static>> =
    LazyLock::new(|| Glob::new("Mods/*/*.dll").expect("installed-mod glob is valid"));

/// Lazy iterator over the mods installed under a root directory.
///
/// Ordering is filesystem-dependent; callers that need determinism must
/// sort. Re-creating the iterator rescans the disk.
pub struct DiscoveredMods {
    walk: FileWalk,
    root: PathBuf,
}

impl std::fmt::Debug for DiscoveredMods {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscoveredMods")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl Iterator for DiscoveredMods {
    type Item = ModIdentity;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let path = self.walk.next()?;
            let Ok(rel) = path.strip_prefix(&self.root) else {
                continue;
            };
            if !INSTALLED_MOD_GLOB.is_match(rel) {
                continue;
            }
            match identity_from_relative_path(rel) {
                Some(identity) => return Some(identity),
                None => {
                    warn!(path = %path.display(), "skipping undecodable mod path");
                }
            }
        }
    }
}

/// Scans `root` for installed mods.
///
/// # Errors
///
/// Returns a [`ConfigError`] when `root` does not exist or is not a
/// directory. A bad root is a configuration problem and must never be
/// mistaken for "no mods installed".
pub fn discover(root: &Path) -> Result<DiscoveredMods, ConfigError> {
    if !root.exists() {
        return Err(ConfigError::ModsRootNotFound {
            path: root.display().to_string(),
        });
    }
    if !root.is_dir() {
        return Err(ConfigError::ModsRootNotADirectory {
            path: root.display().to_string(),
        });
    }

    let walk =
        walk_files(root, &WalkOptions::for_game_tree(3)).map_err(|_| ConfigError::ModsRootNotFound {
            path: root.display().to_string(),
        })?;

    Ok(DiscoveredMods {
        walk,
        root: root.to_path_buf(),
    })
}

/// The glob guarantees `Mods/<name>/<file>.dll`; the two segments after
/// `Mods/` become the identity.
fn identity_from_relative_path(rel: &Path) -> Option<ModIdentity> {
    let mut components = rel.components().skip(1);
    let name = components.next()?.as_os_str().to_str()?;
    let file = components.next()?.as_os_str().to_str()?;
    Some(ModIdentity::new(name, file))
}
