// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration-related command implementations (options, inis).

use crate::config::Config;

/// Prints all options and their effective values.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Prints the configuration files that were loaded.
pub fn run_inis_command(lines: &[String]) {
    if lines.is_empty() {
        println!("No configuration files loaded");
    } else {
        for line in lines {
            println!("{line}");
        }
    }
}
