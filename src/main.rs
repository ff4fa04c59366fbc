// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Sync | Status | List | Options | Inis | Version
//! ```

use std::process::ExitCode;

use hkdeps::cli::global::GlobalOptions;
use hkdeps::cli::{self, Command};
use hkdeps::cmd::config::{run_inis_command, run_options_command};
use hkdeps::cmd::list::run_list_command;
use hkdeps::cmd::status::run_status_command;
use hkdeps::cmd::sync::run_sync_command;
use hkdeps::config::Config;
use hkdeps::config::loader::ConfigLoader;
use hkdeps::logging::init_logging;
use hkdeps::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_config(&cli.global).map(|config| run_options_command(&config))
        }
        Some(Command::Inis) => {
            run_inis_command(&build_config_loader(&cli.global).format_loaded_files());
            Ok(())
        }
        Some(Command::Sync(args)) => load_config(&cli.global)
            .and_then(|config| run_sync_command(args, &config, config.global.dry)),
        Some(Command::Status(args)) => {
            load_config(&cli.global).and_then(|config| run_status_command(args, &config))
        }
        Some(Command::List(args)) => {
            load_config(&cli.global).and_then(|config| run_list_command(args, &config))
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();

    if !global.no_default_inis {
        let local = std::env::current_dir()
            .map(|cwd| cwd.join("hkdeps.toml"))
            .ok();
        if let Ok(exe) = std::env::current_exe()
            && let Some(dir) = exe.parent()
        {
            let master = dir.join("hkdeps.toml");
            // the local copy is loaded below; don't load the same file twice
            if local.as_ref() != Some(&master) {
                loader = loader.add_toml_file_optional(&master);
            }
        }
        loader = loader.add_toml_file_optional("hkdeps.toml");
    }

    for ini in &global.inis {
        loader = loader.add_toml_file(ini);
    }
    loader.with_env_prefix("HKDEPS")
}

fn load_config(global: &GlobalOptions) -> hkdeps::error::Result<Config> {
    let loader = build_config_loader(global).apply_overrides(global.to_config_overrides())?;
    loader.build().map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })
}
