// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Version | Options | Configs | Args | List | Get | Split
//! ```

use std::process::ExitCode;

use session_rs::cli::global::GlobalOptions;
use session_rs::cli::{self, Command};
use session_rs::cmd::args::run_args_command;
use session_rs::cmd::config::{run_configs_command, run_options_command};
use session_rs::cmd::env::{run_get_command, run_list_command, run_split_command};
use session_rs::config::SessionConfig;
use session_rs::config::loader::ConfigLoader;
use session_rs::core::env::Environment;
use session_rs::logging::init_logging;
use session_rs::logging::LogConfig;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

fn build_log_config(config: &SessionConfig) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: &SessionConfig) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Configs) => {
            let loader = build_config_loader(&cli.global);
            run_configs_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(Command::Args(args)) => run_args_command(args),
        Some(Command::List(args)) => {
            open_environment(config).and_then(|env| run_list_command(args, &env))
        }
        Some(Command::Get(args)) => {
            open_environment(config).and_then(|env| run_get_command(args, &env))
        }
        Some(Command::Split(args)) => {
            open_environment(config).and_then(|env| run_split_command(args, &env))
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
    let mut loader = ConfigLoader::new().add_toml_file_optional("session.toml");
    for config_path in &global.configs {
        loader = loader.add_toml_file(config_path);
    }
    loader.with_env_prefix("SESSION")
}

fn load_config(global: &GlobalOptions) -> session_rs::error::Result<SessionConfig> {
    build_config_loader(global)
        .with_overrides(&global.to_config_overrides())?
        .build()
}

fn open_environment(config: &SessionConfig) -> session_rs::error::Result<Environment> {
    Ok(Environment::with_options(config.environment_options())?)
}
