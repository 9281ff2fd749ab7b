// doodba-tools: Doodba Addons Toolkit
//
// SPDX-FileCopyrightText: 2026 Alexandre D. Díaz
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Scan | Convert | Resolve | Versions | Options | Version
//! ```

use std::process::ExitCode;

use doodba_tools::cli::global::GlobalOptions;
use doodba_tools::cli::{self, Command};
use doodba_tools::cmd::convert::run_convert_command;
use doodba_tools::cmd::options::run_options_command;
use doodba_tools::cmd::resolve::run_resolve_command;
use doodba_tools::cmd::scan::run_scan_command;
use doodba_tools::cmd::versions::run_versions_command;
use doodba_tools::config::Config;
use doodba_tools::logging::{LogConfig, LogLevel, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let (config, config_sources) = match load_config(&cli.global) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&cli.global, &config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(sources = ?config_sources, "configuration layered");

    dispatch_command(&cli, &config).await
}

fn build_log_config(global: &GlobalOptions, config: &Config) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(config.global.log_level);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(config.global.file_log_level);

    let log_file = global
        .log_file
        .as_ref()
        .map(|p| p.display().to_string())
        .or_else(|| {
            if config.global.log_file.is_empty() {
                None
            } else {
                Some(config.global.log_file.clone())
            }
        });

    LogConfig::builder()
        .console_level(console_level)
        .file_level(file_level)
        .maybe_log_file(log_file)
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Command::Options) => run_options_command(config),
        Some(Command::Scan(args)) => run_scan_command(args, config),
        Some(Command::Convert(args)) => run_convert_command(args, config).await,
        Some(Command::Resolve(args)) => run_resolve_command(args, config).await,
        Some(Command::Versions) => run_versions_command(config).await,
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

fn load_config(global: &GlobalOptions) -> doodba_tools::error::Result<(Config, Vec<String>)> {
    let mut loader = Config::builder();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional("doodba.toml");
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix("DOODBA");
    for (key, value) in global.parsed_overrides()? {
        loader = loader.set(&key, value)?;
    }
    if let Some(url) = &global.api_url {
        loader = loader.set("registry.base_url", url.clone())?;
    }
    let sources = loader.sources().to_vec();
    Ok((loader.build()?, sources))
}
