// doodba-tools: Doodba Addons Toolkit
//
// SPDX-FileCopyrightText: 2026 Alexandre D. Díaz
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --api-url URL     ← registry.base_url override
//! --log-level N     ← Console verbosity (0-5)
//! --file-log-level  ← File verbosity (overrides --log-level)
//! --log-file FILE   ← Log file path
//! --set KEY=VAL     ← Direct config override
//!
//! Precedence: CLI flags > --set > --config > doodba.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Registry base URL, overrides registry.base_url.
    #[arg(long = "api-url", value_name = "URL", env = "DOODBA_API_URL")]
    pub api_url: Option<String>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Sets a configuration option, such as 'registry.timeout_secs=10'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Disables auto loading of ./doodba.toml, only uses --config.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,
}

impl GlobalOptions {
    /// Splits each `--set KEY=VALUE` into a (key, value) pair.
    ///
    /// # Errors
    ///
    /// Returns an error for arguments without a `=`.
    pub fn parsed_overrides(&self) -> crate::error::Result<Vec<(String, String)>> {
        self.options
            .iter()
            .map(|option| {
                option.split_once('=').map_or_else(
                    || Err(anyhow::anyhow!("invalid --set option '{option}', expected KEY=VALUE")),
                    |(key, value)| Ok((key.to_string(), value.to_string())),
                )
            })
            .collect()
    }
}
