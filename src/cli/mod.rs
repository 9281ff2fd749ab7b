// doodba-tools: Doodba Addons Toolkit
//
// SPDX-FileCopyrightText: 2026 Alexandre D. Díaz
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for doodba-tools using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! doodba [global options] <command>
//! scan <DIR>...
//! convert <DIR>...
//! resolve <FILE.yaml>
//! versions
//! options
//! version
//! ```

pub mod convert;
pub mod global;
pub mod resolve;
pub mod scan;


use crate::cli::convert::ConvertArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::resolve::ResolveArgs;
use crate::cli::scan::ScanArgs;
use clap::{Parser, Subcommand};

/// Doodba Addons Toolkit
///
/// Converts addon folders and addons.yaml documents against the Odoo addons
/// registry.
#[derive(Debug, Parser)]
#[command(
    name = "doodba",
    author,
    version,
    about = "Doodba addons.yaml converter and dependency resolver",
    long_about = "doodba-tools Copyright (C) 2026 Alexandre D. Díaz\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  `doodba convert DIR` scans DIR for Odoo addons (directories\n\
                  holding a __manifest__.py) and composes a doodba addons.yaml\n\
                  grouping them by source repository. `doodba resolve FILE`\n\
                  takes an existing addons.yaml, resolves its full dependency\n\
                  closure against the registry and exports a bundle with the\n\
                  regrouped addons.yaml plus pip.txt and apt.txt.",
    after_help = "CONFIG FILES:\n\n\
                  By default, doodba loads `doodba.toml` from the current\n\
                  directory when present. Additional files can be specified\n\
                  with --config and are layered on top, followed by DOODBA_*\n\
                  environment variables and --set overrides. Use\n\
                  --no-default-config to skip the auto-loaded file."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists the effective configuration values.
    Options,

    /// Scans directories and prints discovered addon names.
    Scan(ScanArgs),

    /// Scans directories and composes a grouped addons.yaml.
    Convert(ConvertArgs),

    /// Resolves an addons.yaml's dependencies into a doodba bundle.
    Resolve(ResolveArgs),

    /// Lists the Odoo versions the registry supports.
    Versions,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
