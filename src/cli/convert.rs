// doodba-tools: Doodba Addons Toolkit
//
// SPDX-FileCopyrightText: 2026 Alexandre D. Díaz
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the convert command.

use clap::Args;
use std::path::PathBuf;

/// Arguments for `doodba convert`.
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Directories to scan for addon roots.
    #[arg(value_name = "DIR", required = true)]
    pub paths: Vec<PathBuf>,

    /// Target Odoo version. Defaults to the registry's first version.
    #[arg(short = 'V', long = "odoo-version", value_name = "VERSION")]
    pub odoo_version: Option<String>,

    /// Write the composed addons.yaml here instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also recognize the legacy __openerp__.py manifest.
    #[arg(long)]
    pub legacy: bool,
}
