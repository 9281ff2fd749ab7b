// doodba-tools: Doodba Addons Toolkit
//
// SPDX-FileCopyrightText: 2026 Alexandre D. Díaz
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the resolve command.

use clap::Args;
use std::path::PathBuf;

/// Arguments for `doodba resolve`.
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// A doodba addons.yaml document to resolve.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Target Odoo version. Defaults to the registry's first version.
    #[arg(short = 'V', long = "odoo-version", value_name = "VERSION")]
    pub odoo_version: Option<String>,

    /// Bundle archive path. Defaults to output.bundle_name (doodba_bundle.zip).
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}
