// doodba-tools: Doodba Addons Toolkit
//
// SPDX-FileCopyrightText: 2026 Alexandre D. Díaz
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the scan command.

use clap::Args;
use std::path::PathBuf;

/// Arguments for `doodba scan`.
#[derive(Debug, Clone, Args)]
pub struct ScanArgs {
    /// Directories to scan for addon roots.
    #[arg(value_name = "DIR", required = true)]
    pub paths: Vec<PathBuf>,

    /// Also recognize the legacy __openerp__.py manifest.
    #[arg(long)]
    pub legacy: bool,
}
