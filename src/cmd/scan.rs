// doodba-tools: Doodba Addons Toolkit
//
// SPDX-FileCopyrightText: 2026 Alexandre D. Díaz
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scan command implementation: local discovery only, no network.

use tracing::info;

use crate::cli::scan::ScanArgs;
use crate::compose::dedupe;
use crate::config::Config;
use crate::error::Result;
use crate::scan::Scanner;

/// Main handler for the scan command.
///
/// Prints every discovered addon root name, deduplicated, in discovery
/// order.
///
/// # Errors
///
/// Returns an error when a named scan root cannot be read.
pub fn run_scan_command(args: &ScanArgs, config: &Config) -> Result<()> {
    let modules = scan_paths(args, config)?;
    if modules.is_empty() {
        info!("no addons found");
        return Ok(());
    }
    for module in &modules {
        println!("{module}");
    }
    Ok(())
}

/// Walks every requested path and returns the deduplicated addon names.
pub(crate) fn scan_paths(args: &ScanArgs, config: &Config) -> Result<Vec<String>> {
    let manifest_names = if args.legacy {
        config.scan.with_legacy_manifests()
    } else {
        config.scan.manifest_names.clone()
    };
    let scanner = Scanner::new(manifest_names);

    let mut discovered = Vec::new();
    for path in &args.paths {
        discovered.extend(scanner.scan_root(path)?);
    }
    Ok(dedupe(discovered))
}
