// doodba-tools: Doodba Addons Toolkit
//
// SPDX-FileCopyrightText: 2026 Alexandre D. Díaz
// SPDX-License-Identifier: GPL-3.0-or-later

//! Convert command implementation.
//!
//! ```text
//! scan DIRs --> dedupe --> POST /doodba/converter/addons
//!                               |
//!                               v
//!            group by repository + _UNKNOWN_ --> addons.yaml
//! ```

use anyhow::Context;
use tracing::info;

use crate::cli::convert::ConvertArgs;
use crate::cli::scan::ScanArgs;
use crate::cmd::scan::scan_paths;
use crate::cmd::{registry_client, target_version};
use crate::compose::{compose, group_by_repository, to_yaml};
use crate::config::Config;
use crate::error::Result;

/// Main handler for the convert command.
///
/// An empty scan issues no network request.
///
/// # Errors
///
/// Returns an error when scanning a named root, the registry request, or
/// writing the output fails.
pub async fn run_convert_command(args: &ConvertArgs, config: &Config) -> Result<()> {
    let scan_args = ScanArgs {
        paths: args.paths.clone(),
        legacy: args.legacy,
    };
    let modules = scan_paths(&scan_args, config)?;
    if modules.is_empty() {
        info!("no addons found, nothing to convert");
        return Ok(());
    }
    info!(modules = modules.len(), "discovered addons");

    let client = registry_client(config);
    let version = target_version(&client, args.odoo_version.as_deref()).await?;
    let rows = client.convert_addons(&version, &modules).await?;

    let grouped = group_by_repository(
        rows.into_iter()
            .map(|row| (row.repository_name, row.technical_name)),
    );
    let yaml = to_yaml(&compose(grouped, &modules))?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, &yaml)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(output = %path.display(), "addons document written");
        }
        None => print!("{yaml}"),
    }
    Ok(())
}
