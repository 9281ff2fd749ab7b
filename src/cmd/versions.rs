// doodba-tools: Doodba Addons Toolkit
//
// SPDX-FileCopyrightText: 2026 Alexandre D. Díaz
// SPDX-License-Identifier: GPL-3.0-or-later

//! Versions command implementation.

use crate::cmd::registry_client;
use crate::config::Config;
use crate::error::Result;

/// Main handler for the versions command.
///
/// # Errors
///
/// Returns an error when the registry request fails.
pub async fn run_versions_command(config: &Config) -> Result<()> {
    let client = registry_client(config);
    let versions = client.versions().await?;
    if versions.is_empty() {
        println!("No versions reported");
        return Ok(());
    }
    for version in &versions {
        println!("{}", version.value);
    }
    Ok(())
}
