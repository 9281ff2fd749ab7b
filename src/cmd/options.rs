// doodba-tools: Doodba Addons Toolkit
//
// SPDX-FileCopyrightText: 2026 Alexandre D. Díaz
// SPDX-License-Identifier: GPL-3.0-or-later

//! Options command implementation: dumps the effective configuration.

use crate::config::Config;
use crate::error::Result;

/// Main handler for the options command.
///
/// # Errors
///
/// Returns an error when the configuration cannot be serialized.
pub fn run_options_command(config: &Config) -> Result<()> {
    let dump = serde_yaml::to_string(config)?;
    print!("{dump}");
    Ok(())
}
