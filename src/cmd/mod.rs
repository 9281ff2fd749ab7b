// doodba-tools: Doodba Addons Toolkit
//
// SPDX-FileCopyrightText: 2026 Alexandre D. Díaz
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   scan, convert, resolve, versions, options
//! ```

pub mod convert;
pub mod options;
pub mod resolve;
pub mod scan;
pub mod versions;

use std::time::Duration;

use crate::config::Config;
use crate::error::DoodbaResult;
use crate::net::RegistryClient;

/// Builds the registry client the network-facing commands share.
#[must_use]
pub fn registry_client(config: &Config) -> RegistryClient {
    RegistryClient::new(
        config.registry_base_url(),
        Duration::from_secs(config.registry.timeout_secs),
    )
}

/// Target Odoo version: the explicit CLI choice, or the registry's first
/// known version when none was given.
pub(crate) async fn target_version(
    client: &RegistryClient,
    requested: Option<&str>,
) -> DoodbaResult<String> {
    match requested {
        Some(version) => Ok(version.to_string()),
        None => client.default_version().await,
    }
}
