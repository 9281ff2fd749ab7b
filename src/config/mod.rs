// doodba-tools: Doodba Addons Toolkit
//
// SPDX-FileCopyrightText: 2026 Alexandre D. Díaz
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for doodba-tools.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. local doodba.toml (cwd)
//! 3. --config FILE (repeatable)
//! 4. DOODBA_* env vars
//! 5. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! DOODBA_REGISTRY__BASE_URL=https://...  → registry.base_url
//! DOODBA_GLOBAL__LOG_LEVEL=4            → global.log_level
//! ```

pub mod loader;


use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::logging::LogLevel;

use loader::ConfigLoader;

/// Manifest filename every supported Odoo version uses.
pub const MANIFEST_NAME: &str = "__manifest__.py";

/// Manifest filename of pre-10.0 addons, recognized in legacy mode.
pub const LEGACY_MANIFEST_NAME: &str = "__openerp__.py";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options (logging).
    pub global: GlobalConfig,
    /// Registry endpoint options.
    pub registry: RegistryConfig,
    /// Addon scan options.
    pub scan: ScanConfig,
    /// Output artifact names.
    pub output: OutputConfig,
}

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Log level for stdout output (0-5).
    pub log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file (empty = no file logging).
    pub log_file: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            file_log_level: LogLevel::Trace,
            log_file: String::new(),
        }
    }
}

/// Addons registry endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Base URL of the registry serving the converter and resolver endpoints.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://odoogithubhub.com".to_string(),
            timeout_secs: 60,
        }
    }
}

/// Addon scan configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Filenames whose presence marks a directory as an addon root.
    pub manifest_names: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            manifest_names: vec![MANIFEST_NAME.to_string()],
        }
    }
}

impl ScanConfig {
    /// Manifest set with the legacy pre-10.0 name appended, deduplicated.
    #[must_use]
    pub fn with_legacy_manifests(&self) -> Vec<String> {
        let mut names = self.manifest_names.clone();
        if !names.iter().any(|n| n == LEGACY_MANIFEST_NAME) {
            names.push(LEGACY_MANIFEST_NAME.to_string());
        }
        names
    }
}

/// Output artifact configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Filename of the composed addons document inside the bundle.
    pub addons_file: String,
    /// Filename of the pip requirements list inside the bundle.
    pub pip_file: String,
    /// Filename of the apt package list inside the bundle.
    pub apt_file: String,
    /// Default bundle archive name for the resolver flow.
    pub bundle_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            addons_file: "addons.yaml".to_string(),
            pip_file: "pip.txt".to_string(),
            apt_file: "apt.txt".to_string(),
            bundle_name: "doodba_bundle.zip".to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match
    /// the `Config` structure.
    pub fn from_str(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a section holds an empty or nonsensical value.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.registry.base_url.trim().is_empty() {
            return Err(ConfigError::MissingKey {
                section: "registry".to_string(),
                key: "base_url".to_string(),
            });
        }
        if self.registry.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                section: "registry".to_string(),
                key: "timeout_secs".to_string(),
                message: "timeout must be at least 1 second".to_string(),
            });
        }
        if self.scan.manifest_names.is_empty() {
            return Err(ConfigError::MissingKey {
                section: "scan".to_string(),
                key: "manifest_names".to_string(),
            });
        }
        Ok(())
    }

    /// Registry base URL with any trailing slash removed.
    #[must_use]
    pub fn registry_base_url(&self) -> &str {
        self.registry.base_url.trim_end_matches('/')
    }
}
