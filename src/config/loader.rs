// doodba-tools: Doodba Addons Toolkit
//
// SPDX-FileCopyrightText: 2026 Alexandre D. Díaz
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration loading.
//!
//! ```text
//! defaults -> doodba.toml -> --config files -> DOODBA_* env -> --set
//!                                |
//!                                v
//!                      build() -> validated Config
//! ```

use config::{File, FileFormat};

use super::Config;
use crate::error::Result;

/// Accumulates configuration sources in precedence order; later sources win.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<String>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    /// Layers a TOML file that must exist; `build()` fails when it is
    /// missing or malformed.
    #[must_use]
    pub fn add_toml_file<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        self.sources.push(format!("file {}", path.display()));
        self
    }

    /// Layers a TOML file that is skipped silently when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(false));
        if path.exists() {
            self.sources.push(format!("optional file {}", path.display()));
        }
        self
    }

    /// Layers inline TOML content.
    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push("inline toml".to_string());
        self
    }

    /// Enables `PREFIX_SECTION__KEY` environment variables as the
    /// second-highest layer.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self.sources.push(format!("env {prefix}_*"));
        self
    }

    /// Layers a single dotted-key override, such as `registry.base_url`.
    /// Overrides beat every other source.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid key or unconvertible value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("invalid override '{key}': {e}"))?;
        self.sources.push(format!("override {key}"));
        Ok(self)
    }

    /// Human-readable description of every layered source, lowest precedence
    /// first.
    #[must_use]
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Merges all sources, deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error when a required file is missing, any source holds
    /// invalid TOML, the merged tree does not fit [`Config`], or validation
    /// rejects a value.
    pub fn build(self) -> Result<Config> {
        let mut builder = self.builder;
        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(
                config::Environment::with_prefix(prefix)
                    .separator("__")
                    .try_parsing(true),
            );
        }
        let merged = builder.build()?;
        let config: Config = merged.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
