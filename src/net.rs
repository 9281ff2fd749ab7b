// doodba-tools: Doodba Addons Toolkit
//
// SPDX-FileCopyrightText: 2026 Alexandre D. Díaz
// SPDX-License-Identifier: GPL-3.0-or-later

//! Registry HTTP client.
//!
//! ```text
//! RegistryClient::new(base_url, timeout)
//!        |
//!        +-- versions()        GET  /common/odoo/versions
//!        +-- convert_addons()  POST /doodba/converter/addons
//!        +-- resolve_addons()  POST /doodba/dependency-resolver/addons
//!
//! POST body: multipart form, one `odoo_version` field and one repeated
//! `modules` field per module. Single-shot: no retry, no batching.
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

use crate::error::{DoodbaResult, NetworkError};

/// One Odoo version the registry knows about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OdooVersionInfo {
    /// Registry-internal version key.
    pub key: u8,
    /// Human-readable version string, e.g. `16.0`.
    pub value: String,
}

/// Converter response row: one module placed in one repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleRepositoryInfo {
    pub technical_name: String,
    pub repository_name: String,
}

/// Dependency-resolver response: modules grouped by repository plus the
/// auxiliary pip and bin (apt) package lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyResolution {
    pub odoo: BTreeMap<String, Vec<String>>,
    pub pip: Vec<String>,
    pub bin: Vec<String>,
}

/// Client for the addons registry endpoints.
///
/// One resolution attempt either succeeds or fails; the caller retries by
/// rerunning the command.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    client: reqwest::Client,
    base_url: String,
}

impl RegistryClient {
    /// Create a client for the registry at `base_url`.
    ///
    /// Falls back to a basic client if custom configuration fails.
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(format!("doodba-tools/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Registry base URL, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the Odoo versions the registry supports.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status, or a
    /// response body that is not a version list.
    pub async fn versions(&self) -> DoodbaResult<Vec<OdooVersionInfo>> {
        let url = format!("{}/common/odoo/versions", self.base_url);
        debug!(%url, "fetching odoo versions");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(NetworkError::Reqwest)?;
        Self::decode(&url, response).await
    }

    /// The registry's default Odoo version: the first entry of the version
    /// list.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::NoVersions`] when the registry reports an
    /// empty list, or any error of [`Self::versions`].
    pub async fn default_version(&self) -> DoodbaResult<String> {
        let versions = self.versions().await?;
        versions
            .into_iter()
            .next()
            .map(|v| v.value)
            .ok_or_else(|| NetworkError::NoVersions.into())
    }

    /// Asks the converter endpoint to place `modules` into repositories.
    ///
    /// All modules go in a single request, regardless of count.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status, or a
    /// malformed response body.
    pub async fn convert_addons(
        &self,
        odoo_version: &str,
        modules: &[String],
    ) -> DoodbaResult<Vec<ModuleRepositoryInfo>> {
        let url = format!("{}/doodba/converter/addons", self.base_url);
        debug!(%url, odoo_version, modules = modules.len(), "converting addons");
        let response = self.post_modules(&url, odoo_version, modules).await?;
        Self::decode(&url, response).await
    }

    /// Asks the dependency-resolver endpoint for the full grouping of
    /// `modules` plus their pip and bin requirements.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status, or a
    /// malformed response body.
    pub async fn resolve_addons(
        &self,
        odoo_version: &str,
        modules: &[String],
    ) -> DoodbaResult<DependencyResolution> {
        let url = format!("{}/doodba/dependency-resolver/addons", self.base_url);
        debug!(%url, odoo_version, modules = modules.len(), "resolving addon dependencies");
        let response = self.post_modules(&url, odoo_version, modules).await?;
        Self::decode(&url, response).await
    }

    /// POSTs the multipart form both write endpoints share.
    async fn post_modules(
        &self,
        url: &str,
        odoo_version: &str,
        modules: &[String],
    ) -> DoodbaResult<reqwest::Response> {
        let mut form = reqwest::multipart::Form::new().text("odoo_version", odoo_version.to_string());
        for module in modules {
            form = form.text("modules", module.clone());
        }
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(NetworkError::Reqwest)?;
        Ok(response)
    }

    /// Checks the status and deserializes the JSON body.
    async fn decode<T: serde::de::DeserializeOwned>(
        url: &str,
        response: reqwest::Response,
    ) -> DoodbaResult<T> {
        if !response.status().is_success() {
            return Err(NetworkError::HttpError {
                status: response.status().as_u16(),
                url: url.to_string(),
            }
            .into());
        }
        let body = response.text().await.map_err(NetworkError::Reqwest)?;
        serde_json::from_str(&body)
            .map_err(|e| {
                NetworkError::MalformedResponse {
                    url: url.to_string(),
                    message: e.to_string(),
                }
                .into()
            })
    }
}
