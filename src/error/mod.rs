// doodba-tools: Doodba Addons Toolkit
//
// SPDX-FileCopyrightText: 2026 Alexandre D. Díaz
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            DoodbaError (~24 bytes)
//!                   |
//!   +------+-------+-------+--------+------+
//!   |      |       |       |        |      |
//!   v      v       v       v        v      v
//! Bail    Net     Cfg    Scan   Compose  Bundle  Io/Other
//!         Box     Box    Box      Box     Box    Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Network  Reqwest, HttpError, MalformedResponse, NoVersions
//!   Config   ParseError, MissingKey, InvalidValue
//!   Scan     RootNotFound, RootUnreadable
//!   Compose  InvalidDocument, Serialize
//!   Bundle   Zip, WriteFailed
//!
//! All variants boxed => DoodbaError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`DoodbaError`].
pub type DoodbaResult<T> = std::result::Result<T, DoodbaError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum DoodbaError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Registry/network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Addon scan error.
    #[error("scan error: {0}")]
    Scan(#[from] Box<ScanError>),

    /// Document composition error.
    #[error("compose error: {0}")]
    Compose(#[from] Box<ComposeError>),

    /// Bundle export error.
    #[error("bundle error: {0}")]
    Bundle(#[from] Box<BundleError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`DoodbaError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> DoodbaError {
    DoodbaError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for DoodbaError {
                fn from(err: $error) -> Self {
                    DoodbaError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    NetworkError => Network,
    ConfigError => Config,
    ScanError => Scan,
    ComposeError => Compose,
    BundleError => Bundle,
    std::io::Error => Io,
}

// --- Network Errors ---

/// Registry client errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Response body did not match the expected shape.
    #[error("malformed response from {url}: {message}")]
    MalformedResponse { url: String, message: String },

    /// The registry returned an empty version list, so no default
    /// Odoo version can be chosen.
    #[error("registry reported no odoo versions")]
    NoVersions,

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

// --- Config Errors ---

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be parsed.
    #[error("failed to parse {path}: {message}")]
    ParseError { path: String, message: String },

    /// A required key is missing.
    #[error("missing key '{key}' in section [{section}]")]
    MissingKey { section: String, key: String },

    /// A key holds an invalid value.
    #[error("invalid value for '{key}' in section [{section}]: {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Scan Errors ---

/// Addon scan errors.
///
/// Unreadable subtrees *during* a walk are not errors; they are skipped by
/// policy. These variants cover the scan roots the user named explicitly.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Scan root does not exist.
    #[error("scan root not found: {path}")]
    RootNotFound { path: String },

    /// Scan root exists but could not be enumerated.
    #[error("failed to read scan root {path}: {message}")]
    RootUnreadable { path: String, message: String },
}

// --- Compose Errors ---

/// Document composition errors.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// The user-supplied document is not a mapping of string sequences.
    #[error("invalid addons document: {message}")]
    InvalidDocument { message: String },

    /// YAML serialization failed.
    #[error("yaml serialization failed: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

// --- Bundle Errors ---

/// Bundle export errors.
#[derive(Debug, Error)]
pub enum BundleError {
    /// Archive construction failed.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The archive file could not be written.
    #[error("failed to write bundle {path}: {message}")]
    WriteFailed { path: String, message: String },
}
