// doodba-tools: Doodba Addons Toolkit
//
// SPDX-FileCopyrightText: 2026 Alexandre D. Díaz
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bundle export: zips the composed artifacts for download-style delivery.
//!
//! ```text
//! [("addons.yaml", yaml), ("pip.txt", pip), ("apt.txt", apt)]
//!        |
//!        v
//!   export(path, files) --> doodba_bundle.zip
//! ```

#[cfg(test)]
mod tests;

use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use zip::write::SimpleFileOptions;

use crate::error::{BundleError, DoodbaResult};

/// RAII guard that removes a partial archive on Drop unless explicitly kept.
///
/// Ensures a failed export never leaves a truncated bundle on disk.
struct PartialArchiveGuard {
    path: PathBuf,
    keep: bool,
}

impl PartialArchiveGuard {
    const fn new(path: PathBuf) -> Self {
        Self { path, keep: false }
    }

    /// Mark the export as complete - the archive will NOT be deleted on drop.
    const fn keep(&mut self) {
        self.keep = true;
    }
}

impl Drop for PartialArchiveGuard {
    fn drop(&mut self) {
        if !self.keep {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

/// Writes a zip archive at `path` with one entry per `(name, text)` pair,
/// using the archive library's default compression.
///
/// # Errors
///
/// Returns an error when the archive file cannot be created or any entry
/// fails to serialize; no partial archive is left behind.
pub fn export(path: &Path, files: &[(&str, &str)]) -> DoodbaResult<()> {
    let file = std::fs::File::create(path).map_err(|e| BundleError::WriteFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let mut guard = PartialArchiveGuard::new(path.to_path_buf());
    let mut writer = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    for (name, content) in files {
        writer
            .start_file(*name, options)
            .map_err(BundleError::Zip)?;
        writer
            .write_all(content.as_bytes())
            .map_err(|e| BundleError::WriteFailed {
                path: path.display().to_string(),
                message: format!("failed to write entry {name}: {e}"),
            })?;
    }

    writer.finish().map_err(BundleError::Zip)?;
    guard.keep();
    info!(bundle = %path.display(), entries = files.len(), "bundle exported");
    Ok(())
}
