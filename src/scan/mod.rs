// doodba-tools: Doodba Addons Toolkit
//
// SPDX-FileCopyrightText: 2026 Alexandre D. Díaz
// SPDX-License-Identifier: GPL-3.0-or-later

//! Addon discovery by manifest detection.
//!
//! ```text
//! scan_root(path)
//!      |
//!      v
//!  read_entries ──► is_addon? ──yes──► record root name, stop descent
//!      |                │
//!      |                no
//!      v                v
//!  child dirs ──► walk each, depth-first, unreadable subtrees skipped
//! ```
//!
//! An addon root is a directory whose *immediate* children include a
//! recognized manifest file. Addons never nest: once a manifest is seen the
//! walker records the directory and does not look inside it.

pub mod entry;


use std::path::Path;
use tracing::debug;

use crate::error::{DoodbaResult, ScanError};
use entry::{FsEntry, read_entries};

/// Recursive addon-root scanner.
#[derive(Debug, Clone)]
pub struct Scanner {
    manifest_names: Vec<String>,
}

impl Scanner {
    /// Create a scanner recognizing the given manifest filenames.
    #[must_use]
    pub fn new(manifest_names: Vec<String>) -> Self {
        Self { manifest_names }
    }

    /// Manifest filenames this scanner recognizes.
    #[must_use]
    pub fn manifest_names(&self) -> &[String] {
        &self.manifest_names
    }

    /// True iff any entry in the batch is a file with a recognized manifest
    /// name. Pure and order-independent.
    #[must_use]
    pub fn is_addon(&self, entries: &[FsEntry]) -> bool {
        entries
            .iter()
            .any(|e| e.is_file() && self.manifest_names.iter().any(|m| m == e.name()))
    }

    /// Walks `root` and returns the names of all maximal addon-root
    /// directories beneath it, in depth-first discovery order.
    ///
    /// A `root` that is a plain file yields an empty list. Subtrees that
    /// fail to enumerate mid-walk are skipped silently (debug log only).
    ///
    /// # Errors
    ///
    /// Returns an error when `root` itself does not exist or cannot be
    /// enumerated; inner read failures never surface.
    pub fn scan_root(&self, root: &Path) -> DoodbaResult<Vec<String>> {
        let metadata = std::fs::metadata(root).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ScanError::RootNotFound {
                    path: root.display().to_string(),
                }
            } else {
                ScanError::RootUnreadable {
                    path: root.display().to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        if !metadata.is_dir() {
            debug!(root = %root.display(), "scan root is not a directory, nothing to do");
            return Ok(Vec::new());
        }

        let entries = read_entries(root).map_err(|e| ScanError::RootUnreadable {
            path: root.display().to_string(),
            message: e.to_string(),
        })?;

        let root_name = root
            .file_name()
            .and_then(|n| n.to_str())
            .map_or_else(|| root.display().to_string(), String::from);

        let mut found = Vec::new();
        self.walk(&root_name, &entries, &mut found);
        debug!(root = %root.display(), addons = found.len(), "scan finished");
        Ok(found)
    }

    /// Depth-first descent: one subtree is fully walked before the next
    /// sibling begins, so `acc` reflects a stable left-to-right order.
    fn walk(&self, dir_name: &str, entries: &[FsEntry], acc: &mut Vec<String>) {
        if self.is_addon(entries) {
            acc.push(dir_name.to_string());
            return;
        }
        for child in entries {
            let FsEntry::Directory { name, path } = child else {
                continue;
            };
            match read_entries(path) {
                Ok(child_entries) => self.walk(name, &child_entries, acc),
                Err(e) => {
                    // Best-effort policy: the subtree contributes no results.
                    debug!(path = %path.display(), error = %e, "skipping unreadable subtree");
                }
            }
        }
    }
}
