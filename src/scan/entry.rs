// doodba-tools: Doodba Addons Toolkit
//
// SPDX-FileCopyrightText: 2026 Alexandre D. Díaz
// SPDX-License-Identifier: GPL-3.0-or-later

//! Directory entry model for the addon walker.

use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A single node of a scanned directory tree.
///
/// Mirrors the file/directory split of filesystem enumeration APIs: a node is
/// exactly one of the two. Entries that are neither (sockets, broken
/// symlinks) never make it into a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsEntry {
    /// A plain file.
    File {
        /// Base name of the file.
        name: String,
    },
    /// A directory that can be enumerated further.
    Directory {
        /// Base name of the directory.
        name: String,
        /// Absolute or caller-relative path used to enumerate children.
        path: PathBuf,
    },
}

impl FsEntry {
    /// Entry base name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::File { name } | Self::Directory { name, .. } => name,
        }
    }

    /// True for [`FsEntry::File`].
    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }
}

/// Enumerates the immediate children of `dir`, draining the OS directory
/// stream to exhaustion so the result is the full child list.
///
/// Entries with unreadable metadata or non-UTF-8 names are skipped with a
/// debug log; they contribute nothing to the batch. Order is whatever the
/// underlying filesystem yields.
///
/// # Errors
///
/// Returns an error only when the directory stream itself cannot be opened.
pub fn read_entries(dir: &Path) -> io::Result<Vec<FsEntry>> {
    let mut entries = Vec::new();
    for item in std::fs::read_dir(dir)? {
        let item = match item {
            Ok(item) => item,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let Ok(file_type) = item.file_type() else {
            debug!(path = %item.path().display(), "skipping entry with unreadable type");
            continue;
        };
        let Some(name) = item.file_name().to_str().map(String::from) else {
            debug!(path = %item.path().display(), "skipping entry with non-utf8 name");
            continue;
        };
        if file_type.is_dir() {
            entries.push(FsEntry::Directory {
                name,
                path: item.path(),
            });
        } else if file_type.is_file() {
            entries.push(FsEntry::File { name });
        }
    }
    Ok(entries)
}
