// doodba-tools: Doodba Addons Toolkit
//
// SPDX-FileCopyrightText: 2026 Alexandre D. Díaz
// SPDX-License-Identifier: GPL-3.0-or-later

//! Grouped addons document composition.
//!
//! ```text
//! requested modules        backend grouping
//!        |                        |
//!        +----------+-------------+
//!                   v
//!           compose / reconcile
//!                   |
//!                   v
//!        ComposedDocument (BTreeMap, keys sorted)
//!                   |
//!                   v
//!              to_yaml (2-space block style)
//! ```
//!
//! The document is a plain `BTreeMap`, so the sorted-key invariant holds by
//! construction. Requested modules the backend could not place end up under
//! the [`UNKNOWN_GROUP`] sentinel.


use std::collections::{BTreeMap, BTreeSet};

use crate::error::ComposeError;

/// Reserved group key collecting modules no repository claimed.
///
/// All-caps on purpose: real repository names are lowercase, and the
/// underscores keep it clear of any plausible repository name.
pub const UNKNOWN_GROUP: &str = "_UNKNOWN_";

/// Mapping of group key (repository name or [`UNKNOWN_GROUP`]) to an ordered
/// module list. Keys iterate in ascending lexicographic order.
pub type ComposedDocument = BTreeMap<String, Vec<String>>;

/// Reduces `names` to its unique elements, keeping the first occurrence of
/// each and dropping later duplicates. Equality is exact string match.
#[must_use]
pub fn dedupe<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = BTreeSet::new();
    let mut unique = Vec::new();
    for name in names {
        let name = name.into();
        if seen.insert(name.clone()) {
            unique.push(name);
        }
    }
    unique
}

/// Folds `(repository, module)` pairs into a grouped document, preserving
/// pair order within each group.
#[must_use]
pub fn group_by_repository<I>(pairs: I) -> ComposedDocument
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut doc = ComposedDocument::new();
    for (repository, module) in pairs {
        doc.entry(repository).or_default().push(module);
    }
    doc
}

/// Merges the backend grouping with the requested module list.
///
/// Modules in `requested` that no group of `resolved` contains are appended
/// to the [`UNKNOWN_GROUP`], in `requested` order. The group is only created
/// when at least one module is missing.
#[must_use]
pub fn compose(resolved: ComposedDocument, requested: &[String]) -> ComposedDocument {
    let mut doc = resolved;
    let placed: BTreeSet<&str> = doc.values().flatten().map(String::as_str).collect();
    let missing: Vec<String> = requested
        .iter()
        .filter(|m| !placed.contains(m.as_str()))
        .cloned()
        .collect();
    if !missing.is_empty() {
        doc.entry(UNKNOWN_GROUP.to_string())
            .or_default()
            .extend(missing);
    }
    doc
}

/// Merges the backend grouping with a previously-known user document.
///
/// For every requested module the backend left unplaced, the first group of
/// `user_groups` (in document order) that lists the module claims it: the
/// module is folded into that repository's output group, created if the
/// backend did not return it. A module listed in several user groups is
/// folded at most once. Modules unresolved by both sources land in the
/// [`UNKNOWN_GROUP`].
#[must_use]
pub fn reconcile(
    resolved: ComposedDocument,
    user_groups: &[(String, Vec<String>)],
    requested: &[String],
) -> ComposedDocument {
    let mut doc = resolved;
    let mut placed: BTreeSet<String> = doc.values().flatten().cloned().collect();

    let mut unknown = Vec::new();
    for module in requested {
        if placed.contains(module) {
            continue;
        }
        let owner = user_groups
            .iter()
            .find(|(_, modules)| modules.iter().any(|m| m == module))
            .map(|(repository, _)| repository);
        match owner {
            Some(repository) => {
                doc.entry(repository.clone()).or_default().push(module.clone());
                placed.insert(module.clone());
            }
            None => unknown.push(module.clone()),
        }
    }

    if !unknown.is_empty() {
        doc.entry(UNKNOWN_GROUP.to_string())
            .or_default()
            .extend(unknown);
    }
    doc
}

/// Parses a user-supplied addons document, preserving group order.
///
/// The document must be a YAML mapping of string keys to sequences of
/// strings. A null body yields an empty document (an empty `addons.yaml` is
/// a valid starting point).
///
/// # Errors
///
/// Returns [`ComposeError::InvalidDocument`] for any other shape.
pub fn parse_addons_document(text: &str) -> Result<Vec<(String, Vec<String>)>, ComposeError> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(|e| ComposeError::InvalidDocument {
            message: e.to_string(),
        })?;

    let mapping = match value {
        serde_yaml::Value::Null => return Ok(Vec::new()),
        serde_yaml::Value::Mapping(mapping) => mapping,
        _ => {
            return Err(ComposeError::InvalidDocument {
                message: "top level is not a mapping".to_string(),
            });
        }
    };

    let mut groups = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let serde_yaml::Value::String(group) = key else {
            return Err(ComposeError::InvalidDocument {
                message: "group keys must be strings".to_string(),
            });
        };
        let serde_yaml::Value::Sequence(items) = value else {
            return Err(ComposeError::InvalidDocument {
                message: format!("group '{group}' is not a sequence"),
            });
        };
        let mut modules = Vec::with_capacity(items.len());
        for item in items {
            let serde_yaml::Value::String(module) = item else {
                return Err(ComposeError::InvalidDocument {
                    message: format!("group '{group}' holds a non-string module name"),
                });
            };
            modules.push(module);
        }
        groups.push((group, modules));
    }
    Ok(groups)
}

/// Serializes a composed document as a block mapping of block sequences with
/// two-space indented items and a trailing newline.
///
/// serde_yaml emits sequence dashes at column zero; the indent pass below
/// keeps the two-space contract of the exported `addons.yaml`. Parsing the
/// output reproduces the mapping exactly.
///
/// # Errors
///
/// Returns an error when serialization itself fails.
pub fn to_yaml(doc: &ComposedDocument) -> Result<String, ComposeError> {
    let flat = serde_yaml::to_string(doc)?;
    let mut out = String::with_capacity(flat.len() + doc.values().map(Vec::len).sum::<usize>() * 2);
    for line in flat.lines() {
        if line.starts_with("- ") {
            out.push_str("  ");
        }
        out.push_str(line);
        out.push('\n');
    }
    Ok(out)
}
