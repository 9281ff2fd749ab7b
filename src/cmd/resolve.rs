// doodba-tools: Doodba Addons Toolkit
//
// SPDX-FileCopyrightText: 2026 Alexandre D. Díaz
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolve command implementation.
//!
//! ```text
//! addons.yaml --> flatten + dedupe --> POST /doodba/dependency-resolver/addons
//!      |                                      |
//!      +----------- reconcile <---------------+
//!                       |
//!                       v
//!      doodba_bundle.zip { addons.yaml, pip.txt, apt.txt }
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{info, warn};

use crate::bundle;
use crate::cli::resolve::ResolveArgs;
use crate::cmd::{registry_client, target_version};
use crate::compose::{dedupe, parse_addons_document, reconcile, to_yaml};
use crate::config::Config;
use crate::error::Result;

/// Main handler for the resolve command.
///
/// A file without a YAML extension is ignored with a warning, matching the
/// registry UI's behavior for non-YAML drops.
///
/// # Errors
///
/// Returns an error when the document cannot be read or parsed, the
/// registry request fails, or the bundle cannot be written.
pub async fn run_resolve_command(args: &ResolveArgs, config: &Config) -> Result<()> {
    if !has_yaml_extension(&args.file) {
        warn!(file = %args.file.display(), "not a .yaml/.yml file, ignoring");
        return Ok(());
    }

    let text = tokio::fs::read_to_string(&args.file)
        .await
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let user_groups = parse_addons_document(&text)?;
    let requested = dedupe(
        user_groups
            .iter()
            .flat_map(|(_, modules)| modules.iter().cloned()),
    );
    if requested.is_empty() {
        info!("document lists no modules, nothing to resolve");
        return Ok(());
    }
    info!(modules = requested.len(), "resolving dependencies");

    let client = registry_client(config);
    let version = target_version(&client, args.odoo_version.as_deref()).await?;
    let resolution = client.resolve_addons(&version, &requested).await?;

    let yaml = to_yaml(&reconcile(resolution.odoo, &user_groups, &requested))?;
    let pip = resolution.pip.join("\n");
    let apt = resolution.bin.join("\n");

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.bundle_name));
    bundle::export(
        &output,
        &[
            (config.output.addons_file.as_str(), yaml.as_str()),
            (config.output.pip_file.as_str(), pip.as_str()),
            (config.output.apt_file.as_str(), apt.as_str()),
        ],
    )?;
    println!("{}", output.display());
    Ok(())
}

fn has_yaml_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
}

#[cfg(test)]
mod tests {
    use super::has_yaml_extension;
    use std::path::Path;

    #[test]
    fn test_yaml_extension_detection() {
        assert!(has_yaml_extension(Path::new("addons.yaml")));
        assert!(has_yaml_extension(Path::new("addons.yml")));
        assert!(has_yaml_extension(Path::new("ADDONS.YAML")));
        assert!(!has_yaml_extension(Path::new("addons.json")));
        assert!(!has_yaml_extension(Path::new("addons")));
    }
}
