// doodba-tools: Doodba Addons Toolkit
//
// SPDX-FileCopyrightText: 2026 Alexandre D. Díaz
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end tests of the scan → resolve → compose → export pipeline,
//! driving the command handlers against a mocked registry and a temp
//! filesystem.

use std::io::Read;
use std::path::Path;

use doodba_tools::cli::convert::ConvertArgs;
use doodba_tools::cli::resolve::ResolveArgs;
use doodba_tools::cli::scan::ScanArgs;
use doodba_tools::cmd::convert::run_convert_command;
use doodba_tools::cmd::resolve::run_resolve_command;
use doodba_tools::cmd::scan::run_scan_command;
use doodba_tools::config::Config;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn config_for(server: &MockServer) -> Config {
    Config::from_str(&format!(
        r#"
        [registry]
        base_url = "{}"
        timeout_secs = 5
        "#,
        server.uri()
    ))
    .unwrap()
}

fn make_addon(root: &Path, name: &str) {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("__manifest__.py"), "{}").unwrap();
}

fn read_zip_entry(archive_path: &Path, name: &str) -> String {
    let file = std::fs::File::open(archive_path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut content = String::new();
    entry.read_to_string(&mut content).unwrap();
    content
}

// =============================================================================
// convert
// =============================================================================

#[tokio::test]
async fn test_convert_composes_sorted_document_with_unknown_group() {
    let server = MockServer::start().await;
    // the backend only knows addon_a; addon_b must land in _UNKNOWN_
    Mock::given(method("POST"))
        .and(path("/doodba/converter/addons"))
        .and(body_string_contains("addon_a"))
        .and(body_string_contains("addon_b"))
        .and(body_string_contains("16.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"technical_name": "addon_a", "repository_name": "mymods"},
        ])))
        .mount(&server)
        .await;

    let temp = temp_dir();
    make_addon(temp.path(), "addon_a");
    make_addon(temp.path(), "addon_b");
    let output = temp.path().join("addons.yaml");

    let args = ConvertArgs {
        paths: vec![temp.path().to_path_buf()],
        odoo_version: Some("16.0".to_string()),
        output: Some(output.clone()),
        legacy: false,
    };
    run_convert_command(&args, &config_for(&server)).await.unwrap();

    let yaml = std::fs::read_to_string(&output).unwrap();
    assert_eq!(yaml, "_UNKNOWN_:\n  - addon_b\nmymods:\n  - addon_a\n");
}

#[tokio::test]
async fn test_convert_uses_registry_default_version() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/common/odoo/versions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"key": 17, "value": "17.0"},
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/doodba/converter/addons"))
        .and(body_string_contains("17.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"technical_name": "addon_a", "repository_name": "mymods"},
        ])))
        .mount(&server)
        .await;

    let temp = temp_dir();
    make_addon(temp.path(), "addon_a");
    let output = temp.path().join("addons.yaml");

    let args = ConvertArgs {
        paths: vec![temp.path().to_path_buf()],
        odoo_version: None,
        output: Some(output.clone()),
        legacy: false,
    };
    run_convert_command(&args, &config_for(&server)).await.unwrap();

    let yaml = std::fs::read_to_string(&output).unwrap();
    assert_eq!(yaml, "mymods:\n  - addon_a\n");
}

#[tokio::test]
async fn test_convert_empty_scan_issues_no_request() {
    let server = MockServer::start().await;

    let temp = temp_dir();
    std::fs::create_dir(temp.path().join("not_an_addon")).unwrap();

    let args = ConvertArgs {
        paths: vec![temp.path().to_path_buf()],
        odoo_version: Some("16.0".to_string()),
        output: None,
        legacy: false,
    };
    run_convert_command(&args, &config_for(&server)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

// =============================================================================
// resolve
// =============================================================================

#[tokio::test]
async fn test_resolve_exports_reconciled_bundle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/doodba/dependency-resolver/addons"))
        .and(body_string_contains("web_responsive"))
        .and(body_string_contains("web_custom"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "odoo": {"web": ["web_responsive"], "server-tools": ["base_cron"]},
            "pip": ["astor"],
            "bin": ["libssl-dev"],
        })))
        .mount(&server)
        .await;

    let temp = temp_dir();
    let doc = temp.path().join("addons.yaml");
    // web_custom is unknown to the backend but claimed by the user document
    std::fs::write(&doc, "web:\n  - web_responsive\n  - web_custom\n").unwrap();
    let bundle = temp.path().join("doodba_bundle.zip");

    let args = ResolveArgs {
        file: doc,
        odoo_version: Some("16.0".to_string()),
        output: Some(bundle.clone()),
    };
    run_resolve_command(&args, &config_for(&server)).await.unwrap();

    assert_eq!(
        read_zip_entry(&bundle, "addons.yaml"),
        "server-tools:\n  - base_cron\nweb:\n  - web_responsive\n  - web_custom\n"
    );
    assert_eq!(read_zip_entry(&bundle, "pip.txt"), "astor");
    assert_eq!(read_zip_entry(&bundle, "apt.txt"), "libssl-dev");
}

#[tokio::test]
async fn test_resolve_ignores_non_yaml_files() {
    let server = MockServer::start().await;

    let temp = temp_dir();
    let doc = temp.path().join("addons.json");
    std::fs::write(&doc, "{}").unwrap();

    let args = ResolveArgs {
        file: doc,
        odoo_version: None,
        output: None,
    };
    // silently ignored: success, no request, no bundle
    run_resolve_command(&args, &config_for(&server)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
    assert!(!temp.path().join("doodba_bundle.zip").exists());
}

#[tokio::test]
async fn test_resolve_empty_document_issues_no_request() {
    let server = MockServer::start().await;

    let temp = temp_dir();
    let doc = temp.path().join("addons.yaml");
    std::fs::write(&doc, "").unwrap();

    let args = ResolveArgs {
        file: doc,
        odoo_version: None,
        output: None,
    };
    run_resolve_command(&args, &config_for(&server)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

// =============================================================================
// scan
// =============================================================================

#[tokio::test]
async fn test_scan_command_is_local_only() {
    let temp = temp_dir();
    make_addon(temp.path(), "addon_a");

    let args = ScanArgs {
        paths: vec![temp.path().to_path_buf()],
        legacy: false,
    };
    run_scan_command(&args, &Config::default()).unwrap();
}
