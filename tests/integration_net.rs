// doodba-tools: Doodba Addons Toolkit
//
// SPDX-FileCopyrightText: 2026 Alexandre D. Díaz
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the registry client using wiremock.
//!
//! Covers version listing, both POST endpoints, the multipart form
//! encoding, and error propagation (HTTP errors, malformed bodies).

use std::time::Duration;

use doodba_tools::error::{DoodbaError, NetworkError};
use doodba_tools::net::RegistryClient;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> RegistryClient {
    RegistryClient::new(server.uri(), Duration::from_secs(5))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

// =============================================================================
// versions
// =============================================================================

#[tokio::test]
async fn test_versions_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/common/odoo/versions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"key": 16, "value": "16.0"},
            {"key": 15, "value": "15.0"},
        ])))
        .mount(&server)
        .await;

    let versions = client(&server).versions().await.unwrap();
    assert_eq!(versions.len(), 2);
    assert_eq!(versions[0].key, 16);
    assert_eq!(versions[0].value, "16.0");
}

#[tokio::test]
async fn test_default_version_is_first_entry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/common/odoo/versions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"key": 17, "value": "17.0"},
            {"key": 16, "value": "16.0"},
        ])))
        .mount(&server)
        .await;

    let version = client(&server).default_version().await.unwrap();
    assert_eq!(version, "17.0");
}

#[tokio::test]
async fn test_default_version_empty_list_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/common/odoo/versions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let result = client(&server).default_version().await;
    match result.unwrap_err() {
        DoodbaError::Network(boxed) => {
            assert!(matches!(*boxed, NetworkError::NoVersions));
        }
        other => panic!("Expected DoodbaError::Network, got {other:?}"),
    }
}

// =============================================================================
// convert_addons
// =============================================================================

#[tokio::test]
async fn test_convert_addons_posts_form_and_decodes_rows() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/doodba/converter/addons"))
        .and(body_string_contains("odoo_version"))
        .and(body_string_contains("16.0"))
        .and(body_string_contains("web_responsive"))
        .and(body_string_contains("base_cron"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"technical_name": "web_responsive", "repository_name": "web"},
            {"technical_name": "base_cron", "repository_name": "server-tools"},
        ])))
        .mount(&server)
        .await;

    let rows = client(&server)
        .convert_addons("16.0", &strings(&["web_responsive", "base_cron"]))
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].technical_name, "web_responsive");
    assert_eq!(rows[0].repository_name, "web");
}

#[tokio::test]
async fn test_convert_addons_http_errors() {
    for status in [400, 404, 500] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/doodba/converter/addons"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let result = client(&server)
            .convert_addons("16.0", &strings(&["web_responsive"]))
            .await;
        match result.unwrap_err() {
            DoodbaError::Network(boxed) => match *boxed {
                NetworkError::HttpError {
                    status: actual_status,
                    ..
                } => assert_eq!(actual_status, status),
                other => panic!("Expected NetworkError::HttpError for {status}, got {other:?}"),
            },
            other => panic!("Expected DoodbaError::Network for {status}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_convert_addons_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/doodba/converter/addons"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let result = client(&server)
        .convert_addons("16.0", &strings(&["web_responsive"]))
        .await;
    match result.unwrap_err() {
        DoodbaError::Network(boxed) => {
            assert!(matches!(*boxed, NetworkError::MalformedResponse { .. }));
        }
        other => panic!("Expected DoodbaError::Network, got {other:?}"),
    }
}

// =============================================================================
// resolve_addons
// =============================================================================

#[tokio::test]
async fn test_resolve_addons_decodes_full_resolution() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/doodba/dependency-resolver/addons"))
        .and(body_string_contains("modules"))
        .and(body_string_contains("web_responsive"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "odoo": {"web": ["web_responsive"], "server-tools": ["base_cron"]},
            "pip": ["requests"],
            "bin": ["libxml2-dev"],
        })))
        .mount(&server)
        .await;

    let resolution = client(&server)
        .resolve_addons("16.0", &strings(&["web_responsive"]))
        .await
        .unwrap();
    assert_eq!(
        resolution.odoo.get("web"),
        Some(&strings(&["web_responsive"]))
    );
    assert_eq!(resolution.pip, strings(&["requests"]));
    assert_eq!(resolution.bin, strings(&["libxml2-dev"]));
}

#[tokio::test]
async fn test_base_url_trailing_slash_is_normalized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/common/odoo/versions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = RegistryClient::new(format!("{}/", server.uri()), Duration::from_secs(5));
    assert!(!client.base_url().ends_with('/'));
    assert!(client.versions().await.unwrap().is_empty());
}
