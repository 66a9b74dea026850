//! API versioning tests.
//!
//! Checks the URL-prefix and header version strategies, the unversioned
//! alias, the `API-Version` response echo, the v1 deprecation warning,
//! and the per-version response shapes.

mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use common::{bearer, create_test_server, login, seed_product};
use serde_json::{Value, json};

const API_VERSION: HeaderName = HeaderName::from_static("api-version");
const ACCEPT_VERSION: HeaderName = HeaderName::from_static("accept-version");
const AUTHORIZATION: HeaderName = HeaderName::from_static("authorization");

fn response_version(response: &axum_test::TestResponse) -> String {
    response
        .headers()
        .get("api-version")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

#[tokio::test]
async fn test_v1_listing_uses_legacy_projection() {
    let (server, backend) = create_test_server();
    seed_product(&backend, "Mouse", 25.0).await;

    let response = server.get("/api/v1/productos").await;
    response.assert_status_ok();
    assert_eq!(response_version(&response), "v1");

    let body: Value = response.json();
    let items = body["productos"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    // Trimmed projection: id, nombre, precio only.
    assert_eq!(items[0].as_object().unwrap().len(), 3);
    assert_eq!(items[0]["nombre"], "Mouse");
    assert!(items[0].get("categoria").is_none());
    assert_eq!(body["total"], 1);
    assert_eq!(body["paginasTotal"], 1);
}

#[tokio::test]
async fn test_v2_listing_uses_data_and_meta() {
    let (server, backend) = create_test_server();
    seed_product(&backend, "Mouse", 25.0).await;

    let response = server.get("/api/v2/productos").await;
    assert_eq!(response_version(&response), "v2");

    let body: Value = response.json();
    assert_eq!(body["version"], "2.0");
    assert_eq!(body["meta"]["total"], 1);
    let items = body["data"].as_array().unwrap();
    assert_eq!(items[0]["categoria"], "General");
}

#[tokio::test]
async fn test_unversioned_alias_maps_to_latest() {
    let (server, backend) = create_test_server();
    seed_product(&backend, "Mouse", 25.0).await;

    let response = server.get("/api/productos").await;
    response.assert_status_ok();
    assert_eq!(response_version(&response), "v2");
    let body: Value = response.json();
    assert!(body.get("data").is_some());
}

#[tokio::test]
async fn test_api_version_header_selects_v1_on_alias() {
    let (server, backend) = create_test_server();
    seed_product(&backend, "Mouse", 25.0).await;

    let response = server
        .get("/api/productos")
        .add_header(API_VERSION, HeaderValue::from_static("v1"))
        .await;

    assert_eq!(response_version(&response), "v1");
    let body: Value = response.json();
    assert!(body.get("productos").is_some());
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_accept_version_header_is_consulted() {
    let (server, backend) = create_test_server();
    seed_product(&backend, "Mouse", 25.0).await;

    let response = server
        .get("/api/productos")
        .add_header(ACCEPT_VERSION, HeaderValue::from_static("v1"))
        .await;
    assert_eq!(response_version(&response), "v1");
}

#[tokio::test]
async fn test_url_prefix_beats_header() {
    let (server, backend) = create_test_server();
    seed_product(&backend, "Mouse", 25.0).await;

    let response = server
        .get("/api/v1/productos")
        .add_header(API_VERSION, HeaderValue::from_static("v2"))
        .await;
    assert_eq!(response_version(&response), "v1");
}

#[tokio::test]
async fn test_unknown_header_version_falls_back_to_latest() {
    let (server, backend) = create_test_server();
    seed_product(&backend, "Mouse", 25.0).await;

    let response = server
        .get("/api/productos")
        .add_header(API_VERSION, HeaderValue::from_static("v9"))
        .await;
    response.assert_status_ok();
    assert_eq!(response_version(&response), "v2");
}

#[tokio::test]
async fn test_v1_carries_deprecation_warning() {
    let (server, _backend) = create_test_server();

    let v1 = server.get("/api/v1/productos").await;
    let warning = v1
        .headers()
        .get("warning")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(warning.contains("deprecated"));

    let v2 = server.get("/api/v2/productos").await;
    assert!(v2.headers().get("warning").is_none());
}

#[tokio::test]
async fn test_v1_read_is_trimmed() {
    let (server, backend) = create_test_server();
    let product = seed_product(&backend, "Mouse", 25.0).await;

    let body: Value = server
        .get(&format!("/api/v1/productos/{}", product.id))
        .await
        .json();
    assert_eq!(body.as_object().unwrap().len(), 3);
    assert_eq!(body["id"], product.id);
}

#[tokio::test]
async fn test_v1_mutation_envelope_uses_producto_key() {
    let (server, _backend) = create_test_server();
    let token = login(&server).await;

    let response = server
        .post("/api/v1/productos")
        .add_header(
            AUTHORIZATION,
            HeaderValue::from_str(&bearer(&token)).unwrap(),
        )
        .json(&json!({"nombre": "Mouse", "precio": 25}))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert!(body.get("producto").is_some());
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_errors_echo_resolved_version() {
    let (server, _backend) = create_test_server();
    let response = server.get("/api/v1/productos/999").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response_version(&response), "v1");
}

#[tokio::test]
async fn test_versions_document() {
    let (server, _backend) = create_test_server();
    let response = server.get("/api/versions").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["current"], "v2");
    assert_eq!(body["legacy"], json!(["v1"]));
    assert_eq!(body["versions"]["v1"]["status"], "deprecated");
    assert_eq!(body["versions"]["v2"]["status"], "current");
    assert!(body["versions"]["v1"]["sunsetAt"].is_string());
}

#[tokio::test]
async fn test_versions_document_respects_format() {
    let (server, _backend) = create_test_server();
    let response = server.get("/api/versions?format=xml").await;
    let body = response.text();
    assert!(body.contains("<current>v2</current>"));
}
