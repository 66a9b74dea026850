//! Shared REST API test infrastructure.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use mercado_rest::{AppState, ServerConfig};
use mercado_store::{MemoryStore, NewProduct, Product, ProductStore};
use serde_json::{Value, json};

/// Creates a test server over an empty in-memory store.
///
/// The backend is returned alongside the server so tests can seed and
/// inspect the collection directly.
pub fn create_test_server() -> (TestServer, Arc<MemoryStore>) {
    create_test_server_with_config(ServerConfig::for_testing())
}

/// Creates a test server with a custom configuration.
pub fn create_test_server_with_config(config: ServerConfig) -> (TestServer, Arc<MemoryStore>) {
    let backend = Arc::new(MemoryStore::new());
    let state = AppState::new(Arc::clone(&backend), config);
    let app = mercado_rest::routing::create_routes(state);
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, backend)
}

/// Seeds one product directly through the backend.
pub async fn seed_product(backend: &MemoryStore, name: &str, price: f64) -> Product {
    backend
        .insert(NewProduct::new(name, price).expect("valid seed product"))
        .await
        .expect("Failed to seed product")
}

/// Logs in with the test credentials and returns the bearer token.
pub async fn login(server: &TestServer) -> String {
    let response = server
        .post("/auth/login")
        .json(&json!({"user": "admin", "pass": "secret"}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    body["token"]
        .as_str()
        .expect("login response carries a token")
        .to_string()
}

/// Formats a bearer Authorization header value.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
