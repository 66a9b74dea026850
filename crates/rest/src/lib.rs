//! # mercado-rest - Versioned RESTful Product API
//!
//! This crate implements the HTTP layer of the Mercado product API: a
//! didactic but complete RESTful surface with resource-oriented routes,
//! content negotiation, API versioning, bulk operations, webhooks and
//! bearer-token authentication, backed by any [`mercado_store::ProductStore`].
//!
//! ## Features
//!
//! - **CRUD**: create, read, replace, patch and delete over products
//! - **Bulk operations**: multi-create and multi-delete with per-item
//!   partial success reporting (207)
//! - **Soft delete**: reversible deletion marker with restore
//! - **Content negotiation**: JSON, XML and HTML responses selected from
//!   the `Accept` header or the `format` query parameter
//! - **Versioning**: URL-prefix (`/api/v1`, `/api/v2`) and header
//!   (`API-Version`/`Accept-Version`) strategies, with an unversioned
//!   alias mapped to the latest version
//! - **Webhooks**: registered targets receive fire-and-forget event
//!   notifications
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mercado_rest::{ServerConfig, create_app};
//! use mercado_store::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let app = create_app(MemoryStore::with_seed());
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern |
//! |-----------|-------------|-------------|
//! | list | GET | `/api/{v}/productos` |
//! | read | GET | `/api/{v}/productos/{id}` |
//! | create | POST | `/api/{v}/productos` |
//! | replace | PUT | `/api/{v}/productos/{id}` |
//! | partial update | PATCH | `/api/{v}/productos/{id}` |
//! | delete | DELETE | `/api/{v}/productos/{id}` |
//! | bulk create | POST | `/api/{v}/productos/bulk` |
//! | bulk delete | DELETE | `/api/{v}/productos` |
//! | soft delete | PATCH | `/api/{v}/productos/{id}/soft-delete` |
//! | restore | PATCH | `/api/{v}/productos/{id}/restore` |
//! | versions | GET | `/api/versions` |
//! | login | POST | `/auth/login` |
//! | register webhook | POST | `/webhooks` |
//! | health | GET | `/health` |
//!
//! `{v}` is `v1`, `v2`, or omitted for the latest version.
//!
//! ## HTTP Headers
//!
//! - `Accept` - Content negotiation (application/json, application/xml, text/html)
//! - `API-Version` / `Accept-Version` - Version negotiation on the unversioned alias
//! - `Authorization` - `Bearer <token>` for protected operations
//!
//! Responses echo the resolved version in an `API-Version` header;
//! deprecated versions carry a `Warning` header.
//!
//! ## Error Handling
//!
//! Errors are structured `{"error": "<mensaje>"}` payloads rendered in
//! the negotiated format:
//!
//! | HTTP Status | Meaning |
//! |-------------|---------|
//! | 400 | Invalid input or invalid state |
//! | 401 | Missing/invalid credentials |
//! | 404 | Unknown product identifier |
//! | 406 | Unknown format (strict mode only) |
//! | 500 | Unexpected internal error |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and format-aware rendering
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, config, webhooks)
//! - [`auth`] - Token issuance and verification
//! - [`middleware`] - Format negotiation, version selection, auth
//! - [`extractors`] - Request context and listing parameters
//! - [`responses`] - JSON/XML/HTML rendering and version-shaped views
//! - [`handlers`] - HTTP request handlers
//! - [`routing`] - Route configuration
//! - [`webhooks`] - Registration and fire-and-forget delivery

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod responses;
pub mod routing;
pub mod state;
pub mod webhooks;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mercado_store::ProductStore;
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as CorsAny, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, info};

/// Creates the Axum application with default configuration.
///
/// This is a convenience function; for more control use
/// [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: ProductStore + Send + Sync + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up routes, tracing, the panic boundary, the request timeout and
/// (optionally) CORS.
///
/// # Example
///
/// ```rust,ignore
/// use mercado_rest::{ServerConfig, create_app_with_config};
/// use mercado_store::MemoryStore;
///
/// let config = ServerConfig {
///     port: 8080,
///     ..Default::default()
/// };
/// let app = create_app_with_config(MemoryStore::new(), config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: ProductStore + Send + Sync + 'static,
{
    info!(
        "Creating REST API server with backend: {}",
        storage.backend_name()
    );

    // Create application state
    let state = AppState::new(Arc::new(storage), config.clone());

    // Build the router with all API routes
    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Boundary handler: turns a panic anywhere below into a generic 500
/// payload without leaking internal details.
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(%detail, "Request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({ "error": "Error interno del servidor" })),
    )
        .into_response()
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(CorsAny);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(CorsAny);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(CorsAny);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mercado_rest={},tower_http=debug", level)));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
