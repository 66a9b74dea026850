//! Route configuration for the Mercado REST API.
//!
//! The product surface is mounted three times: pinned to v1 under
//! `/api/v1`, pinned to v2 under `/api/v2`, and as an unversioned alias
//! under `/api` that resolves the version from request headers
//! (defaulting to the latest version).

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    routing::{get, patch, post},
};
use mercado_store::ProductStore;

use crate::handlers;
use crate::middleware::auth::require_auth;
use crate::middleware::content_type::enforce_strict_format;
use crate::middleware::version::{ApiVersion, pin_version, resolve_version};
use crate::state::AppState;

/// Creates all routes for the REST API.
///
/// # Routes
///
/// ## System-level
/// - `GET /health` - Health check
/// - `POST /auth/login` - Issue a bearer token
/// - `POST /webhooks` - Register a webhook target (auth)
/// - `GET /api/versions` - Supported versions and deprecation metadata
///
/// ## Per version prefix (`/api/v1`, `/api/v2`, `/api` alias)
/// - `GET /productos` - List (filters, sort, pagination)
/// - `POST /productos` - Create (auth)
/// - `DELETE /productos` - Bulk delete by id list
/// - `POST /productos/bulk` - Bulk create (auth)
/// - `GET /productos/{id}` - Read
/// - `PUT /productos/{id}` - Replace
/// - `PATCH /productos/{id}` - Partial update
/// - `DELETE /productos/{id}` - Delete
/// - `PATCH /productos/{id}/soft-delete` - Soft delete
/// - `PATCH /productos/{id}/restore` - Restore
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: ProductStore + Send + Sync + 'static,
{
    let api_v1 = product_routes(&state).layer(middleware::from_fn(
        |request: Request, next: Next| pin_version(ApiVersion::V1, request, next),
    ));
    let api_v2 = product_routes(&state).layer(middleware::from_fn(
        |request: Request, next: Next| pin_version(ApiVersion::V2, request, next),
    ));
    let api_alias = product_routes(&state).layer(middleware::from_fn(resolve_version));

    Router::new()
        // System-level routes
        .route("/health", get(handlers::health_handler::<S>))
        .route("/auth/login", post(handlers::login_handler::<S>))
        .route(
            "/webhooks",
            post(handlers::register_webhook_handler::<S>).layer(
                middleware::from_fn_with_state(state.clone(), require_auth::<S>),
            ),
        )
        .route("/api/versions", get(handlers::versions_handler))
        // Versioned product surface
        .nest("/api/v1", api_v1)
        .nest("/api/v2", api_v2)
        .nest("/api", api_alias)
        // Strict-mode format rejection (no-op unless configured)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            enforce_strict_format::<S>,
        ))
        // State
        .with_state(state)
}

/// The product routes mounted under every version prefix.
fn product_routes<S>(state: &AppState<S>) -> Router<AppState<S>>
where
    S: ProductStore + Send + Sync + 'static,
{
    // Create and bulk create mirror the reference surface: they are the
    // only product operations behind authentication.
    let protected = Router::new()
        .route("/productos", post(handlers::create_handler::<S>))
        .route("/productos/bulk", post(handlers::bulk_create_handler::<S>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth::<S>,
        ));

    Router::new()
        .route(
            "/productos",
            get(handlers::list_handler::<S>).delete(handlers::bulk_delete_handler::<S>),
        )
        .route(
            "/productos/{id}",
            get(handlers::read_handler::<S>)
                .put(handlers::update_handler::<S>)
                .patch(handlers::patch_handler::<S>)
                .delete(handlers::delete_handler::<S>),
        )
        .route(
            "/productos/{id}/soft-delete",
            patch(handlers::soft_delete_handler::<S>),
        )
        .route(
            "/productos/{id}/restore",
            patch(handlers::restore_handler::<S>),
        )
        .merge(protected)
}
