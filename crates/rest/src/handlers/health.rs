//! Health check handler.

use axum::{Json, extract::State, response::IntoResponse};
use mercado_store::ProductStore;
use serde_json::json;

use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET /health`
///
/// # Response
///
/// Always `200 OK` with the backend name and current product count.
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> impl IntoResponse
where
    S: ProductStore + Send + Sync,
{
    let count = state.storage().count().await.unwrap_or(0);

    Json(json!({
        "status": "ok",
        "backend": state.storage().backend_name(),
        "productos": count,
    }))
}
