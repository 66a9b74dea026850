//! Webhook registration handler.
//!
//! `POST /webhooks` - register an external delivery target for product
//! events. Registrations are never updated and only removed by process
//! restart.

use axum::{Json, extract::State, response::IntoResponse, response::Response};
use mercado_store::ProductStore;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Handler for webhook registration.
///
/// Requires authentication.
///
/// # HTTP Request
///
/// `POST /webhooks`
///
/// ```http
/// POST /webhooks HTTP/1.1
/// Authorization: Bearer <token>
/// Content-Type: application/json
///
/// {"url": "https://example.com/hook", "events": ["productos.created"]}
/// ```
///
/// # Response
///
/// - `200 OK` - `{mensaje, id}`
/// - `400 Bad Request` - URL missing/invalid or events empty
pub async fn register_webhook_handler<S>(
    State(state): State<AppState<S>>,
    Json(body): Json<Value>,
) -> Response
where
    S: ProductStore + Send + Sync,
{
    let url = body.get("url").and_then(Value::as_str);
    let events = body.get("events").and_then(Value::as_array).map(|events| {
        events
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect::<Vec<_>>()
    });

    let (Some(url), Some(events)) = (url, events) else {
        return ApiError::invalid_input("Datos inválidos").into_response();
    };

    match state.webhooks().register(url, events) {
        Ok(registration) => {
            debug!(id = %registration.id, url = %registration.url, "Webhook registrado");
            Json(json!({
                "mensaje": "Webhook registrado",
                "id": registration.id,
            }))
            .into_response()
        }
        Err(err) => err.into_response(),
    }
}
