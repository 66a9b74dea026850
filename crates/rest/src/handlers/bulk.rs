//! Bulk create interaction handler.
//!
//! `POST [prefix]/productos/bulk` - create several products in one
//! request with per-item partial success reporting.

use axum::{Json, extract::State, http::StatusCode, response::Response};
use mercado_store::{ProductDraft, ProductStore};
use serde_json::{Value, json};
use tracing::debug;

use crate::error::ApiError;
use crate::extractors::RequestContext;
use crate::responses::{render, views};
use crate::state::AppState;
use crate::webhooks::EVENT_PRODUCT_CREATED;

/// Handler for the bulk create interaction.
///
/// Requires authentication. Items are processed in order; each item
/// either becomes a created product or an entry in the error list at its
/// original index. Overall status reflects partial success.
///
/// # HTTP Request
///
/// `POST [prefix]/productos/bulk`
///
/// ```http
/// POST /api/v2/productos/bulk HTTP/1.1
/// Authorization: Bearer <token>
/// Content-Type: application/json
///
/// {"productos": [{"nombre": "A", "precio": 1}, {"nombre": "B"}]}
/// ```
///
/// # Response
///
/// - `201 Created` - every item created
/// - `207 Multi-Status` - some items failed:
///   `{mensaje, creados, errores, productos, errores_detalle: [{index, error}]}`
/// - `400 Bad Request` - body has no non-empty `productos` array
pub async fn bulk_create_handler<S>(
    State(state): State<AppState<S>>,
    ctx: RequestContext,
    Json(body): Json<Value>,
) -> Response
where
    S: ProductStore + Send + Sync,
{
    let items = body.get("productos").and_then(Value::as_array);
    let Some(items) = items.filter(|items| !items.is_empty()) else {
        return ApiError::invalid_input("Se requiere un array de productos")
            .into_rendered(ctx.format);
    };

    debug!(count = items.len(), version = %ctx.version.as_str(), "Processing bulk create request");

    let mut created = Vec::new();
    let mut errors = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let draft = serde_json::from_value::<ProductDraft>(item.clone())
            .map_err(|_| ApiError::invalid_input("Nombre y precio requeridos"))
            .and_then(|draft| draft.validate().map_err(ApiError::from));

        match draft {
            Ok(new) => match state.storage().insert(new).await {
                Ok(product) => {
                    state.webhooks().notify(
                        EVENT_PRODUCT_CREATED,
                        views::product_view(ctx.version, &product),
                    );
                    created.push(views::product_view(ctx.version, &product));
                }
                Err(err) => errors.push(json!({ "index": index, "error": err.to_string() })),
            },
            Err(err) => errors.push(json!({ "index": index, "error": err.to_string() })),
        }
    }

    let status = if errors.is_empty() {
        StatusCode::CREATED
    } else {
        StatusCode::MULTI_STATUS
    };

    let payload = json!({
        "mensaje": format!("Procesados {} productos", items.len()),
        "creados": created.len(),
        "errores": errors.len(),
        "productos": created,
        "errores_detalle": errors,
    });
    render(ctx.format, status, &payload)
}
