//! Delete interaction handlers.
//!
//! - `DELETE [prefix]/productos/{id}` - remove one product
//! - `DELETE [prefix]/productos` - bulk delete by identifier list

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use mercado_store::{StoreError, ProductStore};
use serde_json::{Value, json};
use tracing::debug;

use crate::error::ApiError;
use crate::extractors::RequestContext;
use crate::responses::{render, views};
use crate::state::AppState;
use crate::webhooks::EVENT_PRODUCT_DELETED;

/// Handler for the single delete interaction.
///
/// # HTTP Request
///
/// `DELETE [prefix]/productos/{id}`
///
/// # Response
///
/// - `200 OK` - `{mensaje, producto|data}` with the removed product
/// - `404 Not Found` - no product has that identifier; the collection is
///   left unchanged
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    ctx: RequestContext,
    Path(id): Path<u64>,
) -> Response
where
    S: ProductStore + Send + Sync,
{
    debug!(id, version = %ctx.version.as_str(), "Processing delete request");

    match state.storage().remove(id).await {
        Ok(product) => {
            debug!(id = product.id, "Producto eliminado");
            state.webhooks().notify(
                EVENT_PRODUCT_DELETED,
                views::product_view(ctx.version, &product),
            );

            let payload =
                views::mutation_view(ctx.version, "Producto eliminado exitosamente", &product);
            render(ctx.format, StatusCode::OK, &payload)
        }
        Err(err) => ApiError::from(err).into_rendered(ctx.format),
    }
}

/// Handler for the bulk delete interaction.
///
/// # HTTP Request
///
/// `DELETE [prefix]/productos`
///
/// ```http
/// DELETE /api/v2/productos HTTP/1.1
/// Content-Type: application/json
///
/// {"ids": [1, 2, 99]}
/// ```
///
/// # Response
///
/// - `200 OK` - per-id partition:
///   `{mensaje, eliminados: [...], noEncontrados: [...]}`
/// - `400 Bad Request` - body has no `ids` array
pub async fn bulk_delete_handler<S>(
    State(state): State<AppState<S>>,
    ctx: RequestContext,
    Json(body): Json<Value>,
) -> Response
where
    S: ProductStore + Send + Sync,
{
    let Some(ids) = body.get("ids").and_then(Value::as_array) else {
        return ApiError::invalid_input("Se requiere un array de IDs").into_rendered(ctx.format);
    };

    debug!(count = ids.len(), version = %ctx.version.as_str(), "Processing bulk delete request");

    let mut removed = Vec::new();
    let mut not_found = Vec::new();

    for id_value in ids {
        let Some(id) = id_value.as_u64() else {
            not_found.push(id_value.clone());
            continue;
        };
        match state.storage().remove(id).await {
            Ok(product) => {
                state.webhooks().notify(
                    EVENT_PRODUCT_DELETED,
                    views::product_view(ctx.version, &product),
                );
                removed.push(views::product_view(ctx.version, &product));
            }
            Err(StoreError::NotFound { .. }) => not_found.push(id_value.clone()),
            Err(err) => return ApiError::from(err).into_rendered(ctx.format),
        }
    }

    let payload = json!({
        "mensaje": format!("Eliminados {} productos", removed.len()),
        "eliminados": removed,
        "noEncontrados": not_found,
    });
    render(ctx.format, StatusCode::OK, &payload)
}
