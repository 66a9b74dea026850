//! Partial update interaction handler.
//!
//! `PATCH [prefix]/productos/{id}` - update a restricted field set.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use mercado_store::{Product, ProductPatch, ProductStore};
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::extractors::RequestContext;
use crate::responses::{render, views};
use crate::state::AppState;
use crate::webhooks::EVENT_PRODUCT_UPDATED;

/// Handler for the partial update interaction.
///
/// The body is a JSON object restricted to the allowed field set
/// {nombre, precio, categoria, stock}. Each supplied field is
/// individually validated; an invalid value rejects the whole request
/// (the same policy as full update), while fields outside the allowed
/// set are ignored. The update timestamp is set on success.
///
/// # HTTP Request
///
/// `PATCH [prefix]/productos/{id}`
///
/// ```http
/// PATCH /api/v2/productos/3 HTTP/1.1
/// Content-Type: application/json
///
/// {"precio": 30, "stock": 7}
/// ```
///
/// # Response
///
/// - `200 OK` - `{mensaje, producto|data}`
/// - `400 Bad Request` - body is not an object, or a field is invalid
/// - `404 Not Found` - no product has that identifier
pub async fn patch_handler<S>(
    State(state): State<AppState<S>>,
    ctx: RequestContext,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Response
where
    S: ProductStore + Send + Sync,
{
    debug!(id, version = %ctx.version.as_str(), "Processing patch request");

    match patch_product(&state, id, body).await {
        Ok(product) => {
            debug!(id = product.id, "Producto actualizado parcialmente");
            state.webhooks().notify(
                EVENT_PRODUCT_UPDATED,
                views::product_view(ctx.version, &product),
            );

            let payload =
                views::mutation_view(ctx.version, "Producto actualizado parcialmente", &product);
            render(ctx.format, StatusCode::OK, &payload)
        }
        Err(err) => err.into_rendered(ctx.format),
    }
}

async fn patch_product<S>(state: &AppState<S>, id: u64, body: Value) -> ApiResult<Product>
where
    S: ProductStore + Send + Sync,
{
    let fields = body.as_object().ok_or_else(|| {
        ApiError::invalid_input("Se requiere un objeto con campos a actualizar")
    })?;
    let patch = ProductPatch::from_body(fields)?;
    Ok(state.storage().apply_patch(id, patch).await?)
}
