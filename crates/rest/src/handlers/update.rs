//! Full update (replace) interaction handler.
//!
//! `PUT [prefix]/productos/{id}` - replace a product entirely, keeping
//! its identifier and original creation timestamp.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use mercado_store::{Product, ProductDraft, ProductStore};
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::extractors::RequestContext;
use crate::responses::{render, views};
use crate::state::AppState;
use crate::webhooks::EVENT_PRODUCT_UPDATED;

/// Handler for the full update interaction.
///
/// The same validation rules as create apply: name non-empty, price > 0,
/// optional fields take their defaults when absent. The update timestamp
/// is set on success.
///
/// # HTTP Request
///
/// `PUT [prefix]/productos/{id}`
///
/// # Response
///
/// - `200 OK` - `{mensaje, producto|data}`
/// - `400 Bad Request` - name or price missing/invalid
/// - `404 Not Found` - no product has that identifier
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    ctx: RequestContext,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Response
where
    S: ProductStore + Send + Sync,
{
    debug!(id, version = %ctx.version.as_str(), "Processing update request");

    match replace_product(&state, id, body).await {
        Ok(product) => {
            debug!(id = product.id, "Producto actualizado");
            state.webhooks().notify(
                EVENT_PRODUCT_UPDATED,
                views::product_view(ctx.version, &product),
            );

            let payload =
                views::mutation_view(ctx.version, "Producto actualizado exitosamente", &product);
            render(ctx.format, StatusCode::OK, &payload)
        }
        Err(err) => err.into_rendered(ctx.format),
    }
}

async fn replace_product<S>(state: &AppState<S>, id: u64, body: Value) -> ApiResult<Product>
where
    S: ProductStore + Send + Sync,
{
    let draft: ProductDraft =
        serde_json::from_value(body).map_err(|_| ApiError::invalid_input(
            "Nombre y precio válido son requeridos",
        ))?;
    let new = draft.validate()?;
    Ok(state.storage().replace(id, new).await?)
}
