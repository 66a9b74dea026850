//! Create interaction handler.
//!
//! `POST [prefix]/productos` - create a product. The server assigns the
//! identifier and creation timestamp.

use axum::{Json, extract::State, http::StatusCode, response::Response};
use mercado_store::{Product, ProductDraft, ProductStore};
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::extractors::RequestContext;
use crate::responses::{render, views};
use crate::state::AppState;
use crate::webhooks::EVENT_PRODUCT_CREATED;

/// Handler for the create interaction.
///
/// Requires authentication.
///
/// # HTTP Request
///
/// `POST [prefix]/productos`
///
/// ```http
/// POST /api/v2/productos HTTP/1.1
/// Authorization: Bearer <token>
/// Content-Type: application/json
///
/// {"nombre": "Mouse", "precio": 25}
/// ```
///
/// # Response
///
/// - `201 Created` - `{mensaje, producto|data}`; `categoria` defaults to
///   "General", `stock` to 0, `activo` to true
/// - `400 Bad Request` - name or price missing/invalid
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    ctx: RequestContext,
    Json(body): Json<Value>,
) -> Response
where
    S: ProductStore + Send + Sync,
{
    debug!(version = %ctx.version.as_str(), "Processing create request");

    match create_product(&state, body).await {
        Ok(product) => {
            debug!(id = product.id, "Producto creado");
            state.webhooks().notify(
                EVENT_PRODUCT_CREATED,
                views::product_view(ctx.version, &product),
            );

            let payload =
                views::mutation_view(ctx.version, "Producto creado exitosamente", &product);
            render(ctx.format, StatusCode::CREATED, &payload)
        }
        Err(err) => err.into_rendered(ctx.format),
    }
}

/// Validates the body and inserts the product.
async fn create_product<S>(state: &AppState<S>, body: Value) -> ApiResult<Product>
where
    S: ProductStore + Send + Sync,
{
    let draft: ProductDraft =
        serde_json::from_value(body).map_err(|_| ApiError::invalid_input(
            "Nombre y precio válido son requeridos",
        ))?;
    let new = draft.validate()?;
    Ok(state.storage().insert(new).await?)
}
