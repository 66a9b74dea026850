//! Read interaction handler.
//!
//! `GET [prefix]/productos/{id}` - fetch one product by identifier.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use mercado_store::ProductStore;
use serde_json::Value;
use tracing::debug;

use crate::error::ApiError;
use crate::extractors::RequestContext;
use crate::middleware::content_type::Format;
use crate::responses::{render, render_with_root, views};
use crate::state::AppState;

/// Handler for the read interaction.
///
/// # HTTP Request
///
/// `GET [prefix]/productos/{id}`
///
/// # Response
///
/// - `200 OK` - the product, projected per the resolved version
/// - `404 Not Found` - no product has that identifier
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    ctx: RequestContext,
    Path(id): Path<u64>,
) -> Response
where
    S: ProductStore + Send + Sync,
{
    debug!(id, version = %ctx.version.as_str(), "Processing read request");

    match state.storage().get(id).await {
        Ok(product) => {
            if ctx.format == Format::Html {
                let page = views::product_page(&product);
                return render(Format::Html, StatusCode::OK, &Value::String(page));
            }

            let payload = views::product_view(ctx.version, &product);
            render_with_root(ctx.format, StatusCode::OK, &payload, "producto")
        }
        Err(err) => ApiError::from(err).into_rendered(ctx.format),
    }
}
