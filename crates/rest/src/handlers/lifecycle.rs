//! Soft delete and restore interaction handlers.
//!
//! - `PATCH [prefix]/productos/{id}/soft-delete` - mark as deleted
//! - `PATCH [prefix]/productos/{id}/restore` - clear the marker

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use mercado_store::ProductStore;
use tracing::debug;

use crate::error::ApiError;
use crate::extractors::RequestContext;
use crate::responses::{render, views};
use crate::state::AppState;
use crate::webhooks::{EVENT_PRODUCT_DELETED, EVENT_PRODUCT_UPDATED};

/// Handler for the soft delete interaction.
///
/// Sets the deletion marker and timestamp. The record stays in storage
/// and remains listable.
///
/// # HTTP Request
///
/// `PATCH [prefix]/productos/{id}/soft-delete`
///
/// # Response
///
/// - `200 OK` - `{mensaje, producto|data}` with `eliminado: true`
/// - `404 Not Found` - no product has that identifier
pub async fn soft_delete_handler<S>(
    State(state): State<AppState<S>>,
    ctx: RequestContext,
    Path(id): Path<u64>,
) -> Response
where
    S: ProductStore + Send + Sync,
{
    debug!(id, "Processing soft delete request");

    match state.storage().mark_deleted(id).await {
        Ok(product) => {
            state.webhooks().notify(
                EVENT_PRODUCT_DELETED,
                views::product_view(ctx.version, &product),
            );

            let payload =
                views::mutation_view(ctx.version, "Producto marcado como eliminado", &product);
            render(ctx.format, StatusCode::OK, &payload)
        }
        Err(err) => ApiError::from(err).into_rendered(ctx.format),
    }
}

/// Handler for the restore interaction.
///
/// # HTTP Request
///
/// `PATCH [prefix]/productos/{id}/restore`
///
/// # Response
///
/// - `200 OK` - `{mensaje, producto|data}` with the marker cleared
/// - `400 Bad Request` - the product is not soft-deleted
/// - `404 Not Found` - no product has that identifier
pub async fn restore_handler<S>(
    State(state): State<AppState<S>>,
    ctx: RequestContext,
    Path(id): Path<u64>,
) -> Response
where
    S: ProductStore + Send + Sync,
{
    debug!(id, "Processing restore request");

    match state.storage().restore(id).await {
        Ok(product) => {
            state.webhooks().notify(
                EVENT_PRODUCT_UPDATED,
                views::product_view(ctx.version, &product),
            );

            let payload = views::mutation_view(ctx.version, "Producto restaurado", &product);
            render(ctx.format, StatusCode::OK, &payload)
        }
        Err(err) => ApiError::from(err).into_rendered(ctx.format),
    }
}
