//! List interaction handler.
//!
//! `GET [prefix]/productos` - filtered, sorted, paginated product listing.

use axum::{extract::State, http::StatusCode, response::Response};
use mercado_store::ProductStore;
use serde_json::Value;
use tracing::debug;

use crate::error::ApiError;
use crate::extractors::{ListParams, RequestContext};
use crate::middleware::content_type::Format;
use crate::responses::{render, render_with_root, views};
use crate::state::AppState;

/// Handler for the list interaction.
///
/// # HTTP Request
///
/// `GET [prefix]/productos?categoria=&precio_min=&precio_max=&activo=&pagina=&limite=&ordenar=`
///
/// English aliases `page`, `limit` and `sort` are accepted. An empty
/// result set is a valid 200 response, not an error.
///
/// # Response
///
/// - `200 OK` - one page of the filtered listing plus totals
/// - `400 Bad Request` - malformed query parameters
pub async fn list_handler<S>(
    State(state): State<AppState<S>>,
    ctx: RequestContext,
    params: ListParams,
) -> Response
where
    S: ProductStore + Send + Sync,
{
    debug!(
        version = %ctx.version.as_str(),
        filter = ?params.filter,
        sort = ?params.sort,
        "Processing list request"
    );

    let page = params.page(state.default_page_size(), state.max_page_size());

    match state.storage().list(&params.filter, params.sort, page).await {
        Ok(result) => {
            if ctx.format == Format::Html {
                let page = views::catalog_page(&result);
                return render(Format::Html, StatusCode::OK, &Value::String(page));
            }

            let payload = views::list_view(ctx.version, &result);
            render_with_root(ctx.format, StatusCode::OK, &payload, "catalogo")
        }
        Err(err) => ApiError::from(err).into_rendered(ctx.format),
    }
}
