//! Bearer token authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use mercado_store::ProductStore;

use crate::auth;
use crate::error::ApiError;
use crate::state::AppState;

/// Requires a valid bearer token on the request.
///
/// On success the verified [`auth::Claims`] are inserted into the request
/// extensions for handlers that want the subject. Missing or invalid
/// tokens short-circuit with 401.
pub async fn require_auth<S>(
    State(state): State<AppState<S>>,
    mut request: Request,
    next: Next,
) -> Response
where
    S: ProductStore + Send + Sync + 'static,
{
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    let Some(token) = token else {
        return ApiError::unauthorized("Token requerido").into_response();
    };

    match auth::verify_token(&state.config().auth_secret, token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(err) => err.into_response(),
    }
}
