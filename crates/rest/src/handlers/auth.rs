//! Login handler.
//!
//! `POST /auth/login` - demo credential check issuing a bearer token.
//! Token issuance and verification are delegated entirely to the
//! [`crate::auth`] module; the rest of the API only consumes the boolean
//! outcome of verification.

use axum::{Json, extract::State, response::IntoResponse, response::Response};
use mercado_store::ProductStore;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::auth;
use crate::error::ApiError;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// User name.
    pub user: String,
    /// Password.
    pub pass: String,
}

/// Handler for the login operation.
///
/// # HTTP Request
///
/// `POST /auth/login`
///
/// ```http
/// POST /auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {"user": "admin", "pass": "secret"}
/// ```
///
/// # Response
///
/// - `200 OK` - `{token}`
/// - `401 Unauthorized` - unknown credentials
pub async fn login_handler<S>(
    State(state): State<AppState<S>>,
    Json(body): Json<LoginRequest>,
) -> Response
where
    S: ProductStore + Send + Sync,
{
    let config = state.config();
    if body.user != config.auth_user || body.pass != config.auth_pass {
        return ApiError::unauthorized("Credenciales inválidas").into_response();
    }

    match auth::issue_token(&config.auth_secret, &body.user, config.token_ttl_secs) {
        Ok(token) => {
            debug!(user = %body.user, "Login correcto");
            Json(json!({ "token": token })).into_response()
        }
        Err(err) => err.into_response(),
    }
}
