//! Error types for the Mercado REST API.
//!
//! Every error a handler can produce maps to exactly one HTTP status and
//! is rendered as a `{"error": "<mensaje>"}` payload through the same
//! [`render`](crate::responses::render) path success responses use, so
//! errors are representable in every negotiated format.
//!
//! # Error Mapping
//!
//! | Variant | HTTP Status |
//! |---------|-------------|
//! | `NotFound` | 404 |
//! | `InvalidInput` | 400 |
//! | `InvalidState` | 400 |
//! | `Unauthorized` | 401 |
//! | `UnsupportedFormat` | 406 |
//! | `Internal` | 500 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mercado_store::StoreError;
use serde_json::{Value, json};
use thiserror::Error;

use crate::middleware::content_type::Format;
use crate::responses::render;

/// The primary error type for REST API operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No product with the given identifier (HTTP 404).
    #[error("Producto no encontrado")]
    NotFound {
        /// The identifier that was looked up.
        id: u64,
    },

    /// Malformed or missing required input (HTTP 400).
    #[error("{message}")]
    InvalidInput {
        /// Human-readable description of the rejected input.
        message: String,
    },

    /// Operation not valid for the record's current state (HTTP 400).
    #[error("{message}")]
    InvalidState {
        /// Human-readable description of the state conflict.
        message: String,
    },

    /// Missing or invalid credentials (HTTP 401).
    #[error("{message}")]
    Unauthorized {
        /// Human-readable description, safe to return to the client.
        message: String,
    },

    /// Requested response format is not supported (HTTP 406).
    ///
    /// Only reachable when `strict_formats` is enabled; the default
    /// behavior falls back to JSON instead.
    #[error("Formato no soportado: {format}")]
    UnsupportedFormat {
        /// The rejected format token.
        format: String,
    },

    /// Unexpected failure. The display form is generic; the wrapped
    /// message is for logs only and never leaves the process.
    #[error("Error interno del servidor")]
    Internal {
        /// Internal detail, logged but not returned.
        message: String,
    },
}

impl ApiError {
    /// The HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidInput { .. } | ApiError::InvalidState { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::UnsupportedFormat { .. } => StatusCode::NOT_ACCEPTABLE,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The structured error payload: `{"error": "<mensaje>"}`.
    pub fn payload(&self) -> Value {
        json!({ "error": self.to_string() })
    }

    /// Renders the error in the negotiated format.
    pub fn into_rendered(self, format: Format) -> Response {
        if let ApiError::Internal { message } = &self {
            tracing::error!(%message, "Internal error");
        }
        render(format, self.status_code(), &self.payload())
    }

    /// Convenience constructor for `InvalidInput`.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiError::InvalidInput {
            message: message.into(),
        }
    }

    /// Convenience constructor for `Unauthorized`.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized {
            message: message.into(),
        }
    }
}

/// JSON fallback for boundaries that run before format negotiation
/// (extractor rejections, auth middleware).
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal { message } = &self {
            tracing::error!(%message, "Internal error");
        }
        (self.status_code(), Json(self.payload())).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => ApiError::NotFound { id },
            StoreError::InvalidInput { message } => ApiError::InvalidInput { message },
            StoreError::InvalidState { message } => ApiError::InvalidState { message },
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidInput {
            message: format!("Cuerpo inválido: {}", err),
        }
    }
}

/// Result type alias for REST operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::NotFound { id: 1 }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::invalid_input("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidState {
                message: "x".into()
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::unauthorized("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::UnsupportedFormat {
                format: "yaml".into()
            }
            .status_code(),
            StatusCode::NOT_ACCEPTABLE
        );
        assert_eq!(
            ApiError::Internal {
                message: "x".into()
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_payload() {
        let payload = ApiError::NotFound { id: 7 }.payload();
        assert_eq!(payload["error"], "Producto no encontrado");
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let err = ApiError::Internal {
            message: "lock poisoned at memory.rs:42".into(),
        };
        assert_eq!(err.payload()["error"], "Error interno del servidor");
    }

    #[test]
    fn test_from_store_error() {
        let err: ApiError = StoreError::NotFound { id: 9 }.into();
        assert_eq!(err, ApiError::NotFound { id: 9 });
    }
}
