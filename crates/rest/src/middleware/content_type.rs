//! Content negotiation.
//!
//! Selects the response representation for a request from the `format`
//! query parameter and the `Accept` header. Selection is total: there is
//! always a defined fallback, so negotiation itself never fails. The only
//! rejection path is the optional strict mode, which turns unknown
//! `format` values into 406 instead of silently serving JSON.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use mercado_store::ProductStore;

use crate::error::ApiError;
use crate::state::AppState;

/// Supported response representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON (application/json) - the default.
    Json,
    /// XML (application/xml)
    Xml,
    /// HTML (text/html)
    Html,
}

impl Format {
    /// Returns the MIME type string for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Format::Json => "application/json",
            Format::Xml => "application/xml",
            Format::Html => "text/html",
        }
    }

    /// Parses a `format` query-param token into a Format.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "json" => Some(Format::Json),
            "xml" => Some(Format::Xml),
            "html" => Some(Format::Html),
            _ => None,
        }
    }
}

/// Determines the response format from the `format` query parameter and
/// the Accept header.
///
/// Resolution order (first match wins):
///
/// 1. `format=xml` or `format=html` query parameter
/// 2. Accept header containing `application/xml` or `text/xml`
/// 3. Accept header containing `text/html`
/// 4. JSON (default)
///
/// Total and deterministic: a fixed (header, param) pair always resolves
/// to the same format and there is no error case.
pub fn negotiate_format(headers: &HeaderMap, format_param: Option<&str>) -> Format {
    if let Some(param) = format_param {
        match Format::parse(param) {
            Some(Format::Xml) => return Format::Xml,
            Some(Format::Html) => return Format::Html,
            _ => {}
        }
    }

    let accept = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if accept.contains("application/xml") || accept.contains("text/xml") {
        Format::Xml
    } else if accept.contains("text/html") {
        Format::Html
    } else {
        Format::Json
    }
}

/// Extracts the raw `format` query parameter from a query string.
pub fn format_param(query: Option<&str>) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "format")
        .map(|(_, value)| value.into_owned())
}

/// Strict-mode middleware: rejects unknown `format` query values with
/// 406 when `strict_formats` is enabled. A no-op otherwise, preserving
/// the permissive JSON fallback.
pub async fn enforce_strict_format<S>(
    State(state): State<AppState<S>>,
    request: Request,
    next: Next,
) -> Response
where
    S: ProductStore + Send + Sync + 'static,
{
    if state.config().strict_formats {
        if let Some(param) = format_param(request.uri().query()) {
            if Format::parse(&param).is_none() {
                let err = ApiError::UnsupportedFormat { format: param };
                return err.into_rendered(Format::Json);
            }
        }
    }

    next.run(request).await
}
