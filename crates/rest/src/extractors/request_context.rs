//! Per-request context extractor.
//!
//! Bundles the two per-request decisions - resolved format and resolved
//! version - into one immutable value created at the start of handling.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
};

use crate::middleware::content_type::{Format, format_param, negotiate_format};
use crate::middleware::version::ApiVersion;

/// Resolved per-request values: response format and API version.
///
/// The version is read from the request extension set by the version
/// middleware; requests that bypass that middleware resolve to
/// [`ApiVersion::LATEST`]. The format is negotiated from the `format`
/// query parameter and the `Accept` header.
///
/// # Example
///
/// ```rust,ignore
/// use mercado_rest::extractors::RequestContext;
///
/// async fn handler(ctx: RequestContext) {
///     let format = ctx.format;
///     let version = ctx.version;
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequestContext {
    /// The behavioral version for this request.
    pub version: ApiVersion,
    /// The response representation for this request.
    pub format: Format,
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let param = format_param(parts.uri.query());
        let format = negotiate_format(&parts.headers, param.as_deref());
        let version = parts
            .extensions
            .get::<ApiVersion>()
            .copied()
            .unwrap_or(ApiVersion::LATEST);

        Ok(RequestContext { version, format })
    }
}
