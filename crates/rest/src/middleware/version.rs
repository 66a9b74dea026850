//! API version selection.
//!
//! Two composable strategies, matching the public surface:
//!
//! - **URL prefix**: requests under `/api/v1` and `/api/v2` are pinned to
//!   that version by [`pin_version`].
//! - **Headers**: the unversioned `/api` alias resolves the version from
//!   the `API-Version` or `Accept-Version` request header via
//!   [`resolve_version`], defaulting to the latest version.
//!
//! Unknown version tokens fall back to the latest version rather than
//! failing. Every response carries an `API-Version` header echoing the
//! resolved version; deprecated versions additionally carry a `Warning`
//! header.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue, header},
    middleware::Next,
    response::Response,
};

/// Request header carrying an explicit version choice.
pub const API_VERSION_HEADER: &str = "api-version";
/// Alternate request header carrying an explicit version choice.
pub const ACCEPT_VERSION_HEADER: &str = "accept-version";

const V1_DEPRECATION_WARNING: &str = "299 - \"API version v1 is deprecated\"";

/// Supported API versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    /// Legacy surface: trimmed product projection, flat list envelope.
    V1,
    /// Current surface: full records with a metadata envelope.
    V2,
}

impl ApiVersion {
    /// The most recent supported version, used as the default.
    pub const LATEST: ApiVersion = ApiVersion::V2;

    /// Returns the version token (`v1`, `v2`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V2 => "v2",
        }
    }

    /// Parses a version token, case-insensitively. Unknown tokens yield
    /// `None`; callers fall back to [`ApiVersion::LATEST`].
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "v1" => Some(ApiVersion::V1),
            "v2" => Some(ApiVersion::V2),
            _ => None,
        }
    }

    /// Whether this version is deprecated.
    pub fn is_deprecated(&self) -> bool {
        matches!(self, ApiVersion::V1)
    }
}

/// Resolves the behavioral version for a request.
///
/// The URL prefix takes precedence when present; otherwise the header
/// token is consulted; unknown or absent tokens resolve to the latest
/// version. Total and pure.
pub fn select_version(path_version: Option<&str>, header_version: Option<&str>) -> ApiVersion {
    path_version
        .and_then(ApiVersion::parse)
        .or_else(|| header_version.and_then(ApiVersion::parse))
        .unwrap_or(ApiVersion::LATEST)
}

/// Returns the version token from `API-Version` or `Accept-Version`,
/// in that order.
pub fn header_version(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(API_VERSION_HEADER)
        .or_else(|| headers.get(ACCEPT_VERSION_HEADER))
        .and_then(|v| v.to_str().ok())
}

/// Middleware for version-prefixed routers: pins the given version on the
/// request and tags the response.
pub async fn pin_version(version: ApiVersion, mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(version);
    let mut response = next.run(request).await;
    tag_response(&mut response, version);
    response
}

/// Middleware for the unversioned alias: resolves the version from the
/// request headers, defaulting to the latest version.
pub async fn resolve_version(mut request: Request, next: Next) -> Response {
    let version = select_version(None, header_version(request.headers()));
    request.extensions_mut().insert(version);
    let mut response = next.run(request).await;
    tag_response(&mut response, version);
    response
}

fn tag_response(response: &mut Response, version: ApiVersion) {
    response.headers_mut().insert(
        API_VERSION_HEADER,
        HeaderValue::from_static(version.as_str()),
    );
    if version.is_deprecated() {
        response.headers_mut().insert(
            header::WARNING,
            HeaderValue::from_static(V1_DEPRECATION_WARNING),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(ApiVersion::parse("v1"), Some(ApiVersion::V1));
        assert_eq!(ApiVersion::parse("V2"), Some(ApiVersion::V2));
        assert_eq!(ApiVersion::parse(" v2 "), Some(ApiVersion::V2));
        assert_eq!(ApiVersion::parse("v3"), None);
        assert_eq!(ApiVersion::parse(""), None);
    }

    #[test]
    fn test_path_prefix_wins() {
        assert_eq!(select_version(Some("v1"), Some("v2")), ApiVersion::V1);
    }

    #[test]
    fn test_header_used_without_path() {
        assert_eq!(select_version(None, Some("v1")), ApiVersion::V1);
    }

    #[test]
    fn test_unknown_tokens_fall_back_to_latest() {
        assert_eq!(select_version(Some("v9"), None), ApiVersion::LATEST);
        assert_eq!(select_version(None, Some("beta")), ApiVersion::LATEST);
        assert_eq!(select_version(None, None), ApiVersion::LATEST);
    }

    #[test]
    fn test_header_version_order() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_VERSION_HEADER, HeaderValue::from_static("v1"));
        assert_eq!(header_version(&headers), Some("v1"));

        headers.insert(API_VERSION_HEADER, HeaderValue::from_static("v2"));
        assert_eq!(header_version(&headers), Some("v2"));
    }

    #[test]
    fn test_only_v1_is_deprecated() {
        assert!(ApiVersion::V1.is_deprecated());
        assert!(!ApiVersion::V2.is_deprecated());
    }
}
