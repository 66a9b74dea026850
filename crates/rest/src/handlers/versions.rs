//! Supported-versions handler.
//!
//! `GET /api/versions` - static description of supported API versions
//! and their deprecation metadata.

use axum::{http::StatusCode, response::Response};
use serde_json::json;
use tracing::debug;

use crate::extractors::RequestContext;
use crate::responses::render;

/// Handler for the versions operation.
///
/// # HTTP Request
///
/// `GET /api/versions`
///
/// # Example Response
///
/// ```json
/// {
///   "versions": {
///     "v1": { "status": "deprecated", "deprecatedAt": "2024-06-01", "sunsetAt": "2024-12-01" },
///     "v2": { "status": "current", "releasedAt": "2024-06-01" }
///   },
///   "current": "v2",
///   "legacy": ["v1"]
/// }
/// ```
pub async fn versions_handler(ctx: RequestContext) -> Response {
    debug!("Processing versions request");

    let payload = json!({
        "versions": {
            "v1": {
                "status": "deprecated",
                "deprecatedAt": "2024-06-01",
                "sunsetAt": "2024-12-01",
            },
            "v2": {
                "status": "current",
                "releasedAt": "2024-06-01",
            },
        },
        "current": "v2",
        "legacy": ["v1"],
    });

    render(ctx.format, StatusCode::OK, &payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::content_type::Format;
    use crate::middleware::version::ApiVersion;

    #[tokio::test]
    async fn test_versions_is_ok() {
        let ctx = RequestContext {
            version: ApiVersion::LATEST,
            format: Format::Json,
        };
        let response = versions_handler(ctx).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
