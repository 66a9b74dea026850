//! Format-aware response building.
//!
//! Turns a structured payload into the final HTTP response body and
//! content type for the negotiated format. Rendering is total: every
//! payload has a defined serialization in each format, so there are no
//! format-specific error paths.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::middleware::content_type::Format;
use crate::responses::xml;

/// Renders a payload in the negotiated format with the default XML root.
pub fn render(format: Format, status: StatusCode, payload: &Value) -> Response {
    render_with_root(format, status, payload, xml::DEFAULT_ROOT)
}

/// Renders a payload in the negotiated format.
///
/// - JSON: standard structured encoding
/// - XML: the [`xml`] mapping under the given root element
/// - HTML: string payloads are emitted verbatim (preformatted pages);
///   anything else is pretty-printed inside a `<pre>` block
pub fn render_with_root(
    format: Format,
    status: StatusCode,
    payload: &Value,
    root: &str,
) -> Response {
    match format {
        Format::Json => (status, Json(payload.clone())).into_response(),
        Format::Xml => {
            let body = xml::to_xml_string(payload, root);
            (
                status,
                [(header::CONTENT_TYPE, Format::Xml.mime_type())],
                body,
            )
                .into_response()
        }
        Format::Html => {
            let body = match payload {
                Value::String(page) => page.clone(),
                other => {
                    let pretty =
                        serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string());
                    format!("<pre>{}</pre>", escape_html(&pretty))
                }
            };
            (
                status,
                [(header::CONTENT_TYPE, Format::Html.mime_type())],
                body,
            )
                .into_response()
        }
    }
}

/// Escapes text for safe interpolation into HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
