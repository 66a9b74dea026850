//! Generic structured-value XML serialization.
//!
//! Converts any `serde_json::Value` into an XML document via a fixed
//! mapping:
//!
//! - objects become nested elements named after their keys
//! - arrays become repeated `<item>` elements wrapped in an element named
//!   after the field
//! - scalars become text content of an element named after the field
//! - null becomes an empty element
//!
//! Text content is escaped (quick-xml) and element names are sanitized so
//! output is always well-formed. No attributes, no namespaces.

use std::borrow::Cow;

use quick_xml::escape::escape;
use serde_json::Value;

/// Fixed declaration prefixed to every document.
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Root element name used when the caller does not supply one.
pub const DEFAULT_ROOT: &str = "response";

/// Element name used for array entries.
const ITEM_ELEMENT: &str = "item";

/// Serializes a structured value to an XML document string.
///
/// Total: every `Value` has a defined serialization and the function
/// cannot fail.
pub fn to_xml_string(value: &Value, root: &str) -> String {
    let mut out = String::with_capacity(128);
    out.push_str(XML_DECLARATION);
    out.push('\n');
    write_element(&mut out, root, value);
    out
}

fn write_element(out: &mut String, name: &str, value: &Value) {
    let name = sanitize_name(name);

    match value {
        Value::Null => {
            out.push('<');
            out.push_str(&name);
            out.push_str("/>");
        }
        Value::Object(map) => {
            open(out, &name);
            for (key, child) in map {
                write_element(out, key, child);
            }
            close(out, &name);
        }
        Value::Array(items) => {
            open(out, &name);
            for item in items {
                write_element(out, ITEM_ELEMENT, item);
            }
            close(out, &name);
        }
        Value::String(text) => {
            open(out, &name);
            out.push_str(&escape(text.as_str()));
            close(out, &name);
        }
        Value::Bool(b) => {
            open(out, &name);
            out.push_str(if *b { "true" } else { "false" });
            close(out, &name);
        }
        Value::Number(n) => {
            open(out, &name);
            out.push_str(&n.to_string());
            close(out, &name);
        }
    }
}

fn open(out: &mut String, name: &str) {
    out.push('<');
    out.push_str(name);
    out.push('>');
}

fn close(out: &mut String, name: &str) {
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Maps an arbitrary key to a well-formed element name: characters
/// outside `[A-Za-z0-9_.-]` become `_`, and names that do not start with
/// a letter or underscore are prefixed with `_`.
fn sanitize_name(name: &str) -> Cow<'_, str> {
    let starts_ok = name
        .chars()
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(false);
    let body_ok = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));

    if starts_ok && body_ok {
        return Cow::Borrowed(name);
    }

    let mut sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if !sanitized
        .chars()
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(false)
    {
        sanitized.insert(0, '_');
    }
    Cow::Owned(sanitized)
}
