//! Response building for the Mercado REST API.
//!
//! - [`render`] - format-aware serialization (JSON/XML/HTML)
//! - [`xml`] - the structured-value XML mapping
//! - [`views`] - version-shaped payloads and HTML pages

pub mod render;
pub mod views;
pub mod xml;

pub use render::{render, render_with_root};
