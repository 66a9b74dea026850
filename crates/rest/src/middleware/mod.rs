//! Axum middleware for the Mercado REST API.
//!
//! - [`content_type`] - response format negotiation (JSON/XML/HTML)
//! - [`version`] - API version selection (URL prefix / headers)
//! - [`auth`] - bearer token authentication

pub mod auth;
pub mod content_type;
pub mod version;

pub use content_type::{Format, negotiate_format};
pub use version::{ApiVersion, select_version};
