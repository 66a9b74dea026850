//! Axum extractors for the Mercado REST API.

pub mod list_params;
pub mod request_context;

pub use list_params::ListParams;
pub use request_context::RequestContext;
