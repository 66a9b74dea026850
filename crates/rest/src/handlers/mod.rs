//! HTTP request handlers for the Mercado REST API.
//!
//! - [`list`] - filtered/sorted/paginated listing
//! - [`read`] - read a product by id
//! - [`create`] - create a product
//! - [`update`] - replace a product (PUT)
//! - [`patch`] - partial update (PATCH)
//! - [`delete`] - single and bulk delete
//! - [`bulk`] - bulk create with per-item partial success
//! - [`lifecycle`] - soft delete and restore
//! - [`versions`] - supported-versions document
//! - [`health`] - health check
//! - [`webhooks`] - webhook registration
//! - [`auth`] - login

pub mod auth;
pub mod bulk;
pub mod create;
pub mod delete;
pub mod health;
pub mod lifecycle;
pub mod list;
pub mod patch;
pub mod read;
pub mod update;
pub mod versions;
pub mod webhooks;

// Re-export handlers for convenience
pub use auth::login_handler;
pub use bulk::bulk_create_handler;
pub use create::create_handler;
pub use delete::{bulk_delete_handler, delete_handler};
pub use health::health_handler;
pub use lifecycle::{restore_handler, soft_delete_handler};
pub use list::list_handler;
pub use patch::patch_handler;
pub use read::read_handler;
pub use update::update_handler;
pub use versions::versions_handler;
pub use webhooks::register_webhook_handler;
