//! # mercado-store - Product domain model and storage
//!
//! This crate provides the domain layer of the Mercado product API:
//!
//! - [`Product`] - the product record with server-assigned identity and
//!   lifecycle timestamps
//! - [`NewProduct`] / [`ProductPatch`] - validated write inputs
//! - [`ProductFilter`] / [`SortKey`] / [`Page`] - list query types
//! - [`ProductStore`] - the storage trait handlers are written against
//! - [`MemoryStore`] - the in-memory backend
//!
//! Storage is an injected abstraction: handlers only see [`ProductStore`],
//! so the in-memory backend can be swapped for a real datastore without
//! touching the REST layer.
//!
//! ## Example
//!
//! ```rust,ignore
//! use mercado_store::{MemoryStore, NewProduct, ProductStore};
//!
//! let store = MemoryStore::new();
//! let product = store.insert(NewProduct::new("Mouse", 25.0)?).await?;
//! assert_eq!(product.category, "General");
//! ```

pub mod error;
pub mod memory;
pub mod product;
pub mod query;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use product::{NewProduct, Product, ProductDraft, ProductPatch};
pub use query::{Page, PageResult, ProductFilter, SortKey};
pub use store::ProductStore;
