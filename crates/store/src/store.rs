//! Core product storage trait.
//!
//! This module defines the [`ProductStore`] trait, the injected storage
//! abstraction the REST handlers are written against. The reference
//! behavior kept its records in a global mutable array; here the
//! collection is owned by a backend and passed explicitly, so a real
//! datastore can replace the in-memory one without touching handlers.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::product::{NewProduct, Product, ProductPatch};
use crate::query::{Page, PageResult, ProductFilter, SortKey};

/// Storage operations over the product collection.
///
/// # Semantics
///
/// - Identifiers are assigned by the backend, strictly increasing, and
///   never reused within a process lifetime.
/// - Mutating operations are atomic with respect to each other: a backend
///   serving concurrent requests must serialize each read-modify-write.
/// - `list` is read-only and may run against a snapshot.
/// - `remove` is a hard delete; `mark_deleted`/`restore` implement the
///   reversible soft-delete lifecycle. Soft-deleted products remain
///   visible to `list` and `get`.
///
/// # Example
///
/// ```ignore
/// use mercado_store::{MemoryStore, NewProduct, ProductStore};
///
/// async fn example(store: &MemoryStore) -> mercado_store::StoreResult<()> {
///     let created = store.insert(NewProduct::new("Mouse", 25.0)?).await?;
///     let fetched = store.get(created.id).await?;
///     assert_eq!(fetched, created);
///     store.remove(created.id).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Returns a human-readable name for this backend.
    fn backend_name(&self) -> &'static str;

    /// Lists products: filter, then sort, then paginate.
    ///
    /// An empty result set is valid, not an error.
    async fn list(
        &self,
        filter: &ProductFilter,
        sort: Option<SortKey>,
        page: Page,
    ) -> StoreResult<PageResult<Product>>;

    /// Returns the product with the given identifier.
    ///
    /// # Errors
    ///
    /// * `StoreError::NotFound` - no product has that identifier
    async fn get(&self, id: u64) -> StoreResult<Product>;

    /// Inserts a validated draft, assigning the next identifier and the
    /// creation timestamp.
    async fn insert(&self, new: NewProduct) -> StoreResult<Product>;

    /// Replaces a product entirely, keeping its identifier and original
    /// creation timestamp and stamping `updated_at`.
    ///
    /// # Errors
    ///
    /// * `StoreError::NotFound` - no product has that identifier
    async fn replace(&self, id: u64, new: NewProduct) -> StoreResult<Product>;

    /// Applies a validated partial update and stamps `updated_at`.
    ///
    /// # Errors
    ///
    /// * `StoreError::NotFound` - no product has that identifier
    async fn apply_patch(&self, id: u64, patch: ProductPatch) -> StoreResult<Product>;

    /// Removes a product and returns it.
    ///
    /// # Errors
    ///
    /// * `StoreError::NotFound` - no product has that identifier
    async fn remove(&self, id: u64) -> StoreResult<Product>;

    /// Sets the soft-delete marker and timestamp.
    ///
    /// # Errors
    ///
    /// * `StoreError::NotFound` - no product has that identifier
    async fn mark_deleted(&self, id: u64) -> StoreResult<Product>;

    /// Clears the soft-delete marker.
    ///
    /// # Errors
    ///
    /// * `StoreError::NotFound` - no product has that identifier
    /// * `StoreError::InvalidState` - the product is not soft-deleted
    async fn restore(&self, id: u64) -> StoreResult<Product>;

    /// Number of products currently stored (soft-deleted included).
    async fn count(&self) -> StoreResult<usize>;
}
