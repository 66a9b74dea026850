//! In-memory product store.
//!
//! Keeps the whole collection in a `Vec` behind a single mutex: every
//! read-modify-write runs inside one lock region, so handlers observe the
//! collection atomically even when requests are served concurrently.
//! `list` clones a filtered snapshot under the lock and does the sorting
//! and pagination outside it.
//!
//! Primarily meant for the reference deployment and for tests; anything
//! needing durability implements [`ProductStore`] over a real datastore.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::error::{StoreError, StoreResult};
use crate::product::{NewProduct, Product, ProductPatch};
use crate::query::{Page, PageResult, ProductFilter, SortKey};
use crate::store::ProductStore;

/// An in-memory product store backed by a `Vec` and a monotonic id
/// counter.
///
/// Identifiers are never reused: `remove` leaves a gap, the counter only
/// moves forward. Insertion order is preserved, which makes unsorted
/// listings stable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    products: Vec<Product>,
    next_id: u64,
}

impl Inner {
    fn position(&self, id: u64) -> StoreResult<usize> {
        self.products
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound { id })
    }
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryStore {
            inner: Mutex::new(Inner {
                products: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Creates a store pre-populated with the demo catalog used by the
    /// reference deployment.
    pub fn with_seed() -> Self {
        let store = MemoryStore::new();
        {
            let mut inner = store.lock();
            let now = Utc::now();
            for (name, price, category, stock) in [
                ("Laptop", 1000.0, "Electrónica", 5u32),
                ("Mouse", 25.0, "Accesorios", 10u32),
            ] {
                let id = inner.next_id;
                inner.next_id += 1;
                let new = NewProduct {
                    name: name.to_string(),
                    price,
                    category: category.to_string(),
                    stock,
                    active: true,
                };
                inner.products.push(Product::from_new(id, new, now));
            }
        }
        store
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock means a panic mid-mutation; propagating the
        // panic to this caller is the only sound option left.
        self.inner.lock().expect("product store lock poisoned")
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn list(
        &self,
        filter: &ProductFilter,
        sort: Option<SortKey>,
        page: Page,
    ) -> StoreResult<PageResult<Product>> {
        let mut matching: Vec<Product> = {
            let inner = self.lock();
            inner
                .products
                .iter()
                .filter(|p| filter.matches(p))
                .cloned()
                .collect()
        };

        if let Some(sort) = sort {
            sort.sort(&mut matching);
        }

        Ok(PageResult::paginate(matching, page))
    }

    async fn get(&self, id: u64) -> StoreResult<Product> {
        let inner = self.lock();
        let index = inner.position(id)?;
        Ok(inner.products[index].clone())
    }

    async fn insert(&self, new: NewProduct) -> StoreResult<Product> {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;

        let product = Product::from_new(id, new, Utc::now());
        inner.products.push(product.clone());
        Ok(product)
    }

    async fn replace(&self, id: u64, new: NewProduct) -> StoreResult<Product> {
        let mut inner = self.lock();
        let index = inner.position(id)?;

        let created_at = inner.products[index].created_at;
        let mut product = Product::from_new(id, new, created_at);
        product.updated_at = Some(Utc::now());
        inner.products[index] = product.clone();
        Ok(product)
    }

    async fn apply_patch(&self, id: u64, patch: ProductPatch) -> StoreResult<Product> {
        let mut inner = self.lock();
        let index = inner.position(id)?;

        let product = &mut inner.products[index];
        product.apply_patch(&patch, Utc::now());
        Ok(product.clone())
    }

    async fn remove(&self, id: u64) -> StoreResult<Product> {
        let mut inner = self.lock();
        let index = inner.position(id)?;
        Ok(inner.products.remove(index))
    }

    async fn mark_deleted(&self, id: u64) -> StoreResult<Product> {
        let mut inner = self.lock();
        let index = inner.position(id)?;

        let product = &mut inner.products[index];
        product.deleted = true;
        product.deleted_at = Some(Utc::now());
        Ok(product.clone())
    }

    async fn restore(&self, id: u64) -> StoreResult<Product> {
        let mut inner = self.lock();
        let index = inner.position(id)?;

        let product = &mut inner.products[index];
        if !product.deleted {
            return Err(StoreError::invalid_state("El producto no está eliminado"));
        }
        product.deleted = false;
        product.deleted_at = None;
        Ok(product.clone())
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.lock().products.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product(name: &str, price: f64) -> NewProduct {
        NewProduct::new(name, price).unwrap()
    }

    #[tokio::test]
    async fn test_insert_then_get_roundtrip() {
        let store = MemoryStore::new();
        let created = store.insert(new_product("Mouse", 25.0)).await.unwrap();

        assert!(created.id >= 1);
        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        assert_eq!(
            store.get(999).await.unwrap_err(),
            StoreError::NotFound { id: 999 }
        );
    }

    #[tokio::test]
    async fn test_ids_are_monotonic_and_never_reused() {
        let store = MemoryStore::new();
        let a = store.insert(new_product("A", 1.0)).await.unwrap();
        let b = store.insert(new_product("B", 2.0)).await.unwrap();
        assert!(b.id > a.id);

        store.remove(b.id).await.unwrap();
        let c = store.insert(new_product("C", 3.0)).await.unwrap();
        assert!(c.id > b.id, "removed ids must not be reassigned");
    }

    #[tokio::test]
    async fn test_remove_returns_product_and_shrinks() {
        let store = MemoryStore::new();
        let created = store.insert(new_product("Mouse", 25.0)).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);

        let removed = store.remove(created.id).await.unwrap();
        assert_eq!(removed.id, created.id);
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_remove_unknown_id_leaves_collection_unchanged() {
        let store = MemoryStore::with_seed();
        let before = store.count().await.unwrap();
        assert!(store.remove(999).await.is_err());
        assert_eq!(store.count().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_replace_keeps_id_and_created_at() {
        let store = MemoryStore::new();
        let created = store.insert(new_product("Mouse", 25.0)).await.unwrap();

        let replaced = store
            .replace(created.id, new_product("Mouse Pro", 40.0))
            .await
            .unwrap();

        assert_eq!(replaced.id, created.id);
        assert_eq!(replaced.created_at, created.created_at);
        assert_eq!(replaced.name, "Mouse Pro");
        assert!(replaced.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_patch_is_idempotent_for_fixed_fields() {
        let store = MemoryStore::new();
        let created = store.insert(new_product("Mouse", 25.0)).await.unwrap();

        let patch = ProductPatch {
            price: Some(30.0),
            stock: Some(4),
            ..Default::default()
        };

        let once = store.apply_patch(created.id, patch.clone()).await.unwrap();
        let twice = store.apply_patch(created.id, patch).await.unwrap();

        assert_eq!(once.price, twice.price);
        assert_eq!(once.stock, twice.stock);
        assert_eq!(once.name, twice.name);
        assert_eq!(once.category, twice.category);
    }

    #[tokio::test]
    async fn test_soft_delete_and_restore() {
        let store = MemoryStore::new();
        let created = store.insert(new_product("Mouse", 25.0)).await.unwrap();

        let deleted = store.mark_deleted(created.id).await.unwrap();
        assert!(deleted.deleted);
        assert!(deleted.deleted_at.is_some());
        // Still present in the collection.
        assert_eq!(store.count().await.unwrap(), 1);

        let restored = store.restore(created.id).await.unwrap();
        assert!(!restored.deleted);
        assert!(restored.deleted_at.is_none());
    }

    #[tokio::test]
    async fn test_restore_without_soft_delete_is_invalid_state() {
        let store = MemoryStore::new();
        let created = store.insert(new_product("Mouse", 25.0)).await.unwrap();
        assert!(matches!(
            store.restore(created.id).await,
            Err(StoreError::InvalidState { .. })
        ));
    }

    #[tokio::test]
    async fn test_list_filter_is_narrowing() {
        let store = MemoryStore::with_seed();
        let all = store
            .list(&ProductFilter::default(), None, Page::new(1, 100))
            .await
            .unwrap();

        let filter = ProductFilter {
            price_min: Some(100.0),
            ..Default::default()
        };
        let filtered = store.list(&filter, None, Page::new(1, 100)).await.unwrap();

        assert!(filtered.total <= all.total);
        for product in &filtered.items {
            assert!(filter.matches(product));
            assert!(all.items.contains(product));
        }
    }

    #[tokio::test]
    async fn test_list_pagination_concatenation_is_exact() {
        let store = MemoryStore::new();
        for i in 0..23 {
            store
                .insert(new_product(&format!("P{i:02}"), (i + 1) as f64))
                .await
                .unwrap();
        }

        let limit = 5;
        let first = store
            .list(&ProductFilter::default(), None, Page::new(1, limit))
            .await
            .unwrap();
        assert_eq!(first.page_count, 5);

        let mut seen = Vec::new();
        for page in 1..=first.page_count {
            let result = store
                .list(&ProductFilter::default(), None, Page::new(page, limit))
                .await
                .unwrap();
            seen.extend(result.items.into_iter().map(|p| p.id));
        }

        let mut expected: Vec<u64> = (1..=23).collect();
        expected.sort_unstable();
        let mut sorted_seen = seen.clone();
        sorted_seen.sort_unstable();
        assert_eq!(sorted_seen, expected, "no duplicates or omissions");
        assert_eq!(seen.len(), 23);
    }

    #[tokio::test]
    async fn test_list_sorted_by_price() {
        let store = MemoryStore::with_seed();
        let result = store
            .list(
                &ProductFilter::default(),
                Some(SortKey::PriceAsc),
                Page::default(),
            )
            .await
            .unwrap();
        let prices: Vec<f64> = result.items.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![25.0, 1000.0]);
    }

    #[tokio::test]
    async fn test_seed_catalog() {
        let store = MemoryStore::with_seed();
        assert_eq!(store.count().await.unwrap(), 2);
        let laptop = store.get(1).await.unwrap();
        assert_eq!(laptop.name, "Laptop");
        assert_eq!(laptop.category, "Electrónica");
    }
}
