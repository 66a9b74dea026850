//! List query types: filtering, sorting and pagination.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Conjunctive filter predicates for product listings.
///
/// A product is retained only if it satisfies every supplied predicate;
/// an empty filter retains everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Exact category match.
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub price_min: Option<f64>,
    /// Inclusive upper price bound.
    pub price_max: Option<f64>,
    /// Active-flag match.
    pub active: Option<bool>,
}

impl ProductFilter {
    /// True when the product satisfies all supplied predicates.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if product.category != *category {
                return false;
            }
        }
        if let Some(min) = self.price_min {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if product.price > max {
                return false;
            }
        }
        if let Some(active) = self.active {
            if product.active != active {
                return false;
            }
        }
        true
    }

    /// True when no predicate was supplied.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.price_min.is_none()
            && self.price_max.is_none()
            && self.active.is_none()
    }
}

/// Sort order for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending by price.
    PriceAsc,
    /// Descending by price.
    PriceDesc,
    /// Ascending by name.
    Name,
}

impl SortKey {
    /// Parses a sort token. Unknown tokens yield `None` (unsorted), the
    /// same permissive fallback the format and version selectors use.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "price_asc" => Some(SortKey::PriceAsc),
            "price_desc" => Some(SortKey::PriceDesc),
            "nombre" | "name" => Some(SortKey::Name),
            _ => None,
        }
    }

    /// Sorts a product slice in place. Price comparisons use `total_cmp`
    /// so the order is defined for every float value.
    pub fn sort(&self, products: &mut [Product]) {
        match self {
            SortKey::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortKey::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortKey::Name => products.sort_by(|a, b| a.name.cmp(&b.name)),
        }
    }
}

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Page number, >= 1.
    pub page: u64,
    /// Page size, >= 1.
    pub limit: u64,
}

impl Page {
    /// Default page size when the client does not supply one.
    pub const DEFAULT_LIMIT: u64 = 10;

    /// Builds a page request, clamping both values to at least 1.
    pub fn new(page: u64, limit: u64) -> Self {
        Page {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        ((self.page - 1) * self.limit) as usize
    }
}

impl Default for Page {
    fn default() -> Self {
        Page {
            page: 1,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// One page of results plus the totals needed to render pagination
/// metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Total matching items across all pages.
    pub total: usize,
    /// The requested page number.
    pub page: u64,
    /// The requested page size.
    pub limit: u64,
    /// `ceil(total / limit)`.
    pub page_count: u64,
}

impl<T> PageResult<T> {
    /// Slices one page out of the full (already filtered and sorted)
    /// result set.
    pub fn paginate(items: Vec<T>, page: Page) -> Self {
        let total = items.len();
        let page_count = (total as u64).div_ceil(page.limit);
        let items = items
            .into_iter()
            .skip(page.offset())
            .take(page.limit as usize)
            .collect();

        PageResult {
            items,
            total,
            page: page.page,
            limit: page.limit,
            page_count,
        }
    }
}
