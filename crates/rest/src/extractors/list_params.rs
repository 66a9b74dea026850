//! Listing query parameter extractor.
//!
//! Parses the filter, sort and pagination parameters of `GET /productos`.
//! The Spanish parameter names are canonical; `page`, `limit` and `sort`
//! are accepted as aliases.

use axum::{
    extract::{FromRequestParts, Query},
    http::{StatusCode, request::Parts},
};
use mercado_store::{Page, ProductFilter, SortKey};
use serde::Deserialize;

/// Raw listing query parameters.
#[derive(Debug, Deserialize, Default)]
struct ListQuery {
    categoria: Option<String>,
    precio_min: Option<f64>,
    precio_max: Option<f64>,
    activo: Option<bool>,
    #[serde(alias = "page")]
    pagina: Option<u64>,
    #[serde(alias = "limit")]
    limite: Option<u64>,
    #[serde(alias = "sort")]
    ordenar: Option<String>,
}

/// Axum extractor for listing parameters.
///
/// # Example
///
/// ```rust,ignore
/// use mercado_rest::extractors::ListParams;
///
/// async fn list_handler(params: ListParams) {
///     let page = params.page(10, 100);
///     let filter = &params.filter;
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    /// Conjunctive filter predicates.
    pub filter: ProductFilter,
    /// Requested sort order; `None` keeps insertion order. Unknown sort
    /// tokens resolve to `None` (permissive, like format fallback).
    pub sort: Option<SortKey>,
    /// Requested page number (1-based), if supplied.
    pub page_number: Option<u64>,
    /// Requested page size, if supplied.
    pub page_limit: Option<u64>,
}

impl ListParams {
    /// Resolves the page request, applying the configured default and cap.
    /// Page and limit are clamped to at least 1.
    pub fn page(&self, default_limit: u64, max_limit: u64) -> Page {
        let limit = self.page_limit.unwrap_or(default_limit).min(max_limit);
        Page::new(self.page_number.unwrap_or(1), limit)
    }
}

impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<ListQuery>::from_request_parts(parts, state)
            .await
            .map_err(|_| (StatusCode::BAD_REQUEST, "Parámetros de consulta inválidos"))?;

        Ok(ListParams {
            filter: ProductFilter {
                category: query.categoria,
                price_min: query.precio_min,
                price_max: query.precio_max,
                active: query.activo,
            },
            sort: query.ordenar.as_deref().and_then(SortKey::parse),
            page_number: query.pagina,
            page_limit: query.limite,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn params_for(uri: &str) -> ListParams {
        let request = Request::builder().uri(uri).body(()).unwrap();
        let (mut parts, _) = request.into_parts();
        ListParams::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn test_empty_query() {
        let params = params_for("/productos").await;
        assert!(params.filter.is_empty());
        assert!(params.sort.is_none());
        assert_eq!(params.page(10, 100), Page::new(1, 10));
    }

    #[tokio::test]
    async fn test_filter_params() {
        let params =
            params_for("/productos?categoria=Accesorios&precio_min=10&precio_max=50&activo=true")
                .await;
        assert_eq!(params.filter.category.as_deref(), Some("Accesorios"));
        assert_eq!(params.filter.price_min, Some(10.0));
        assert_eq!(params.filter.price_max, Some(50.0));
        assert_eq!(params.filter.active, Some(true));
    }

    #[tokio::test]
    async fn test_spanish_and_english_aliases() {
        let spanish = params_for("/productos?pagina=2&limite=5&ordenar=price_asc").await;
        let english = params_for("/productos?page=2&limit=5&sort=price_asc").await;
        assert_eq!(spanish.page(10, 100), english.page(10, 100));
        assert_eq!(spanish.sort, english.sort);
        assert_eq!(spanish.sort, Some(SortKey::PriceAsc));
    }

    #[tokio::test]
    async fn test_limit_capped_at_max() {
        let params = params_for("/productos?limite=9999").await;
        assert_eq!(params.page(10, 100).limit, 100);
    }

    #[tokio::test]
    async fn test_unknown_sort_is_none() {
        let params = params_for("/productos?ordenar=rating").await;
        assert!(params.sort.is_none());
    }

    #[tokio::test]
    async fn test_page_zero_clamps_to_one() {
        let params = params_for("/productos?pagina=0").await;
        assert_eq!(params.page(10, 100).page, 1);
    }
}
