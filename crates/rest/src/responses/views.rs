//! Version-shaped payloads and HTML pages.
//!
//! The API version decides the wire shape, not the behavior: v1 keeps the
//! legacy trimmed projection (`{id, nombre, precio}`) and flat envelopes,
//! v2 returns full records under `data` with a `meta` block.

use mercado_store::{PageResult, Product};
use serde_json::{Value, json};

use crate::middleware::version::ApiVersion;
use crate::responses::render::escape_html;

/// Projects a product for the given version.
pub fn product_view(version: ApiVersion, product: &Product) -> Value {
    match version {
        ApiVersion::V1 => json!({
            "id": product.id,
            "nombre": product.name,
            "precio": product.price,
        }),
        ApiVersion::V2 => serde_json::to_value(product).unwrap_or(Value::Null),
    }
}

/// Builds the listing envelope for the given version.
pub fn list_view(version: ApiVersion, result: &PageResult<Product>) -> Value {
    let items: Vec<Value> = result
        .items
        .iter()
        .map(|p| product_view(version, p))
        .collect();

    match version {
        ApiVersion::V1 => json!({
            "productos": items,
            "total": result.total,
            "pagina": result.page,
            "limite": result.limit,
            "paginasTotal": result.page_count,
        }),
        ApiVersion::V2 => json!({
            "version": "2.0",
            "data": items,
            "meta": {
                "total": result.total,
                "pagina": result.page,
                "limite": result.limit,
                "paginasTotal": result.page_count,
            },
        }),
    }
}

/// Builds a mutation envelope (`{mensaje, producto}` / `{mensaje, data}`).
pub fn mutation_view(version: ApiVersion, mensaje: &str, product: &Product) -> Value {
    match version {
        ApiVersion::V1 => json!({
            "mensaje": mensaje,
            "producto": product_view(version, product),
        }),
        ApiVersion::V2 => json!({
            "mensaje": mensaje,
            "data": product_view(version, product),
        }),
    }
}

/// Renders the catalog listing as a complete HTML page.
pub fn catalog_page(result: &PageResult<Product>) -> String {
    let rows: String = result
        .items
        .iter()
        .map(|p| {
            format!(
                "<li>{} - ${} ({})</li>",
                escape_html(&p.name),
                p.price,
                escape_html(&p.category)
            )
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Catálogo de Productos</title></head>\n<body>\n\
         <h1>Catálogo de Productos</h1>\n<p>Total: {} productos</p>\n<ul>{}</ul>\n</body>\n</html>",
        result.total, rows
    )
}

/// Renders a single product as a complete HTML page.
pub fn product_page(product: &Product) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Producto {}</title></head>\n<body>\n\
         <h1>{}</h1>\n<p>Precio: ${}</p>\n<p>Categoría: {}</p>\n<p>Stock: {}</p>\n</body>\n</html>",
        product.id,
        escape_html(&product.name),
        product.price,
        escape_html(&product.category),
        product.stock
    )
}
