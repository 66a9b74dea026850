//! The product record and its validated write inputs.
//!
//! Wire field names follow the public API contract (`nombre`, `precio`,
//! `categoria`, ...); Rust field names stay English. All validation for
//! create/replace/patch lives here so every storage backend and every API
//! version applies the same rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{StoreError, StoreResult};

/// Category applied when a draft does not specify one.
pub const DEFAULT_CATEGORY: &str = "General";

fn is_false(value: &bool) -> bool {
    !value
}

/// A product record.
///
/// Identifiers are assigned by the store, increase monotonically, and are
/// never reused within a process lifetime. `created_at` is set once on
/// insert; `updated_at` on every successful PUT/PATCH; `deleted`/
/// `deleted_at` implement soft deletion (the record stays in storage and
/// can be restored).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier.
    pub id: u64,

    /// Display name, non-empty, stored trimmed.
    #[serde(rename = "nombre")]
    pub name: String,

    /// Unit price, strictly positive.
    #[serde(rename = "precio")]
    pub price: f64,

    /// Free-form category, defaults to [`DEFAULT_CATEGORY`].
    #[serde(rename = "categoria")]
    pub category: String,

    /// Units in stock.
    pub stock: u32,

    /// Whether the product is active.
    #[serde(rename = "activo")]
    pub active: bool,

    /// Creation timestamp, server-assigned.
    #[serde(rename = "fechaCreacion")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp, set on PUT/PATCH.
    #[serde(rename = "fechaActualizacion", skip_serializing_if = "Option::is_none", default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Soft-delete marker. Omitted from the wire while false.
    #[serde(rename = "eliminado", skip_serializing_if = "is_false", default)]
    pub deleted: bool,

    /// Soft-delete timestamp.
    #[serde(rename = "fechaEliminacion", skip_serializing_if = "Option::is_none", default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Materializes a validated draft into a record with the given identity.
    pub fn from_new(id: u64, new: NewProduct, now: DateTime<Utc>) -> Self {
        Product {
            id,
            name: new.name,
            price: new.price,
            category: new.category,
            stock: new.stock,
            active: new.active,
            created_at: now,
            updated_at: None,
            deleted: false,
            deleted_at: None,
        }
    }

    /// Applies a validated partial update and stamps `updated_at`.
    pub fn apply_patch(&mut self, patch: &ProductPatch, now: DateTime<Utc>) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        self.updated_at = Some(now);
    }
}

/// Raw create/replace body as received from a client.
///
/// Every field is optional at this stage; [`ProductDraft::validate`] turns
/// a draft into a [`NewProduct`] or rejects it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductDraft {
    /// Product name.
    #[serde(rename = "nombre")]
    pub name: Option<String>,

    /// Unit price.
    #[serde(rename = "precio")]
    pub price: Option<f64>,

    /// Category, defaults to [`DEFAULT_CATEGORY`] when absent.
    #[serde(rename = "categoria")]
    pub category: Option<String>,

    /// Stock level, defaults to 0 when absent.
    pub stock: Option<u32>,

    /// Active flag, defaults to true when absent.
    #[serde(rename = "activo")]
    pub active: Option<bool>,
}

impl ProductDraft {
    /// Validates the draft: name must be present and non-empty after
    /// trimming, price must be present, finite and strictly positive.
    /// Absent optional fields take their documented defaults.
    pub fn validate(self) -> StoreResult<NewProduct> {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty());
        let price = self.price.filter(|p| p.is_finite() && *p > 0.0);

        match (name, price) {
            (Some(name), Some(price)) => Ok(NewProduct {
                name: name.to_string(),
                price,
                category: self
                    .category
                    .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
                stock: self.stock.unwrap_or(0),
                active: self.active.unwrap_or(true),
            }),
            _ => Err(StoreError::invalid_input(
                "Nombre y precio válido son requeridos",
            )),
        }
    }
}

/// A validated create/replace input, ready for storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Non-empty, trimmed name.
    pub name: String,
    /// Strictly positive price.
    pub price: f64,
    /// Category, already defaulted.
    pub category: String,
    /// Stock level, already defaulted.
    pub stock: u32,
    /// Active flag, already defaulted.
    pub active: bool,
}

impl NewProduct {
    /// Shorthand used by seeds and tests: name + price, everything else
    /// defaulted. Fails on the same conditions as [`ProductDraft::validate`].
    pub fn new(name: impl Into<String>, price: f64) -> StoreResult<Self> {
        ProductDraft {
            name: Some(name.into()),
            price: Some(price),
            ..ProductDraft::default()
        }
        .validate()
    }
}

/// A validated partial update.
///
/// Only the fields in the allowed set {nombre, precio, categoria, stock}
/// can be patched. Validation policy: an invalid value for a known field
/// rejects the whole patch (consistent with full update); fields outside
/// the allowed set are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    /// New name, non-empty and trimmed.
    pub name: Option<String>,
    /// New price, strictly positive.
    pub price: Option<f64>,
    /// New category.
    pub category: Option<String>,
    /// New stock level.
    pub stock: Option<u32>,
}

impl ProductPatch {
    /// Builds a patch from a JSON object, validating each allowed field.
    pub fn from_body(body: &Map<String, Value>) -> StoreResult<Self> {
        let mut patch = ProductPatch::default();

        for (field, value) in body {
            match field.as_str() {
                "nombre" => {
                    let name = value
                        .as_str()
                        .map(str::trim)
                        .filter(|n| !n.is_empty())
                        .ok_or_else(|| {
                            StoreError::invalid_input("nombre debe ser un texto no vacío")
                        })?;
                    patch.name = Some(name.to_string());
                }
                "precio" => {
                    let price = value
                        .as_f64()
                        .filter(|p| p.is_finite() && *p > 0.0)
                        .ok_or_else(|| {
                            StoreError::invalid_input("precio debe ser un número mayor que 0")
                        })?;
                    patch.price = Some(price);
                }
                "categoria" => {
                    let category = value.as_str().ok_or_else(|| {
                        StoreError::invalid_input("categoria debe ser un texto")
                    })?;
                    patch.category = Some(category.to_string());
                }
                "stock" => {
                    let stock = value
                        .as_u64()
                        .and_then(|s| u32::try_from(s).ok())
                        .ok_or_else(|| {
                            StoreError::invalid_input("stock debe ser un entero no negativo")
                        })?;
                    patch.stock = Some(stock);
                }
                // Fields outside the allowed set are ignored.
                _ => {}
            }
        }

        Ok(patch)
    }

    /// True when no allowed field was supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.stock.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_applies_defaults() {
        let new = NewProduct::new("Mouse", 25.0).unwrap();
        assert_eq!(new.category, "General");
        assert_eq!(new.stock, 0);
        assert!(new.active);
    }

    #[test]
    fn test_validate_trims_name() {
        let draft = ProductDraft {
            name: Some("  Teclado  ".to_string()),
            price: Some(45.0),
            ..Default::default()
        };
        assert_eq!(draft.validate().unwrap().name, "Teclado");
    }

    #[test]
    fn test_validate_rejects_missing_name() {
        let draft = ProductDraft {
            price: Some(10.0),
            ..Default::default()
        };
        assert!(matches!(
            draft.validate(),
            Err(StoreError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let draft = ProductDraft {
            name: Some("   ".to_string()),
            price: Some(10.0),
            ..Default::default()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_price() {
        for price in [0.0, -3.5, f64::NAN, f64::INFINITY] {
            let draft = ProductDraft {
                name: Some("Monitor".to_string()),
                price: Some(price),
                ..Default::default()
            };
            assert!(draft.validate().is_err(), "price {price} should be invalid");
        }
    }

    #[test]
    fn test_patch_from_valid_body() {
        let body = json!({"precio": 30.0, "stock": 7});
        let patch = ProductPatch::from_body(body.as_object().unwrap()).unwrap();
        assert_eq!(patch.price, Some(30.0));
        assert_eq!(patch.stock, Some(7));
        assert!(patch.name.is_none());
    }

    #[test]
    fn test_patch_rejects_invalid_price() {
        let body = json!({"precio": "mucho"});
        assert!(ProductPatch::from_body(body.as_object().unwrap()).is_err());
    }

    #[test]
    fn test_patch_rejects_negative_stock() {
        let body = json!({"stock": -1});
        assert!(ProductPatch::from_body(body.as_object().unwrap()).is_err());
    }

    #[test]
    fn test_patch_ignores_unknown_fields() {
        let body = json!({"id": 999, "eliminado": true, "categoria": "Ofertas"});
        let patch = ProductPatch::from_body(body.as_object().unwrap()).unwrap();
        assert_eq!(patch.category.as_deref(), Some("Ofertas"));
        assert!(patch.name.is_none() && patch.price.is_none() && patch.stock.is_none());
    }

    #[test]
    fn test_apply_patch_sets_updated_at() {
        let now = Utc::now();
        let mut product = Product::from_new(1, NewProduct::new("Mouse", 25.0).unwrap(), now);
        let patch = ProductPatch {
            price: Some(30.0),
            ..Default::default()
        };
        product.apply_patch(&patch, now);
        assert_eq!(product.price, 30.0);
        assert_eq!(product.updated_at, Some(now));
        assert_eq!(product.name, "Mouse");
    }

    #[test]
    fn test_json_roundtrip() {
        let now = Utc::now();
        let mut product = Product::from_new(7, NewProduct::new("Monitor", 300.0).unwrap(), now);
        product.deleted = true;
        product.deleted_at = Some(now);

        let value = serde_json::to_value(&product).unwrap();
        let parsed: Product = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, product);
    }

    #[test]
    fn test_wire_names() {
        let now = Utc::now();
        let product = Product::from_new(3, NewProduct::new("Mouse", 25.0).unwrap(), now);
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["nombre"], "Mouse");
        assert_eq!(value["precio"], 25.0);
        assert_eq!(value["categoria"], "General");
        assert_eq!(value["activo"], true);
        assert!(value.get("eliminado").is_none());
        assert!(value.get("fechaActualizacion").is_none());
    }
}
