//! The catalog store: the single authoritative, insertion-ordered sequence of
//! products, populated once and read-only afterwards.

use crate::error::{CatalogError, CatalogResult};
use crate::model::Product;
use crate::seed;
use std::collections::HashSet;
use std::path::Path;

/// Read-only product catalog.
///
/// There is no API to add, remove, or edit records once built. Share it
/// behind an `Arc` for concurrent readers.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Build a store from a record sequence, keeping its order.
    ///
    /// Fails on the first record that breaks a field constraint or reuses an
    /// id already seen.
    pub fn new(products: Vec<Product>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product
                .validate()
                .map_err(|reason| CatalogError::InvalidRecord {
                    id: product.id,
                    reason,
                })?;
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// Store holding the built-in sample catalog, checked like any other seed.
    pub fn seeded() -> CatalogResult<Self> {
        Self::new(seed::sample_products())
    }

    /// Parse a JSON array of products in wire format.
    pub fn from_json_str(text: &str) -> CatalogResult<Self> {
        let products: Vec<Product> =
            serde_json::from_str(text).map_err(|e| CatalogError::Load(e.to_string()))?;
        Self::new(products)
    }

    /// Load a JSON seed file.
    pub fn from_json_file(path: &Path) -> CatalogResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Load(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    /// The full catalog in insertion order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
