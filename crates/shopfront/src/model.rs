//! Product record and its wire format.

use serde::{Deserialize, Serialize};

/// Catalog-unique product identifier.
pub type ProductId = i64;

/// A single catalog entry.
///
/// Field order and names are the JSON wire format: lower camel case, so
/// `in_stock` serializes as `inStock`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub gender: String,
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    pub in_stock: bool,
}

impl Product {
    /// Check the per-record constraints. Returns a human-readable reason on
    /// the first violation.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if self.category.trim().is_empty() {
            return Err("category must not be empty".to_string());
        }
        if self.gender.trim().is_empty() {
            return Err("gender must not be empty".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("price must be a finite value >= 0, got {}", self.price));
        }
        Ok(())
    }
}
