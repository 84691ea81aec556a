//! Error types for catalog construction, lookup, and request validation.

use crate::model::ProductId;
use thiserror::Error;

/// Errors produced by the catalog core.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// A caller-supplied parameter is missing or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No product carries the requested id.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// Two seed records share an id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// A seed record breaks a field constraint.
    #[error("invalid product {id}: {reason}")]
    InvalidRecord { id: ProductId, reason: String },

    /// The seed source could not be read or parsed.
    #[error("failed to load catalog: {0}")]
    Load(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
