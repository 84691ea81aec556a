//! Shopfront core: product records, the in-memory catalog store, and the
//! read-only query engine that selects products by gender, category, price
//! range, or free text.
//!
//! The store is populated once and never mutated, so a single instance can be
//! shared across any number of concurrent readers without locking.

pub mod error;
pub mod model;
pub mod params;
pub mod query;
pub mod seed;
pub mod store;

pub use error::{CatalogError, CatalogResult};
pub use model::{Product, ProductId};
pub use store::CatalogStore;
