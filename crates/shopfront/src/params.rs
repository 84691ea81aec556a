//! Validation rules for caller-supplied query parameters.
//!
//! The transport layer runs raw request values through these before calling
//! the query engine, so malformed input surfaces as
//! [`CatalogError::InvalidArgument`] rather than an empty result.

use crate::error::{CatalogError, CatalogResult};
use crate::model::ProductId;

/// Parse a path segment as a product id.
pub fn parse_product_id(raw: &str) -> CatalogResult<ProductId> {
    raw.trim()
        .parse::<ProductId>()
        .map_err(|_| CatalogError::InvalidArgument(format!("invalid product id: {raw:?}")))
}

/// Parse one price bound. `name` labels the parameter in error messages.
///
/// Surrounding whitespace is trimmed before parsing, as for ids, so
/// `" 10 "` reads as `10`. Infinities are accepted so callers can express
/// open-ended ranges; NaN is not.
pub fn parse_price_bound(name: &str, raw: Option<&str>) -> CatalogResult<f64> {
    let raw = match raw.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => {
            return Err(CatalogError::InvalidArgument(format!(
                "{name} price is required"
            )))
        }
    };
    match raw.parse::<f64>() {
        Ok(v) if !v.is_nan() => Ok(v),
        _ => Err(CatalogError::InvalidArgument(format!(
            "invalid {name} price format: {raw:?}"
        ))),
    }
}

/// Parse and check a `[min, max]` price range.
pub fn price_bounds(min: Option<&str>, max: Option<&str>) -> CatalogResult<(f64, f64)> {
    if min.map_or(true, |v| v.trim().is_empty()) || max.map_or(true, |v| v.trim().is_empty()) {
        return Err(CatalogError::InvalidArgument(
            "both min and max price parameters are required".to_string(),
        ));
    }
    let min = parse_price_bound("min", min)?;
    let max = parse_price_bound("max", max)?;
    if min > max {
        return Err(CatalogError::InvalidArgument(format!(
            "min price ({min}) cannot be greater than max price ({max})"
        )));
    }
    Ok((min, max))
}

/// Require a non-blank search query. The query is returned untrimmed.
pub fn search_query(raw: Option<&str>) -> CatalogResult<&str> {
    match raw {
        Some(q) if !q.trim().is_empty() => Ok(q),
        _ => Err(CatalogError::InvalidArgument(
            "search query is required".to_string(),
        )),
    }
}
