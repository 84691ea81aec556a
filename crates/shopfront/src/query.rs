//! Query engine for filtering and searching products in a catalog.
//!
//! Every operation is a pure scan over a borrowed product slice. Results
//! borrow from the input and keep catalog order; nothing is sorted,
//! paginated, or deduplicated beyond the natural uniqueness of ids.

use crate::error::{CatalogError, CatalogResult};
use crate::model::{Product, ProductId};

/// Attribute filters for [`list_products`].
///
/// An absent or empty value disables that filter. Matching is exact and
/// case-sensitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFilter<'a> {
    pub gender: Option<&'a str>,
    pub category: Option<&'a str>,
}

impl<'a> ProductFilter<'a> {
    pub fn new(gender: Option<&'a str>, category: Option<&'a str>) -> Self {
        Self { gender, category }
    }

    fn matches(&self, product: &Product) -> bool {
        if let Some(gender) = active(self.gender) {
            if product.gender != gender {
                return false;
            }
        }
        if let Some(category) = active(self.category) {
            if product.category != category {
                return false;
            }
        }
        true
    }
}

fn active(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Products matching every active filter, in catalog order.
pub fn list_products<'p>(products: &'p [Product], filter: &ProductFilter<'_>) -> Vec<&'p Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}

/// First product with the given id.
pub fn get_by_id(products: &[Product], id: ProductId) -> CatalogResult<&Product> {
    products
        .iter()
        .find(|p| p.id == id)
        .ok_or(CatalogError::NotFound(id))
}

/// Distinct categories in first-seen order.
pub fn list_categories(products: &[Product]) -> Vec<&str> {
    distinct(products.iter().map(|p| p.category.as_str()))
}

/// Distinct genders in first-seen order.
pub fn list_genders(products: &[Product]) -> Vec<&str> {
    distinct(products.iter().map(|p| p.gender.as_str()))
}

fn distinct<'p>(values: impl Iterator<Item = &'p str>) -> Vec<&'p str> {
    let mut out: Vec<&str> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

/// Products whose name or description contains `query`, ignoring case.
///
/// An empty query matches nothing. Callers reject blank queries before
/// reaching this point.
pub fn search<'p>(products: &'p [Product], query: &str) -> Vec<&'p Product> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = fold_case(query);
    products
        .iter()
        .filter(|p| contains_ignore_case(&p.name, &needle) || contains_ignore_case(&p.description, &needle))
        .collect()
}

// `needle` must already be folded.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    fold_case(haystack).contains(needle)
}

/// Simple per-character lowercase folding: one char in, one char out, no
/// context. A final `Σ` folds to `σ` (not `ς`) and `İ` folds to `i`.
fn fold_case(text: &str) -> String {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Products priced within `[min, max]`, inclusive on both ends.
///
/// An inverted range (`min > max`) or a NaN bound yields an empty result.
pub fn price_range(products: &[Product], min: f64, max: f64) -> Vec<&Product> {
    if min.is_nan() || max.is_nan() || min > max {
        return Vec::new();
    }
    products
        .iter()
        .filter(|p| p.price >= min && p.price <= max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CatalogStore;

    fn catalog() -> CatalogStore {
        CatalogStore::seeded().unwrap()
    }

    fn ids(products: &[&Product]) -> Vec<ProductId> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_list_without_filters_is_whole_catalog() {
        let store = catalog();
        let results = list_products(store.all(), &ProductFilter::default());
        assert_eq!(results.len(), store.len());
        assert!(results.iter().zip(store.all()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_empty_filter_values_are_no_ops() {
        let store = catalog();
        let results = list_products(store.all(), &ProductFilter::new(Some(""), Some("")));
        assert_eq!(results.len(), 12);
    }

    #[test]
    fn test_list_by_gender() {
        let store = catalog();
        let men = list_products(store.all(), &ProductFilter::new(Some("men"), None));
        assert_eq!(men.len(), 5);
        assert!(men.iter().all(|p| p.gender == "men"));
        assert_eq!(ids(&men), vec![1, 2, 3, 4, 5]);

        let women = list_products(store.all(), &ProductFilter::new(Some("women"), None));
        assert_eq!(ids(&women), vec![6, 7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_gender_match_is_case_sensitive() {
        let store = catalog();
        assert!(list_products(store.all(), &ProductFilter::new(Some("Men"), None)).is_empty());
    }

    #[test]
    fn test_unknown_gender_is_empty_not_error() {
        let store = catalog();
        assert!(list_products(store.all(), &ProductFilter::new(Some("nonexistent"), None)).is_empty());
    }

    #[test]
    fn test_combined_filters_are_intersection() {
        let store = catalog();
        for gender in list_genders(store.all()) {
            for category in list_categories(store.all()) {
                let both = list_products(store.all(), &ProductFilter::new(Some(gender), Some(category)));
                let by_gender = list_products(store.all(), &ProductFilter::new(Some(gender), None));
                let by_category = list_products(store.all(), &ProductFilter::new(None, Some(category)));
                let expected: Vec<&Product> = by_gender
                    .iter()
                    .copied()
                    .filter(|p| by_category.contains(p))
                    .collect();
                assert_eq!(both, expected, "{gender}/{category}");
            }
        }

        let jeans = list_products(store.all(), &ProductFilter::new(Some("women"), Some("jeans")));
        assert_eq!(ids(&jeans), vec![7]);
    }

    #[test]
    fn test_get_by_id_roundtrips_every_product() {
        let store = catalog();
        for p in store.all() {
            assert_eq!(get_by_id(store.all(), p.id).unwrap(), p);
        }
        assert_eq!(get_by_id(store.all(), 1).unwrap().name, "Classic Fit Cotton T-Shirt");
    }

    #[test]
    fn test_get_by_id_not_found() {
        let store = catalog();
        assert_eq!(get_by_id(store.all(), 9999), Err(CatalogError::NotFound(9999)));
        assert_eq!(get_by_id(&[], 1), Err(CatalogError::NotFound(1)));
    }

    #[test]
    fn test_categories_first_seen_order() {
        let store = catalog();
        assert_eq!(
            list_categories(store.all()),
            vec![
                "t-shirts", "jeans", "shirts", "pants", "sweaters", "dresses",
                "blouses", "cardigans", "activewear", "skirts", "tops",
            ]
        );
    }

    #[test]
    fn test_categories_cover_catalog_without_duplicates() {
        let store = catalog();
        let categories = list_categories(store.all());
        for (i, c) in categories.iter().enumerate() {
            assert!(!categories[i + 1..].contains(c));
        }
        assert!(store.all().iter().all(|p| categories.contains(&p.category.as_str())));
    }

    #[test]
    fn test_genders() {
        let store = catalog();
        assert_eq!(list_genders(store.all()), vec!["men", "women"]);
        assert!(list_genders(&[]).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let store = catalog();
        let lower = search(store.all(), "shirt");
        let upper = search(store.all(), "SHIRT");
        assert_eq!(lower, upper);
        assert!(!lower.is_empty());
        for p in &lower {
            assert!(
                p.name.to_lowercase().contains("shirt") || p.description.to_lowercase().contains("shirt")
            );
        }
    }

    #[test]
    fn test_search_matches_name() {
        let store = catalog();
        let results = search(store.all(), "cotton");
        assert!(results.iter().any(|p| p.name == "Classic Fit Cotton T-Shirt"));
        assert_eq!(ids(&results), vec![1, 12]);
    }

    #[test]
    fn test_search_matches_description() {
        let store = catalog();
        // "Moisture-wicking" only appears in the leggings description.
        assert_eq!(ids(&search(store.all(), "moisture-WICKING")), vec![10]);
    }

    #[test]
    fn test_search_is_complete() {
        let store = catalog();
        let results = search(store.all(), "perfect");
        let expected: Vec<&Product> = store
            .all()
            .iter()
            .filter(|p| p.name.to_lowercase().contains("perfect") || p.description.to_lowercase().contains("perfect"))
            .collect();
        assert_eq!(results, expected);
    }

    #[test]
    fn test_search_unicode_folding() {
        let mut p = catalog().all()[0].clone();
        p.name = "ÉTÉ Linen Tunic".into();
        let products = vec![p];
        assert_eq!(search(&products, "été").len(), 1);
    }

    #[test]
    fn test_search_folds_per_character() {
        let mut greek = catalog().all()[0].clone();
        greek.name = "ΟΔΟΣ".into();
        greek.description = String::new();
        let products = vec![greek];
        assert_eq!(search(&products, "Σ").len(), 1);
        assert_eq!(search(&products, "σ").len(), 1);
        assert_eq!(search(&products, "οδοσ").len(), 1);

        let mut city = catalog().all()[0].clone();
        city.name = "istanbul".into();
        city.description = String::new();
        let products = vec![city];
        assert_eq!(search(&products, "İ").len(), 1);
        assert_eq!(search(&products, "İSTANBUL").len(), 1);
    }

    #[test]
    fn test_fold_case_keeps_length() {
        for text in ["ΟΔΟΣ", "İstanbul", "Straße", "ÉTÉ"] {
            assert_eq!(fold_case(text).chars().count(), text.chars().count(), "{text}");
        }
        assert_eq!(fold_case("ΟΔΟΣ"), "οδοσ");
        assert_eq!(fold_case("İ"), "i");
    }

    #[test]
    fn test_search_empty_query_matches_nothing() {
        let store = catalog();
        assert!(search(store.all(), "").is_empty());
    }

    #[test]
    fn test_search_no_hits() {
        let store = catalog();
        assert!(search(store.all(), "tuxedo").is_empty());
    }

    #[test]
    fn test_price_range_inclusive_bounds() {
        let store = catalog();
        let results = price_range(store.all(), 29.99, 59.99);
        assert_eq!(ids(&results), vec![1, 3, 10, 12]);
    }

    #[test]
    fn test_price_range_sound_and_complete() {
        let store = catalog();
        let (min, max) = (50.0, 90.0);
        let results = price_range(store.all(), min, max);
        assert!(results.iter().all(|p| p.price >= min && p.price <= max));
        let expected = store
            .all()
            .iter()
            .filter(|p| p.price >= min && p.price <= max)
            .count();
        assert_eq!(results.len(), expected);
    }

    #[test]
    fn test_price_range_unbounded_is_whole_catalog() {
        let store = catalog();
        assert_eq!(price_range(store.all(), 0.0, f64::INFINITY).len(), store.len());
    }

    #[test]
    fn test_price_range_inverted_is_empty() {
        let store = catalog();
        assert!(price_range(store.all(), 100.0, 50.0).is_empty());
        assert!(price_range(store.all(), 0.01, 0.0).is_empty());
        assert!(price_range(store.all(), f64::NAN, 100.0).is_empty());
    }

    #[test]
    fn test_price_range_single_point() {
        let store = catalog();
        assert_eq!(ids(&price_range(store.all(), 89.99, 89.99)), vec![5, 6]);
    }
}
