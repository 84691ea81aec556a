//! Catalog HTTP handlers.
//!
//! Each handler validates its raw parameters with the core's rules, runs one
//! query operation, reports the outcome to the observer, and serializes the
//! result.

use crate::error::{ApiError, ApiResult};
use crate::observer::{QueryOutcome, QueryRecord};
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use shopfront::query::{self, ProductFilter};
use shopfront::{params, CatalogError};
use std::time::Instant;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub gender: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PriceRangeParams {
    pub min: Option<String>,
    pub max: Option<String>,
}

/// Times one operation and reports it to the observer.
struct QueryReport<'a> {
    state: &'a AppState,
    operation: &'static str,
    params: Vec<(&'static str, String)>,
    started: Instant,
}

impl<'a> QueryReport<'a> {
    fn start(state: &'a AppState, operation: &'static str) -> Self {
        Self {
            state,
            operation,
            params: Vec::new(),
            started: Instant::now(),
        }
    }

    fn param(mut self, key: &'static str, value: Option<&str>) -> Self {
        self.params.push((key, value.unwrap_or_default().to_string()));
        self
    }

    fn finish(self, outcome: QueryOutcome) {
        self.state.observer.query_completed(&QueryRecord {
            operation: self.operation,
            params: self.params,
            outcome,
            duration: self.started.elapsed(),
        });
    }

    fn served<T: Serialize>(self, count: usize, body: &T) -> ApiResult<Response> {
        match json_response(body) {
            Ok(response) => {
                self.finish(QueryOutcome::Served(count));
                Ok(response)
            }
            Err(e) => {
                self.finish(QueryOutcome::Rejected(e.to_string()));
                Err(e)
            }
        }
    }

    fn rejected(self, err: CatalogError) -> ApiError {
        self.finish(QueryOutcome::Rejected(err.to_string()));
        err.into()
    }
}

/// Serialize `value` as a JSON response. A serialization failure becomes a
/// 500 rather than a truncated body.
pub fn json_response<T: Serialize + ?Sized>(value: &T) -> ApiResult<Response> {
    let body = serde_json::to_vec(value)
        .map_err(|e| ApiError::Internal(format!("failed to encode response: {e}")))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// `GET /api/products?gender=&category=`
pub async fn list_products(
    State(state): State<AppState>,
    Query(args): Query<ListParams>,
) -> ApiResult<Response> {
    let report = QueryReport::start(&state, "list_products")
        .param("gender", args.gender.as_deref())
        .param("category", args.category.as_deref());

    let filter = ProductFilter::new(args.gender.as_deref(), args.category.as_deref());
    let products = query::list_products(state.store.all(), &filter);
    report.served(products.len(), &products)
}

/// `GET /api/products/:id`
pub async fn get_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Response> {
    let report = QueryReport::start(&state, "get_product").param("id", Some(raw_id.as_str()));

    let id = match params::parse_product_id(&raw_id) {
        Ok(id) => id,
        Err(e) => return Err(report.rejected(e)),
    };
    match query::get_by_id(state.store.all(), id) {
        Ok(product) => report.served(1, product),
        Err(e) => Err(report.rejected(e)),
    }
}

/// `GET /api/products/search?q=`
pub async fn search_products(
    State(state): State<AppState>,
    Query(args): Query<SearchParams>,
) -> ApiResult<Response> {
    let report = QueryReport::start(&state, "search_products").param("q", args.q.as_deref());

    let q = match params::search_query(args.q.as_deref()) {
        Ok(q) => q,
        Err(e) => return Err(report.rejected(e)),
    };
    let products = query::search(state.store.all(), q);
    report.served(products.len(), &products)
}

/// `GET /api/products/price-range?min=&max=`
pub async fn price_range(
    State(state): State<AppState>,
    Query(args): Query<PriceRangeParams>,
) -> ApiResult<Response> {
    let report = QueryReport::start(&state, "price_range")
        .param("min", args.min.as_deref())
        .param("max", args.max.as_deref());

    let (min, max) = match params::price_bounds(args.min.as_deref(), args.max.as_deref()) {
        Ok(bounds) => bounds,
        Err(e) => return Err(report.rejected(e)),
    };
    let products = query::price_range(state.store.all(), min, max);
    report.served(products.len(), &products)
}

/// `GET /api/categories`
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Response> {
    let report = QueryReport::start(&state, "list_categories");
    let categories = query::list_categories(state.store.all());
    report.served(categories.len(), &categories)
}

/// `GET /api/genders`
pub async fn list_genders(State(state): State<AppState>) -> ApiResult<Response> {
    let report = QueryReport::start(&state, "list_genders");
    let genders = query::list_genders(state.store.all());
    report.served(genders.len(), &genders)
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("route not found".to_string())
}
