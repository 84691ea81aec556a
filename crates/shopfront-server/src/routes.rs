//! Router assembly: catalog routes, CORS, request logging, panic recovery.

use crate::handlers;
use crate::middleware::{log_requests, panic_response};
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

/// Routes served by [`build_router`].
pub const ENDPOINTS: &[&str] = &[
    "GET /api/products",
    "GET /api/products/:id",
    "GET /api/products/search",
    "GET /api/products/price-range",
    "GET /api/categories",
    "GET /api/genders",
];

/// CORS policy for the given origins. `*` allows any origin; origins that are
/// not valid header values are skipped with a warning.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(parse_origins(origins))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}

/// Build the application router.
///
/// Layer order, outermost first: request logging, CORS, panic recovery.
/// Logging sits outside CORS so preflight requests are recorded too.
pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    // Static segments take priority over `:id` in axum's matcher, so
    // `search` and `price-range` never reach `get_product`.
    let router = Router::new()
        .route("/api/products", get(handlers::list_products))
        .route("/api/products/search", get(handlers::search_products))
        .route("/api/products/price-range", get(handlers::price_range))
        .route("/api/products/:id", get(handlers::get_product))
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/genders", get(handlers::list_genders))
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors_layer(allowed_origins))
        .layer(axum::middleware::from_fn_with_state(state.clone(), log_requests))
        .with_state(state);

    info!(
        component = "routes",
        endpoints = ?ENDPOINTS,
        origins = ?allowed_origins,
        "routes setup completed"
    );
    router
}
