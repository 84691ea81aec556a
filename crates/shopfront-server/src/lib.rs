//! HTTP transport for the Shopfront catalog.
//!
//! Serves the read-only query operations of the `shopfront` core as a JSON
//! API with CORS, request logging, and panic recovery.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod observer;
pub mod routes;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use observer::{QueryOutcome, QueryRecord, RequestObserver, RequestRecord, TracingObserver};
pub use routes::build_router;
pub use state::AppState;
