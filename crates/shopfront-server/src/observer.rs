//! Request observability seam.
//!
//! Handlers and middleware report through a [`RequestObserver`] held in the
//! application state instead of a process-wide logger. Production wiring uses
//! [`TracingObserver`]; tests inject their own implementation.

use std::time::Duration;
use tracing::{debug, info, warn};

/// One completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct RequestRecord {
    pub request_id: String,
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub client_ip: String,
    pub user_agent: String,
    pub status: u16,
    pub duration: Duration,
}

/// Outcome of one catalog operation invoked by a handler.
#[derive(Debug, Clone)]
pub struct QueryRecord {
    /// Operation name, e.g. `list_products`.
    pub operation: &'static str,
    /// Parameters as key/value pairs, in the order the handler received them.
    pub params: Vec<(&'static str, String)>,
    pub outcome: QueryOutcome,
    pub duration: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// The operation produced this many records or values.
    Served(usize),
    /// The request was rejected before or during the operation.
    Rejected(String),
}

/// Receives request and query events.
pub trait RequestObserver: Send + Sync {
    fn request_completed(&self, record: &RequestRecord);
    fn query_completed(&self, record: &QueryRecord);
}

/// Observer that emits structured `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

impl RequestObserver for TracingObserver {
    fn request_completed(&self, r: &RequestRecord) {
        let duration_ms = millis(r.duration);
        if r.status >= 400 {
            warn!(
                request_id = %r.request_id,
                method = %r.method,
                path = %r.path,
                client_ip = %r.client_ip,
                user_agent = %r.user_agent,
                status = r.status,
                duration_ms,
                "HTTP request completed with error"
            );
        } else {
            info!(
                request_id = %r.request_id,
                method = %r.method,
                path = %r.path,
                client_ip = %r.client_ip,
                user_agent = %r.user_agent,
                status = r.status,
                duration_ms,
                "HTTP request completed"
            );
        }
        if let Some(query) = &r.query {
            debug!(
                request_id = %r.request_id,
                method = %r.method,
                path = %r.path,
                query = %query,
                status = r.status,
                "HTTP request query parameters"
            );
        }
    }

    fn query_completed(&self, r: &QueryRecord) {
        let params = r
            .params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(" ");
        let duration_ms = millis(r.duration);
        match &r.outcome {
            QueryOutcome::Served(count) => info!(
                operation = r.operation,
                params = %params,
                results_count = count,
                duration_ms,
                "catalog query served"
            ),
            QueryOutcome::Rejected(reason) => warn!(
                operation = r.operation,
                params = %params,
                reason = %reason,
                duration_ms,
                "catalog query rejected"
            ),
        }
    }
}
