//! Shared application state handed to every handler.

use crate::observer::RequestObserver;
use shopfront::CatalogStore;
use std::sync::Arc;

/// Read-only catalog plus the injected observer. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CatalogStore>,
    pub observer: Arc<dyn RequestObserver>,
}

impl AppState {
    pub fn new(store: CatalogStore, observer: Arc<dyn RequestObserver>) -> Self {
        Self {
            store: Arc::new(store),
            observer,
        }
    }
}
