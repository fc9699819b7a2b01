//! API server state

use std::sync::Arc;

use crate::catalog::Catalog;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Read-only catalog shared by every request
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Create state owning a freshly built catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Create state around an already shared catalog
    pub fn from_shared(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}
