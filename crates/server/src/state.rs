use std::sync::Arc;

use catalog::CatalogStore;

/// Shared handler state: the injected store handle, nothing else.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self { Self { store } }
}
