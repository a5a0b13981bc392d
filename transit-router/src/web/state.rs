//! Application state for the web layer.

use std::sync::Arc;

use crate::catalogue::TransportCatalogue;
use crate::router::TransportRouter;

/// Shared application state.
///
/// Both parts are immutable after startup, so handlers only ever read them.
#[derive(Clone)]
pub struct AppState {
    pub catalogue: Arc<TransportCatalogue>,
    pub router: Arc<TransportRouter>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalogue: TransportCatalogue, router: TransportRouter) -> Self {
        Self {
            catalogue: Arc::new(catalogue),
            router: Arc::new(router),
        }
    }
}
