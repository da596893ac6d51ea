use std::sync::Arc;

use crate::store::EventStore;

/// Shared application state.
///
/// The event store is built once at startup and injected here; handlers
/// never reach for a process-wide global.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EventStore>,
}

impl AppState {
    pub fn new(store: Arc<EventStore>) -> Self {
        AppState { store }
    }
}
