use std::sync::Arc;

use tokio::sync::Mutex;
use watchlist_store::JsonStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: JsonStore,
    /// Held across every load-mutate-save sequence so two requests cannot
    /// both advance from the same snapshot.
    pub write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: JsonStore) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}
