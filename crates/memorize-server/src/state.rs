//! Application state shared across handlers.

use std::sync::Arc;

use memorize_store::DeckStore;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Saved decks.
    pub store: Arc<DeckStore>,
}

impl AppState {
    /// Create application state over a deck store.
    pub fn new(store: DeckStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
