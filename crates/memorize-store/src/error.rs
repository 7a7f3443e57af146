//! Error types for memorize-store.

use thiserror::Error;

/// Result type for deck store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing decks.
#[derive(Debug, Error)]
pub enum Error {
    /// SQLite error.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Stored cards could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error while preparing the database location.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored timestamp could not be parsed.
    #[error("invalid timestamp '{value}' for deck {id}")]
    Timestamp {
        /// Deck id.
        id: i64,
        /// Raw column value.
        value: String,
    },

    /// The deck to save is missing its name or cards.
    #[error("invalid deck: {0}")]
    Validation(String),

    /// A previous holder of the connection panicked.
    #[error("deck store lock poisoned")]
    Poisoned,
}
