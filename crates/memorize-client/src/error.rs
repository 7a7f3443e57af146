//! Error types for the memorize client.
//!
//! # Example
//!
//! ```no_run
//! use memorize_client::{Error, MemorizeClient};
//!
//! # async fn example() {
//! let client = MemorizeClient::new();
//!
//! match client.flashcards().generate("").await {
//!     Ok(cards) => println!("Generated {} cards", cards.len()),
//!     Err(Error::ConnectionRefused) => eprintln!("Is memorize-server running?"),
//!     Err(Error::Api { status: 400, message }) => eprintln!("Rejected: {}", message),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # }
//! ```

use thiserror::Error;

/// The error type for memorize API calls.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP/network error from reqwest.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection refused; the server is likely not running.
    #[error("Could not connect to the memorize server. Is it running?")]
    ConnectionRefused,

    /// The server answered with an error status.
    ///
    /// `message` is the server's `error` field when present, otherwise the
    /// raw response body.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the server.
        message: String,
    },

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the server rejected the request as invalid.
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Error::Api { status: 400, .. })
    }
}

/// A specialized Result type for memorize API calls.
pub type Result<T> = std::result::Result<T, Error>;
