//! Async Rust client for the memorize flashcard API.
//!
//! # Quick Start
//!
//! ```no_run
//! use memorize::NewDeck;
//! use memorize_client::MemorizeClient;
//!
//! # async fn example() -> memorize_client::Result<()> {
//! let client = MemorizeClient::builder()
//!     .url("http://127.0.0.1:5000")
//!     .build();
//!
//! let cards = client
//!     .flashcards()
//!     .generate("Mitochondria are the powerhouse of every living cell.")
//!     .await?;
//!
//! let deck = client.decks().save(&NewDeck::new("Cells", cards)).await?;
//! println!("Saved deck {} at {}", deck.id, deck.created_at);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod actions;
mod client;
mod error;

pub use client::{ClientBuilder, MemorizeClient};
pub use error::{Error, Result};
pub use memorize::{Deck, Flashcard, NewDeck};
