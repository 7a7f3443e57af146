//! SQLite persistence for memorize flashcard decks.
//!
//! Decks live in a single flat `decks` table. Each row holds the deck name,
//! its cards serialized as JSON, and the time it was saved. Decks are created
//! and deleted but never modified in place.
//!
//! # Example
//!
//! ```no_run
//! use memorize::{Flashcard, NewDeck};
//! use memorize_store::DeckStore;
//!
//! # fn main() -> memorize_store::Result<()> {
//! let store = DeckStore::open("memorize.db")?;
//! store.save(&NewDeck::new(
//!     "Chemistry",
//!     vec![Flashcard::new("What is a catalyst?", "A catalyst is a substance that speeds up reactions.")],
//! ))?;
//!
//! for deck in store.list()? {
//!     println!("{} ({} cards, saved {})", deck.name, deck.cards.len(), deck.created_at);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod schema;
mod store;

pub use error::{Error, Result};
pub use store::DeckStore;
