//! Saved deck operations.
//!
//! # Example
//!
//! ```no_run
//! use memorize::{Flashcard, NewDeck};
//! use memorize_client::MemorizeClient;
//!
//! # async fn example() -> memorize_client::Result<()> {
//! let client = MemorizeClient::new();
//!
//! let deck = client
//!     .decks()
//!     .save(&NewDeck::new(
//!         "Bio 101",
//!         vec![Flashcard::new("What is osmosis?", "Osmosis is diffusion of water.")],
//!     ))
//!     .await?;
//!
//! for deck in client.decks().list().await? {
//!     println!("{}: {} cards", deck.name, deck.cards.len());
//! }
//!
//! client.decks().delete(deck.id).await?;
//! # Ok(())
//! # }
//! ```

use memorize::{Deck, NewDeck};
use serde::Deserialize;

use crate::client::MemorizeClient;
use crate::error::Result;

/// Provides access to saved deck operations.
///
/// Obtained via [`MemorizeClient::decks()`].
#[derive(Debug)]
pub struct DeckActions<'a> {
    pub(crate) client: &'a MemorizeClient,
}

#[derive(Deserialize)]
struct DeleteResult {
    success: bool,
}

impl<'a> DeckActions<'a> {
    /// All saved decks, newest first.
    pub async fn list(&self) -> Result<Vec<Deck>> {
        self.client.send(self.client.get("/api/decks")).await
    }

    /// Save a deck and return it with its id and timestamp.
    pub async fn save(&self, deck: &NewDeck) -> Result<Deck> {
        self.client
            .send(self.client.post("/api/decks").json(deck))
            .await
    }

    /// Delete a deck by id.
    ///
    /// Succeeds whether or not the deck existed.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result: DeleteResult = self
            .client
            .send(self.client.delete(&format!("/api/decks/{}", id)))
            .await?;
        Ok(result.success)
    }
}
