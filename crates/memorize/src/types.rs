//! Flashcard and deck types shared by the pipeline, the store and the HTTP API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A generated question paired with the sentence that answers it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Question synthesized from a template and one or two keywords.
    pub question: String,
    /// Source sentence, verbatim.
    pub answer: String,
}

impl Flashcard {
    /// Create a flashcard.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A named, persisted collection of flashcards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Identifier assigned by the store.
    pub id: i64,
    /// Deck name.
    pub name: String,
    /// Cards in the order they were saved.
    pub cards: Vec<Flashcard>,
    /// When the deck was saved.
    pub created_at: DateTime<Utc>,
}

/// Payload for saving a new deck.
///
/// Missing or `null` fields deserialize as empty so that validation can
/// report them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDeck {
    /// Deck name; must not be empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Cards to save; must not be empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cards: Vec<Flashcard>,
}

impl NewDeck {
    /// Create a save payload.
    pub fn new(name: impl Into<String>, cards: Vec<Flashcard>) -> Self {
        Self {
            name: name.into(),
            cards,
        }
    }

    /// Whether both a name and at least one card are present.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.cards.is_empty()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
