//! Grouped API operations.

mod decks;
mod flashcards;

pub use decks::DeckActions;
pub use flashcards::FlashcardActions;
