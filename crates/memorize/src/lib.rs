//! Extractive flashcard generation from plain text.
//!
//! The pipeline has two stages:
//!
//! 1. [`summarize`] splits text into sentences and keeps the most
//!    representative ones, scored by word frequency.
//! 2. [`generate`] turns each kept sentence into a question/answer
//!    [`Flashcard`], asking a question chosen from a template pool and
//!    using the sentence itself as the answer.
//!
//! Randomness (which keyword, which template) goes through a [`Chooser`], so
//! callers can make generation reproducible.
//!
//! # Quick Start
//!
//! ```
//! use memorize::{RandomChooser, flashcards_from_text};
//!
//! let text = "Photosynthesis is the process plants use to convert light into energy. \
//!             It requires chlorophyll. \
//!             This happens in the chloroplasts of plant cells.";
//!
//! let cards = flashcards_from_text(text, &mut RandomChooser::new());
//! assert_eq!(cards.len(), 2);
//! for card in &cards {
//!     println!("Q: {}\nA: {}", card.question, card.answer);
//! }
//! ```
//!
//! # Deterministic output
//!
//! ```
//! use memorize::{ScriptedChooser, generate, summarize};
//!
//! let sentences = summarize("Mitochondria are the powerhouse of every living cell.");
//! let cards = generate(&sentences, &mut ScriptedChooser::always(1));
//! assert_eq!(cards[0].question, "What is powerhouse?");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chooser;
pub mod classify;
pub mod generate;
pub mod keywords;
pub mod summarize;
pub mod templates;
mod types;

pub use chooser::{Chooser, RandomChooser, ScriptedChooser};
pub use classify::{Category, classify};
pub use generate::{MAX_CARDS, MIN_WORDS, generate};
pub use summarize::summarize;
pub use types::{Deck, Flashcard, NewDeck};

/// Summarize `text` and generate flashcards from the summary.
pub fn flashcards_from_text<C: Chooser + ?Sized>(text: &str, chooser: &mut C) -> Vec<Flashcard> {
    generate(&summarize(text), chooser)
}
