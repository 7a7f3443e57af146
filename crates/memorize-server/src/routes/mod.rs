//! HTTP route handlers.

mod decks;
mod flashcards;
mod health;

pub use decks::{
    DeleteResponse, NAME_AND_CARDS_REQUIRED, delete_deck_handler, list_decks_handler,
    save_deck_handler,
};
pub use flashcards::{
    GenerateRequest, GenerateResponse, NO_TEXT_PROVIDED, generate_flashcards_handler,
};
pub use health::{HealthResponse, health, health_routes};
