//! Deck endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use memorize::{Deck, NewDeck};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ServerError};
use crate::state::AppState;

/// Error message for a save request without a name or cards.
pub const NAME_AND_CARDS_REQUIRED: &str = "Name and cards are required";

/// Acknowledgement of a delete.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Always true; deleting a missing deck is not an error.
    pub success: bool,
}

/// GET /api/decks
pub async fn list_decks_handler(State(state): State<AppState>) -> Result<Json<Vec<Deck>>> {
    let decks = state.store.list()?;
    debug!(count = decks.len(), "Listed decks");
    Ok(Json(decks))
}

/// POST /api/decks
pub async fn save_deck_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewDeck>, JsonRejection>,
) -> Result<Json<Deck>> {
    let Json(deck) = payload?;
    if !deck.is_complete() {
        return Err(ServerError::BadRequest(NAME_AND_CARDS_REQUIRED.to_string()));
    }

    Ok(Json(state.store.save(&deck)?))
}

/// DELETE /api/decks/{id}
pub async fn delete_deck_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>> {
    state.store.delete(id)?;
    Ok(Json(DeleteResponse { success: true }))
}
