//! Flashcard generation endpoint.

use axum::{Json, extract::rejection::JsonRejection};
use memorize::{Flashcard, RandomChooser, flashcards_from_text};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ServerError};

/// Error message for a generate request without text.
pub const NO_TEXT_PROVIDED: &str = "No text provided";

/// Request body for flashcard generation.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Source text. A missing or `null` field is treated as empty.
    #[serde(default)]
    pub text: Option<String>,
}

/// Generated flashcards.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Cards in summary order; may be empty.
    pub flashcards: Vec<Flashcard>,
}

/// POST /api/generate-flashcards
pub async fn generate_flashcards_handler(
    payload: std::result::Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>> {
    let Json(request) = payload?;
    let text = request.text.unwrap_or_default();
    if text.is_empty() {
        return Err(ServerError::BadRequest(NO_TEXT_PROVIDED.to_string()));
    }

    let flashcards = flashcards_from_text(&text, &mut RandomChooser::new());
    debug!(
        text_len = text.len(),
        cards = flashcards.len(),
        "Generated flashcards"
    );

    Ok(Json(GenerateResponse { flashcards }))
}
