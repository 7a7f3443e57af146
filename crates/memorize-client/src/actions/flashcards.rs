//! Flashcard generation.

use memorize::Flashcard;
use serde::{Deserialize, Serialize};

use crate::client::MemorizeClient;
use crate::error::Result;

/// Provides access to flashcard generation.
///
/// Obtained via [`MemorizeClient::flashcards()`].
#[derive(Debug)]
pub struct FlashcardActions<'a> {
    pub(crate) client: &'a MemorizeClient,
}

#[derive(Serialize)]
struct GenerateParams<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResult {
    flashcards: Vec<Flashcard>,
}

impl<'a> FlashcardActions<'a> {
    /// Generate flashcards from `text`.
    ///
    /// The server rejects empty text with a 400 [`Error::Api`](crate::Error::Api).
    /// Text too short to yield any question returns an empty list.
    pub async fn generate(&self, text: &str) -> Result<Vec<Flashcard>> {
        let request = self
            .client
            .post("/api/generate-flashcards")
            .json(&GenerateParams { text });
        let result: GenerateResult = self.client.send(request).await?;
        Ok(result.flashcards)
    }
}
