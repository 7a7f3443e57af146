//! The memorize client and builder.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::actions::{DeckActions, FlashcardActions};
use crate::error::{Error, Result};

/// Default URL for the memorize server.
const DEFAULT_URL: &str = "http://127.0.0.1:5000";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for a memorize server.
///
/// # Example
///
/// ```no_run
/// use memorize_client::MemorizeClient;
///
/// # async fn example() -> memorize_client::Result<()> {
/// let client = MemorizeClient::new();
///
/// let cards = client
///     .flashcards()
///     .generate("Osmosis is the movement of water across a membrane. It needs no energy.")
///     .await?;
/// println!("Generated {} cards", cards.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MemorizeClient {
    http_client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl MemorizeClient {
    /// Create a new client with default settings.
    ///
    /// Connects to `http://127.0.0.1:5000` with a 30 second timeout.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Access flashcard generation.
    pub fn flashcards(&self) -> FlashcardActions<'_> {
        FlashcardActions { client: self }
    }

    /// Access deck operations.
    pub fn decks(&self) -> DeckActions<'_> {
        DeckActions { client: self }
    }

    /// The server's base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http_client.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http_client.post(self.url(path))
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.http_client.delete(self.url(path))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Send a request and decode a JSON success body.
    pub(crate) async fn send<R>(&self, request: RequestBuilder) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                Error::ConnectionRefused
            } else {
                Error::Http(e)
            }
        })?;

        let response = Self::check_status(response).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await?;
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.error,
            Err(_) => body,
        };
        debug!(status = status.as_u16(), message = %message, "API error");

        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }
}

impl Default for MemorizeClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating a customized [`MemorizeClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use memorize_client::MemorizeClient;
///
/// let client = MemorizeClient::builder()
///     .url("http://study.local:8080")
///     .timeout(Duration::from_secs(60))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the server URL.
    ///
    /// Defaults to `http://127.0.0.1:5000`.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Build the client.
    pub fn build(self) -> MemorizeClient {
        let http_client = Client::builder()
            .timeout(self.timeout)
            .build()
            .expect("Failed to build HTTP client");

        MemorizeClient {
            http_client,
            base_url: self.base_url,
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
