//! HTTP API for memorize.
//!
//! Exposes the flashcard pipeline and the deck store over JSON:
//!
//! | Method | Path | Purpose |
//! |---|---|---|
//! | `POST` | `/api/generate-flashcards` | Generate cards from `{"text": ...}` |
//! | `GET` | `/api/decks` | List saved decks, newest first |
//! | `POST` | `/api/decks` | Save `{"name": ..., "cards": [...]}` |
//! | `DELETE` | `/api/decks/{id}` | Delete a deck |
//! | `GET` | `/health` | Liveness and version |
//!
//! Errors are returned as `{"error": message}`. Any other path can be served
//! from a static asset directory.
//!
//! # Example
//!
//! ```no_run
//! use memorize_server::Server;
//! use memorize_store::DeckStore;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let store = DeckStore::open("memorize.db")?;
//! Server::new(store)
//!     .with_static_dir("static")
//!     .run("127.0.0.1:5000".parse()?)
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ErrorResponse, Result, ServerError};
pub use state::AppState;

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use memorize_store::DeckStore;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

/// The memorize HTTP server.
#[derive(Debug, Clone)]
pub struct Server {
    state: AppState,
    static_dir: Option<PathBuf>,
}

impl Server {
    /// Create a server over a deck store.
    pub fn new(store: DeckStore) -> Self {
        Self::from_state(AppState::new(store))
    }

    /// Create a server from a pre-built application state.
    pub fn from_state(state: AppState) -> Self {
        Self {
            state,
            static_dir: None,
        }
    }

    /// Serve files from `dir` for any path the API does not handle.
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Build the router with all routes and middleware.
    pub fn router(&self) -> Router {
        let router = Router::new()
            .merge(routes::health_routes())
            .nest("/api", api_routes());

        let router = match &self.static_dir {
            Some(dir) => router.fallback_service(ServeDir::new(dir)),
            None => router,
        };

        router
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Bind to `addr` and serve until interrupted.
    pub async fn run(self, addr: SocketAddr) -> Result<()> {
        let router = self.router();
        let listener = TcpListener::bind(addr).await?;

        info!(
            addr = %listener.local_addr()?,
            static_dir = ?self.static_dir,
            "memorize server listening"
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("memorize server stopped");
        Ok(())
    }
}

fn api_routes() -> Router<AppState> {
    use axum::routing::{delete, get, post};

    Router::new()
        .route(
            "/generate-flashcards",
            post(routes::generate_flashcards_handler),
        )
        .route(
            "/decks",
            get(routes::list_decks_handler).post(routes::save_deck_handler),
        )
        .route("/decks/{id}", delete(routes::delete_deck_handler))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn test_server() -> Server {
        Server::new(DeckStore::open_in_memory().unwrap())
    }

    #[tokio::test]
    async fn test_server_health_endpoint() {
        let response = test_server()
            .router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_path_without_static_dir() {
        let response = test_server()
            .router()
            .oneshot(
                Request::builder()
                    .uri("/index.html")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_wrong_method_is_rejected() {
        let response = test_server()
            .router()
            .oneshot(
                Request::builder()
                    .uri("/api/generate-flashcards")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
