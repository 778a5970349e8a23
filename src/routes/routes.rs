//! Defines routes for the word service.
//!
//! ## Structure
//! - `GET  /`          — bundled entry page
//! - `GET  /static/*`  — files from the configured static directory
//! - `POST /submit`    — store a word as `<word>.txt`
//! - `GET  /words`     — list stored words
//! - `GET  /healthz`, `GET /readyz` — probes

use crate::{
    handlers::{
        health_handlers::{healthz, readyz},
        page_handlers::index,
        word_handlers::{list_words, submit_word},
    },
    services::word_service::WordService,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Build and return the router for every endpoint.
///
/// The router carries the shared `WordService` to all handlers.
pub fn routes(static_dir: impl AsRef<Path>) -> Router<WordService> {
    Router::new()
        // health endpoints (mounted at root)
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/", get(index))
        .route("/submit", post(submit_word))
        .route("/words", get(list_words))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
}
