//! HTTP surface for the matchup service.
//!
//! This module provides:
//! - Router: `/api` (and anything below it) goes to the recommendation handler,
//!   every other path is served from the static asset directory
//! - Shared read-only state
//! - Error-to-response mapping

pub mod assets;
pub mod recommend;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use matchup_rust_core::{MatchupError, TeamCatalog};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tower_http::trace::TraceLayer;

/// State shared by every request. The catalog is never mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<TeamCatalog>,
}

impl AppState {
    pub fn new(catalog: TeamCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

/// Build the full application router.
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let router = Router::new()
        .route("/api", any(recommend::handle_api))
        .route("/api/", any(recommend::handle_api))
        .route("/api/*rest", any(recommend::handle_api));

    assets::with_static_assets(router, static_dir.as_ref())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Errors
// ============================================================================

/// Request-terminating failures. Each maps to a plain-text response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Expected application/json")]
    UnsupportedContentType,

    #[error(transparent)]
    Matchup(#[from] MatchupError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::UnsupportedContentType => StatusCode::BAD_REQUEST,
            ApiError::Matchup(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::Matchup(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
