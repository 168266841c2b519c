//! Recommendation endpoint.
//!
//! Check order: CORS preflight, method, content type, JSON body, field
//! validation, opponent lookup.

use super::{ApiError, AppState};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use matchup_rust_core::{recommend, RecommendationRequest};
use tracing::{info, warn};

const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";

/// Handles every method under `/api`.
pub async fn handle_api(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    if method == Method::OPTIONS {
        return Ok(preflight());
    }

    let recommendation = process(&state, &method, &headers, &body).inspect_err(|e| {
        warn!("Rejected {} request ({}): {}", method, e.status_code(), e);
    })?;

    info!(
        "Recommended for {}: best={:?} close={:?}",
        recommendation.opponent,
        recommendation
            .best_available
            .iter()
            .map(|e| e.team.as_str())
            .collect::<Vec<_>>(),
        recommendation
            .close_matchups
            .iter()
            .map(|e| e.team.as_str())
            .collect::<Vec<_>>()
    );

    Ok((
        StatusCode::OK,
        [(ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(recommendation),
    )
        .into_response())
}

fn process(
    state: &AppState,
    method: &Method,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<matchup_rust_core::Recommendation, ApiError> {
    if *method != Method::POST {
        return Err(ApiError::MethodNotAllowed);
    }

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if !content_type.contains("application/json") {
        return Err(ApiError::UnsupportedContentType);
    }

    let request = RecommendationRequest::from_slice(body)?;
    Ok(recommend(
        &state.catalog,
        &request.opponent,
        &request.banned_teams,
    )?)
}

/// CORS preflight: empty 200 allowing cross-origin JSON posts.
fn preflight() -> Response {
    (
        StatusCode::OK,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
            (ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
        ],
    )
        .into_response()
}
