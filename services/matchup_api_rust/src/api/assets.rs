//! Static frontend assets.

use super::{recommend, AppState};
use axum::extract::{Request, State};
use axum::handler::{Handler, HandlerWithoutStateExt};
use axum::response::IntoResponse;
use axum::Router;
use std::path::Path;
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tracing::debug;

pub const ASSET_NOT_FOUND: &str = "Error fetching asset";

/// Any path starting with this goes to the API handler, even without a `/`.
pub const API_PREFIX: &str = "/api";

/// Serve `static_dir` for every route not otherwise matched.
///
/// Unmatched paths still starting with [`API_PREFIX`] (e.g. `/apix`) are
/// handed to the API handler. Missing files and non-GET/HEAD methods answer
/// 404 with a plain-text body.
pub fn with_static_assets(router: Router<AppState>, static_dir: &Path) -> Router<AppState> {
    debug!("Serving static assets from {}", static_dir.display());
    let assets = ServeDir::new(static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(asset_not_found.into_service());

    router.fallback(move |State(state): State<AppState>, request: Request| {
        let assets = assets.clone();
        async move {
            if request.uri().path().starts_with(API_PREFIX) {
                return recommend::handle_api.call(request, state).await;
            }
            match assets.oneshot(request).await {
                Ok(response) => response.into_response(),
                Err(never) => match never {},
            }
        }
    })
}

async fn asset_not_found() -> &'static str {
    ASSET_NOT_FOUND
}
