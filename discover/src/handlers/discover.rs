//! Discover page handler
//!
//! Server-side render of the discovery feed.
//! Supports content negotiation: Accept: application/json for JSON, otherwise text/html.

use axum::{
    extract::State,
    http::{header, HeaderMap, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::app::LoadContext;
use crate::error::AppError;
use crate::feed::{render_page, FeedView};
use crate::AppState;

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// GET /discover
///
/// Loads the discovery listing from the local commuter API.
/// - Accept: application/json → the `DiscoveryResponse` as JSON
/// - Otherwise → the rendered HTML page
pub async fn get_discover(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let context = LoadContext::Server { inbound: uri };
    let discovered = state.loader.load(&context).await?;

    if wants_json(&headers) {
        return Ok(Json(discovered).into_response());
    }

    let view = FeedView::from_items(&discovered.results, Utc::now());
    Ok(Html(render_page(&view)).into_response())
}
