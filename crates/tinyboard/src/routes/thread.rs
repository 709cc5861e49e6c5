//! Thread page handler.
//!
//! Handles `GET /post/{id}`: loads the thread snapshot, builds view models
//! and renders the page. Rendered pages are cached until the thread changes.

use axum::extract::{Path, State};
use axum::response::Response;

use super::html_response;
use crate::error::BoardError;
use crate::render::render_thread;
use crate::state::{AppState, CachedHtml};
use crate::view::{PostView, reply_views};

/// Render a thread page.
pub async fn thread_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, BoardError> {
    if let Some(cached) = state.cache.get(&id).await {
        let age = chrono::Utc::now() - cached.cached_at;
        tracing::debug!(id = %id, age_secs = age.num_seconds(), "cache hit");
        return Ok(html_response(cached.html));
    }

    tracing::debug!(id = %id, "cache miss, loading thread");

    let thread = state
        .store
        .thread(&id)?
        .ok_or_else(|| BoardError::NotFound(format!("post {id}")))?;

    let root = PostView::root(thread.root);
    let markup = render_thread(&root, reply_views(thread.replies), &state.render_context());
    let html = markup.into_string();

    let cached = CachedHtml {
        html: html.clone(),
        cached_at: chrono::Utc::now(),
    };
    state.cache.insert(id, cached).await;

    Ok(html_response(html))
}
