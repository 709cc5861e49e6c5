//! Board index page.

use axum::extract::{Query, State};
use axum::response::Response;
use serde::Deserialize;

use super::html_response;
use crate::error::BoardError;
use crate::render::{PageLinks, render_board};
use crate::state::AppState;
use crate::view::PostView;

/// Query parameters for the board index.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    page: Option<usize>,
}

/// Render one page of threads, most recently bumped first.
pub async fn board_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, BoardError> {
    let page = query.page.unwrap_or(0);
    let roots = state.store.roots_page(page, state.config.posts_per_page)?;

    tracing::debug!(page, threads = roots.posts.len(), "rendering board index");

    let links = PageLinks {
        prev: roots.has_prev.then(|| page - 1),
        next: roots.has_next.then(|| page + 1),
    };
    let threads = roots.posts.into_iter().map(PostView::root);
    let markup = render_board(threads, links, &state.render_context());

    Ok(html_response(markup.into_string()))
}
