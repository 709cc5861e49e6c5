//! Submission handler for new threads and replies.

use axum::extract::{Multipart, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use crate::error::{BoardError, Result};
use crate::state::AppState;
use crate::submit::{Submission, discard_upload, save_upload, unix_now};

/// Handle `POST /submit`.
///
/// Redirects to the thread for replies and to the board index for new
/// threads. A stored upload is removed again if the submission is rejected.
pub async fn submit_post(State(state): State<AppState>, multipart: Multipart) -> Response {
    let mut submission = Submission::default();

    let result = match read_form(&state, multipart, &mut submission).await {
        Ok(()) => store_submission(&state, submission.clone()).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(location) => redirect(&location),
        Err(e) => {
            if let Some(name) = &submission.file {
                discard_upload(&state.config.upload_dir, name).await;
            }
            e.into_response()
        }
    }
}

/// Read multipart fields into `submission`, storing any upload on the way.
async fn read_form(
    state: &AppState,
    mut multipart: Multipart,
    submission: &mut Submission,
) -> Result<()> {
    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "title" => submission.title = field.text().await?,
            "message" => submission.message = field.text().await?,
            "parent_id" => submission.parent_id = Some(field.text().await?),
            "file" => {
                let original = field.file_name().unwrap_or_default().to_string();
                if original.is_empty() || submission.file.is_some() {
                    continue;
                }
                let stored = save_upload(&state.config.upload_dir, &original, field).await?;
                submission.file = Some(stored);
            }
            _ => {}
        }
    }
    Ok(())
}

/// Validate and persist a submission, returning the redirect target.
async fn store_submission(state: &AppState, submission: Submission) -> Result<String> {
    let mut post = submission.into_post(Uuid::new_v4().to_string(), unix_now())?;

    // Threads are one level deep: a reply to a reply joins the parent's thread.
    if let Some(parent_id) = &post.parent_id {
        let Some(parent) = state.store.get(parent_id)? else {
            return Err(BoardError::NotFound(format!("post {parent_id}")));
        };
        if let Some(thread_id) = parent.parent_id {
            tracing::debug!(parent_id = %parent_id, thread_id = %thread_id, "reply re-targeted to thread");
            post.parent_id = Some(thread_id);
        }
    }

    state.store.insert(&post)?;

    tracing::info!(
        id = %post.id,
        parent_id = post.parent_id.as_deref().unwrap_or(""),
        file = post.file.as_deref().unwrap_or(""),
        "post created"
    );

    match post.parent_id {
        Some(parent_id) => {
            state.cache.invalidate(&parent_id).await;
            Ok(format!("/post/{parent_id}"))
        }
        None => Ok("/".to_string()),
    }
}

fn redirect(location: &str) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => (StatusCode::SEE_OTHER, [(header::LOCATION, value)]).into_response(),
        Err(e) => BoardError::Internal(anyhow::anyhow!("invalid redirect target: {e}")).into_response(),
    }
}
