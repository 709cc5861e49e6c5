//! Post submission: form validation and upload storage.

use std::path::{Path, PathBuf};

use axum::extract::multipart::Field;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::attachment::extension;
use crate::error::{BoardError, Result};
use crate::post::{MESSAGE_MAX_CHARS, Post, TITLE_MAX_CHARS};

/// Extension given to uploads whose name has no usable extension.
const FALLBACK_EXTENSION: &str = "tmp";

/// Raw form fields of a submission.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub parent_id: Option<String>,
    pub title: String,
    pub message: String,
    /// Stored upload filename, set once the file has been written.
    pub file: Option<String>,
}

impl Submission {
    /// Validate the form and turn it into a post.
    ///
    /// Replies drop their title; root posts require one.
    pub fn into_post(self, id: String, timestamp: u64) -> Result<Post> {
        if self.message.trim().is_empty() {
            return Err(BoardError::BadRequest("message is required".to_string()));
        }
        if self.message.chars().count() > MESSAGE_MAX_CHARS {
            return Err(BoardError::BadRequest(format!(
                "message must be at most {MESSAGE_MAX_CHARS} characters"
            )));
        }

        let parent_id = self.parent_id.filter(|id| !id.trim().is_empty());

        let title = if parent_id.is_some() {
            None
        } else {
            if self.title.trim().is_empty() {
                return Err(BoardError::BadRequest("title is required".to_string()));
            }
            if self.title.chars().count() > TITLE_MAX_CHARS {
                return Err(BoardError::BadRequest(format!(
                    "title must be at most {TITLE_MAX_CHARS} characters"
                )));
            }
            Some(self.title)
        };

        Ok(Post {
            id,
            parent_id,
            title,
            message: self.message,
            file: self.file,
            timestamp,
        })
    }
}

/// Name an upload is stored under: a fresh UUID plus the original extension.
///
/// Extensions that are empty or contain anything but ASCII alphanumerics are
/// replaced, so the stored name never escapes the upload directory.
pub fn stored_name(original: &str) -> String {
    let ext = extension(original);
    let ext = if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        ext
    } else {
        FALLBACK_EXTENSION
    };
    format!("{}.{ext}", Uuid::new_v4())
}

/// Stream a multipart file field into `dir`, returning the stored filename.
pub async fn save_upload(dir: &Path, original: &str, mut field: Field<'_>) -> Result<String> {
    let name = stored_name(original);
    let path = dir.join(&name);

    let mut file = tokio::fs::File::create(&path).await?;
    let mut written = 0usize;
    while let Some(chunk) = field.chunk().await? {
        file.write_all(&chunk).await?;
        written += chunk.len();
    }
    file.flush().await?;

    tracing::debug!(name = %name, original = %original, bytes = written, "stored upload");
    Ok(name)
}

/// Remove an upload left behind by a rejected submission.
pub async fn discard_upload(dir: &Path, name: &str) {
    let path: PathBuf = dir.join(name);
    if let Err(e) = tokio::fs::remove_file(&path).await {
        tracing::warn!(path = %path.display(), error = %e, "failed to remove discarded upload");
    }
}

/// Seconds since the Unix epoch.
pub fn unix_now() -> u64 {
    chrono::Utc::now().timestamp().max(0) as u64
}
