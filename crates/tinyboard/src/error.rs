//! Error types for the board service.
//!
//! Errors are rendered as simple HTML error pages rather than JSON,
//! since this is a user-facing HTML service.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, html};

/// Result alias for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;

/// Board service error type.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// The submitted form was rejected.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The requested post does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),

    /// sled storage error.
    #[error("storage error: {0}")]
    Storage(#[from] sled::Error),

    /// Post record could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Upload could not be written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed multipart body.
    #[error("multipart error: {0}")]
    Multipart(#[from] MultipartError),
}

impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad Request", msg.clone()),
            Self::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                "Not Found",
                format!("The requested post was not found: {msg}"),
            ),
            Self::Multipart(err) => (
                err.status(),
                "Bad Request",
                "The submitted form could not be read.".to_string(),
            ),
            Self::Internal(_) | Self::Storage(_) | Self::Serialization(_) | Self::Io(_) => {
                tracing::error!(error = %self, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error",
                    "An internal error occurred. Please try again later.".to_string(),
                )
            }
        };

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    style { (maud::PreEscaped(crate::render::components::ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                        a href="/" { "Back to Main Board" }
                    }
                }
            }
        };

        (status, markup).into_response()
    }
}
