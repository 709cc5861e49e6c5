//! Route definitions for the board service.
//!
//! ## Routes
//!
//! - `GET /` - Board index (`?page=N`)
//! - `GET /post/{id}` - Thread page
//! - `POST /submit` - New thread or reply (multipart form)
//! - `GET /static/...` - Static files and uploads
//! - `GET /health` - Health check (JSON)

mod board;
mod health;
mod submit;
mod thread;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Build the complete board router.
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(board::board_page))
        .route("/post/{id}", get(thread::thread_page))
        .route(
            "/submit",
            post(submit::submit_post).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/health", get(health::health_check))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Build an HTML response with security headers and an ETag.
fn html_response(html: String) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));

    // ETag (xxHash of content)
    let hash = xxhash_rust::xxh3::xxh3_64(html.as_bytes());
    let etag = format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes()));
    if let Ok(val) = HeaderValue::from_str(&etag) {
        headers.insert(header::ETAG, val);
    }

    (StatusCode::OK, headers, html).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::post::Post;
    use crate::store::PostStore;

    pub(super) fn test_config(static_dir: &std::path::Path) -> Config {
        Config {
            bind_addr: "127.0.0.1:0".to_string(),
            db_path: static_dir.join("db"),
            static_dir: static_dir.to_path_buf(),
            upload_dir: static_dir.join("uploads"),
            upload_url_prefix: "/static/uploads".to_string(),
            site_name: "tinyboard".to_string(),
            posts_per_page: 2,
            max_upload_bytes: 1024 * 1024,
        }
    }

    pub(super) fn test_state(static_dir: &std::path::Path) -> AppState {
        std::fs::create_dir_all(static_dir.join("uploads")).unwrap();
        AppState::with_store(test_config(static_dir), PostStore::temporary().unwrap())
    }

    pub(super) async fn body_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    pub(super) fn root_post(id: &str, title: &str, file: Option<&str>, timestamp: u64) -> Post {
        Post {
            id: id.to_string(),
            parent_id: None,
            title: Some(title.to_string()),
            message: format!("message {id}"),
            file: file.map(str::to_string),
            timestamp,
        }
    }

    #[test]
    fn html_response_headers() {
        let response = html_response("<p>hi</p>".to_string());
        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(
            headers.get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
        assert_eq!(headers.get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
        assert!(headers.get(header::ETAG).is_some());
    }

    #[test]
    fn etag_is_stable() {
        let a = html_response("same".to_string());
        let b = html_response("same".to_string());
        assert_eq!(a.headers().get(header::ETAG), b.headers().get(header::ETAG));
    }

    #[tokio::test]
    async fn serves_uploads_from_static_dir() {
        let tmp = tempfile::TempDir::new().unwrap();
        let state = test_state(tmp.path());
        std::fs::write(tmp.path().join("uploads/pic.png"), b"png bytes").unwrap();

        let response = router(state)
            .oneshot(
                Request::builder()
                    .uri("/static/uploads/pic.png")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "png bytes");
    }
}
