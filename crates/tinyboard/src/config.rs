//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use anyhow::bail;

use crate::attachment::DEFAULT_UPLOAD_URL_PREFIX;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Directory of the sled post database.
    pub db_path: PathBuf,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Directory uploads are written to.
    pub upload_dir: PathBuf,

    /// URL prefix uploads are served from.
    pub upload_url_prefix: String,

    /// Site name shown in page titles and the footer.
    pub site_name: String,

    /// Threads per board index page.
    pub posts_per_page: usize,

    /// Maximum accepted request body for submissions, in bytes.
    pub max_upload_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `BOARD_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `BOARD_DB_PATH`: sled database directory (default: "my_db")
    /// - `BOARD_STATIC_DIR`: Static file root (default: "./static")
    /// - `UPLOAD_DIR`: Upload directory (default: "<static dir>/uploads")
    /// - `BOARD_UPLOAD_URL_PREFIX`: Upload URL prefix (default: "/static/uploads")
    /// - `BOARD_SITE_NAME`: Site name (default: "tinyboard")
    /// - `BOARD_POSTS_PER_PAGE`: Threads per index page (default: 30)
    /// - `BOARD_MAX_UPLOAD_BYTES`: Submission body limit (default: 10 MiB)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("BOARD_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let db_path = PathBuf::from(
            std::env::var("BOARD_DB_PATH").unwrap_or_else(|_| "my_db".to_string()),
        );

        let static_dir = PathBuf::from(
            std::env::var("BOARD_STATIC_DIR").unwrap_or_else(|_| "./static".to_string()),
        );

        let upload_dir = std::env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| static_dir.join("uploads"));

        let upload_url_prefix = std::env::var("BOARD_UPLOAD_URL_PREFIX")
            .unwrap_or_else(|_| DEFAULT_UPLOAD_URL_PREFIX.to_string())
            .trim_end_matches('/')
            .to_string();

        let site_name =
            std::env::var("BOARD_SITE_NAME").unwrap_or_else(|_| "tinyboard".to_string());

        let posts_per_page = parse_var("BOARD_POSTS_PER_PAGE", 30)?;
        if posts_per_page == 0 {
            bail!("BOARD_POSTS_PER_PAGE must be greater than zero");
        }

        let max_upload_bytes = parse_var("BOARD_MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?;

        tracing::info!(
            bind_addr = %bind_addr,
            db_path = %db_path.display(),
            static_dir = %static_dir.display(),
            upload_dir = %upload_dir.display(),
            upload_url_prefix = %upload_url_prefix,
            site_name = %site_name,
            posts_per_page,
            max_upload_bytes,
            "board configuration loaded"
        );

        Ok(Self {
            bind_addr,
            db_path,
            static_dir,
            upload_dir,
            upload_url_prefix,
            site_name,
            posts_per_page,
            max_upload_bytes,
        })
    }
}

fn parse_var(key: &str, default: usize) -> anyhow::Result<usize> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid {key} {raw:?}: {e}")),
        Err(_) => Ok(default),
    }
}
