//! Application state shared across all request handlers.

use std::sync::Arc;

use moka::future::Cache;

use crate::config::Config;
use crate::render::RenderContext;
use crate::store::PostStore;

/// Cached HTML response with metadata.
#[derive(Clone, Debug)]
pub struct CachedHtml {
    /// Rendered HTML string.
    pub html: String,
    /// When this entry was cached.
    pub cached_at: chrono::DateTime<chrono::Utc>,
}

/// Type alias for the thread page cache, keyed by root post id.
pub type HtmlCache = Cache<String, CachedHtml>;

/// Thread page cache capacity (number of entries).
const THREAD_CACHE_CAPACITY: u64 = 10_000;

/// Thread page cache TTL. Entries are also evicted when a thread gets a reply.
const THREAD_CACHE_TTL: std::time::Duration = std::time::Duration::from_secs(300);

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Post storage.
    pub store: PostStore,

    /// Application configuration.
    pub config: Arc<Config>,

    /// Rendered thread pages keyed by root post id.
    pub cache: HtmlCache,
}

impl AppState {
    /// Create application state, opening the store at `config.db_path`.
    pub fn new(config: Config) -> crate::error::Result<Self> {
        let store = PostStore::open(&config.db_path)?;
        Ok(Self::with_store(config, store))
    }

    /// Create application state around an already opened store.
    pub fn with_store(config: Config, store: PostStore) -> Self {
        let cache = Cache::builder()
            .max_capacity(THREAD_CACHE_CAPACITY)
            .time_to_live(THREAD_CACHE_TTL)
            .build();

        tracing::info!(
            cache_capacity = THREAD_CACHE_CAPACITY,
            cache_ttl_secs = THREAD_CACHE_TTL.as_secs(),
            "application state initialized"
        );

        Self {
            store,
            config: Arc::new(config),
            cache,
        }
    }

    /// Rendering context derived from the configuration.
    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext {
            site_name: &self.config.site_name,
            upload_prefix: &self.config.upload_url_prefix,
        }
    }
}
