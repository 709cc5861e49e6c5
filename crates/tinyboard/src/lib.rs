//! tinyboard - an anonymous imageboard.
//!
//! Serves a paginated board index, thread pages and a multipart submission
//! endpoint. Posts live in an embedded sled database; uploads are written to
//! disk and served as static files.
//!
//! # Architecture
//!
//! - **Attachment**: Classifies stored filenames into image, video, audio or
//!   generic download by extension
//! - **View**: Builds render-ready post views, numbering replies in thread order
//! - **Render**: Generates HTML with maud (compile-time templates)
//! - **Store**: sled-backed post storage with thread bumping
//! - **Cache**: In-process moka cache of rendered thread pages
//!
//! # Security
//!
//! - All user content (titles, messages, filenames) is HTML-escaped by maud
//! - Stored upload names are generated; only an alphanumeric extension survives
//! - X-Frame-Options: DENY and nosniff on every HTML page

pub mod attachment;
pub mod config;
pub mod error;
pub mod post;
pub mod render;
pub mod routes;
pub mod state;
pub mod store;
pub mod submit;
pub mod view;

pub use attachment::{AttachmentKind, classify};
pub use config::Config;
pub use error::BoardError;
pub use routes::router;
pub use state::AppState;
pub use view::{PostView, reply_views};
