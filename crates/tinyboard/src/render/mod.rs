//! HTML rendering for board and thread pages.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/) for compile-time HTML
//! generation with automatic XSS protection (all dynamic values are escaped).

pub mod board;
pub mod components;
pub mod thread;

pub use board::{PageLinks, render_board};
pub use thread::render_thread;

/// Site-wide values every page needs.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Shown in page titles and the footer.
    pub site_name: &'a str,
    /// URL prefix uploads are served from.
    pub upload_prefix: &'a str,
}
