//! View models consumed by the renderers.
//!
//! A [`PostView`] is built once per post per render pass. The attachment is
//! classified during construction so the renderer only ever matches on the
//! cached [`AttachmentKind`].

use crate::attachment::{AttachmentKind, classify, upload_url};
use crate::post::Post;

/// Render-ready projection of a [`Post`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostView {
    /// Post id, used for reply links and the `parent_id` form field.
    pub id: String,
    /// Title for root posts, `"Reply {n}"` for replies.
    pub display_title: String,
    /// Raw message body. Escaping is left to the renderer.
    pub message: String,
    /// Cached classification of `attachment_path`.
    pub attachment: AttachmentKind,
    /// Stored attachment filename, if any.
    pub attachment_path: Option<String>,
    /// 1-based position within the thread's replies; `None` for root posts.
    pub ordinal: Option<usize>,
}

impl PostView {
    /// Build the view for a post. Replies pass their ordinal.
    pub fn build(post: Post, ordinal: Option<usize>) -> Self {
        let attachment = classify(post.file.as_deref());

        let display_title = match ordinal {
            Some(n) => format!("Reply {n}"),
            None => post.title.unwrap_or_default(),
        };

        Self {
            id: post.id,
            display_title,
            message: post.message,
            attachment,
            attachment_path: post.file,
            ordinal,
        }
    }

    /// Build the view for a thread's root post.
    pub fn root(post: Post) -> Self {
        Self::build(post, None)
    }

    /// Servable URL of the attachment under `upload_prefix`.
    pub fn attachment_url(&self, upload_prefix: &str) -> Option<String> {
        self.attachment_path
            .as_deref()
            .map(|path| upload_url(upload_prefix, path))
    }
}

/// Lazily build reply views, numbering them `1..=n` in iteration order.
pub fn reply_views<I>(replies: I) -> impl Iterator<Item = PostView>
where
    I: IntoIterator<Item = Post>,
{
    replies
        .into_iter()
        .enumerate()
        .map(|(index, post)| PostView::build(post, Some(index + 1)))
}
