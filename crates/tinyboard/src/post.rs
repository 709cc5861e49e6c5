//! Stored post records.

use serde::{Deserialize, Serialize};

/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 15;

/// Maximum message length in characters.
pub const MESSAGE_MAX_CHARS: usize = 100_000;

/// A post as persisted in the store. Root posts and replies share this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post id (UUID v4, hyphenated).
    pub id: String,
    /// Id of the root post this replies to; `None` for thread starters.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Thread title. Only root posts carry one.
    #[serde(default)]
    pub title: Option<String>,
    /// Message body.
    pub message: String,
    /// Stored attachment filename, relative to the upload directory.
    #[serde(default)]
    pub file: Option<String>,
    /// Unix seconds. For root posts this is bumped by every new reply.
    #[serde(default)]
    pub timestamp: u64,
}

impl Post {
    /// Whether this post is a reply to another post.
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }
}

/// A thread snapshot: the root post and its replies in chronological order.
#[derive(Debug, Clone)]
pub struct Thread {
    pub root: Post,
    pub replies: Vec<Post>,
}
