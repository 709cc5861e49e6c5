//! Post storage backed by sled.
//!
//! # Key Design
//!
//! - Keys: post id (UTF-8)
//! - Values: JSON-encoded [`Post`]
//!
//! Threads are reassembled by scanning for posts whose `parent_id` names the
//! root. Records that fail to decode are skipped and logged.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::post::{Post, Thread};

/// One page of thread starters for the board index.
#[derive(Debug, Clone, Default)]
pub struct RootsPage {
    /// Root posts on this page, most recently bumped first.
    pub posts: Vec<Post>,
    /// Whether an earlier page exists.
    pub has_prev: bool,
    /// Whether a later page exists.
    pub has_next: bool,
}

/// sled-backed post store.
///
/// Cheap to clone: clones share the same underlying database.
#[derive(Clone)]
pub struct PostStore {
    db: sled::Db,
}

impl PostStore {
    /// Open or create a store at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening post store at {}", path.display());
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// Open a throwaway store that is deleted on drop.
    pub fn temporary() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;
        Ok(Self { db })
    }

    /// Fetch a single post by id.
    pub fn get(&self, id: &str) -> Result<Option<Post>> {
        match self.db.get(id.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Persist a post.
    ///
    /// A reply to a thread starter also bumps the starter's timestamp so the
    /// thread moves to the top of the board index. Replies are never bumped,
    /// their timestamps fix the order inside a thread.
    pub fn insert(&self, post: &Post) -> Result<()> {
        self.put(post)?;

        if let Some(parent_id) = &post.parent_id
            && let Some(mut parent) = self.get(parent_id)?
            && !parent.is_reply()
        {
            parent.timestamp = post.timestamp;
            self.put(&parent)?;
            debug!(parent_id = %parent_id, timestamp = post.timestamp, "bumped thread");
        }

        self.db.flush()?;
        Ok(())
    }

    /// Load a thread: the post with `id` and every post replying to it.
    ///
    /// Replies are in chronological order; equal timestamps keep store order.
    pub fn thread(&self, id: &str) -> Result<Option<Thread>> {
        let mut root = None;
        let mut replies = Vec::new();

        for post in self.scan() {
            let post = post?;
            if post.id == id {
                root = Some(post);
            } else if post.parent_id.as_deref() == Some(id) {
                replies.push(post);
            }
        }

        replies.sort_by_key(|p| p.timestamp);

        Ok(root.map(|root| Thread { root, replies }))
    }

    /// Load one page of thread starters, most recently bumped first.
    ///
    /// Pages past the end are empty.
    pub fn roots_page(&self, page: usize, per_page: usize) -> Result<RootsPage> {
        let mut roots = Vec::new();
        for post in self.scan() {
            let post = post?;
            if !post.is_reply() {
                roots.push(post);
            }
        }

        roots.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let start = page.saturating_mul(per_page);
        let end = start.saturating_add(per_page);
        let total = roots.len();

        let posts = if start < total {
            roots.drain(start..end.min(total)).collect()
        } else {
            Vec::new()
        };

        Ok(RootsPage {
            posts,
            has_prev: page > 0,
            has_next: end < total,
        })
    }

    /// Number of stored posts.
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Whether the store holds no posts.
    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    fn put(&self, post: &Post) -> Result<()> {
        let value = serde_json::to_vec(post)?;
        self.db.insert(post.id.as_bytes(), value)?;
        Ok(())
    }

    /// Iterate decodable posts. Storage errors are yielded; bad records are skipped.
    fn scan(&self) -> impl Iterator<Item = Result<Post>> + '_ {
        self.db.iter().filter_map(|entry| match entry {
            Ok((key, value)) => match serde_json::from_slice::<Post>(&value) {
                Ok(post) => Some(Ok(post)),
                Err(e) => {
                    warn!(key = %String::from_utf8_lossy(&key), error = %e, "skipping undecodable post");
                    None
                }
            },
            Err(e) => Some(Err(e.into())),
        })
    }
}
