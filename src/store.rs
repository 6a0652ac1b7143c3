use crate::models::Post;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

// ============================================================================
// BLOG STORE - Exclusive owner of the post collection
// ============================================================================
/// Posts are keyed by the same sequence number that backs their public id.
/// The counter lives inside the store, so ids stay monotonic no matter how
/// many posts get deleted in between.
///
/// `DashMap` = Thread-safe HashMap
/// - Can be read/written from multiple threads simultaneously
/// - No need for Mutex locks (handles it internally)
pub struct BlogStore {
    posts: DashMap<u64, Post>,
    next_id: AtomicU64,
}

impl BlogStore {
    pub fn new() -> Self {
        Self {
            posts: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Issues the next unused id and stores a new post. Validation is the
    /// router's job; anything that reaches this point is stored as-is.
    pub fn create(
        &self,
        title: String,
        content: String,
        author: String,
        publish_date: String,
    ) -> Post {
        let seq = self.next_id.fetch_add(1, Ordering::Relaxed);

        let post = Post {
            id: seq.to_string(),
            title,
            content,
            author,
            publish_date,
        };

        self.posts.insert(seq, post.clone());

        post
    }

    /// All posts in insertion order. Ids are monotonic, so sorting by the
    /// sequence key reproduces insertion order even after deletions.
    pub fn all(&self) -> Vec<Post> {
        let mut entries: Vec<(u64, Post)> = self
            .posts
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();

        entries.sort_by_key(|(seq, _)| *seq);

        entries.into_iter().map(|(_, post)| post).collect()
    }

    /// Replaces the mutable fields of the post whose id matches `post.id`.
    /// The stored id itself never changes. Returns `false` when no post has
    /// that id.
    pub fn update(&self, post: Post) -> bool {
        let Some(seq) = Self::parse_id(&post.id) else {
            return false;
        };

        match self.posts.get_mut(&seq) {
            Some(mut entry) => {
                entry.title = post.title;
                entry.content = post.content;
                entry.author = post.author;
                entry.publish_date = post.publish_date;
                true
            }
            None => false,
        }
    }

    /// Removes the post with the given id. Returns `false` when absent.
    pub fn remove(&self, id: &str) -> bool {
        Self::parse_id(id).is_some_and(|seq| self.posts.remove(&seq).is_some())
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    // Ids are issued as decimal sequence numbers; anything else matches no post.
    fn parse_id(id: &str) -> Option<u64> {
        id.parse().ok()
    }
}

impl Default for BlogStore {
    fn default() -> Self {
        Self::new()
    }
}
