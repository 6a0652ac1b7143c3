use crate::store::BlogStore;
use std::sync::Arc;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// `Arc` = Atomic Reference Counter
/// - Allows multiple threads to share ownership safely
/// - Cloning the state clones the handle, not the posts
///
/// The store is injected here rather than held as a global, so tests can
/// build isolated instances and a persistent backend can slot in later.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<BlogStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(BlogStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
