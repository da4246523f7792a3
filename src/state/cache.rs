//! Tag-keyed query cache
//!
//! A small invalidation registry shared across the application. Writers do
//! not touch cached data; they mark a tag stale and any reader of that tag
//! refetches on next access. The registry is an explicit, injected
//! collaborator rather than process-global state, so tests can observe
//! exactly which invalidations a component issued.

use std::collections::HashMap;
use std::sync::Mutex;

/// Tag for the cached shifts collection
pub const SHIFTS_TAG: &str = "shifts";

/// Per-tag bookkeeping
#[derive(Debug, Default)]
struct TagState {
    /// Bumped on every invalidation
    revision: u64,
    /// Whether the cached value may be served without a refetch
    fresh: bool,
}

/// Shared invalidation registry keyed by string tags
///
/// Safe to call from any thread; share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct QueryCache {
    tags: Mutex<HashMap<String, TagState>>,
}

impl QueryCache {
    pub fn new() -> Self {
        QueryCache::default()
    }

    /// Mark a tag stale and bump its revision
    ///
    /// Subscribers of the tag refetch on their next access. Issuing the same
    /// invalidation concurrently from several sources is fine; revisions
    /// count every signal.
    pub fn invalidate(&self, tag: &str) {
        let mut tags = self.tags.lock().unwrap();
        let state = tags.entry(tag.to_string()).or_default();
        state.revision += 1;
        state.fresh = false;
    }

    /// Record that a tag's data has just been (re)fetched
    pub fn mark_fresh(&self, tag: &str) {
        let mut tags = self.tags.lock().unwrap();
        tags.entry(tag.to_string()).or_default().fresh = true;
    }

    /// Whether the tag needs a refetch; a never-fetched tag counts as stale
    pub fn is_stale(&self, tag: &str) -> bool {
        let tags = self.tags.lock().unwrap();
        tags.get(tag).map_or(true, |state| !state.fresh)
    }

    /// How many times the tag has been invalidated
    pub fn revision(&self, tag: &str) -> u64 {
        let tags = self.tags.lock().unwrap();
        tags.get(tag).map_or(0, |state| state.revision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_unknown_tag_is_stale() {
        let cache = QueryCache::new();

        assert!(cache.is_stale("shifts"));
        assert_eq!(cache.revision("shifts"), 0);
    }

    #[test]
    fn test_fresh_then_invalidate() {
        let cache = QueryCache::new();

        cache.mark_fresh("shifts");
        assert!(!cache.is_stale("shifts"));

        cache.invalidate("shifts");
        assert!(cache.is_stale("shifts"));
        assert_eq!(cache.revision("shifts"), 1);
    }

    #[test]
    fn test_tags_are_independent() {
        let cache = QueryCache::new();

        cache.mark_fresh("shifts");
        cache.mark_fresh("users");
        cache.invalidate("shifts");

        assert!(cache.is_stale("shifts"));
        assert!(!cache.is_stale("users"));
        assert_eq!(cache.revision("users"), 0);
    }

    #[test]
    fn test_concurrent_invalidation_counts_every_signal() {
        let cache = Arc::new(QueryCache::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        cache.invalidate(SHIFTS_TAG);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.revision(SHIFTS_TAG), 800);
        assert!(cache.is_stale(SHIFTS_TAG));
    }
}
