//! In-memory cache of the server-side todo list.
//!
//! The list is the single shared value in the app. Mutations never touch it
//! directly: they mark it stale, and the app refetches. A fetch id recorded
//! at `begin_fetch` time ensures a superseded fetch can never overwrite the
//! result of a newer one.

use crate::models::Todo;

/// Cached copy of the remote list plus the bookkeeping that drives refetches.
#[derive(Debug, Default)]
pub struct ListCache {
    todos: Vec<Todo>,
    stale: bool,
    in_flight: Option<u64>,
}

impl ListCache {
    /// A cache that has never been filled. Stale from the start, so the
    /// first fetch happens immediately.
    pub fn new() -> Self {
        ListCache {
            todos: Vec::new(),
            stale: true,
            in_flight: None,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Invalidate: the cached list no longer reflects the server.
    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    /// Record a new in-flight fetch. Any previous in-flight fetch is
    /// superseded; its response will be discarded when it arrives.
    pub fn begin_fetch(&mut self, request_id: u64) {
        self.in_flight = Some(request_id);
    }

    /// Apply a completed fetch. Returns false (and leaves the cache
    /// untouched) when the response belongs to a superseded fetch.
    pub fn complete(&mut self, request_id: u64, todos: Vec<Todo>) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        self.todos = todos;
        self.stale = false;
        self.in_flight = None;
        true
    }

    /// Record a failed fetch. The cached data is kept and stays stale;
    /// returns false for superseded fetches so their errors are ignored too.
    pub fn fail(&mut self, request_id: u64) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        self.in_flight = None;
        true
    }
}
