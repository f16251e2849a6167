//! Bookmark sequence shared by every event a room emits.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic event sequence ("bookmarks").
///
/// Every emitted event draws exactly one value. Rooms built from the same
/// `Bookmarks` share a single sequence; the binary creates one per process.
#[derive(Debug, Default)]
pub struct Bookmarks {
    next: AtomicU64,
}

impl Bookmarks {
    /// Sequence starting at 0.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Draws the next bookmark.
    pub fn next(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// The value the next draw will return.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}
