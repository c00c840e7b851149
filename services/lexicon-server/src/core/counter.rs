//! Request counter echoed back in API responses.

use std::sync::atomic::{AtomicU64, Ordering};

/// Count of handled lookup and insert requests
///
/// Owned by [`crate::core::services::Services`]; each service
/// instance counts independently.
#[derive(Debug, Default)]
pub struct RequestCounter {
    handled: AtomicU64,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one handled request and return its sequence number
    pub fn increment(&self) -> u64 {
        self.handled.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Number of requests recorded so far
    pub fn current(&self) -> u64 {
        self.handled.load(Ordering::SeqCst)
    }
}
