use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic identifier source used to correlate the log lines of one request.
#[derive(Debug, Default)]
pub struct RequestCounter {
    value: AtomicU64,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next identifier, starting at 1.
    pub fn next(&self) -> u64 {
        self.value.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    pub fn current(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}
