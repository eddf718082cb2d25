//! Progress observers.
//!
//! An observer is told how many bytes went by and nothing else; it cannot
//! influence the transfer.

use indicatif::ProgressBar;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Receives the number of bytes that went through a [`ProgressStream`](super::ProgressStream).
pub trait ProgressObserver {
    /// Called once per chunk with the chunk's length.
    fn advance(&self, bytes: u64);
}

impl ProgressObserver for ProgressBar {
    fn advance(&self, bytes: u64) {
        self.inc(bytes);
    }
}

/// An observer shared between the fetcher and its caller.
pub type SharedObserver = Arc<dyn ProgressObserver + Send + Sync>;

impl<T: ProgressObserver + ?Sized> ProgressObserver for Arc<T> {
    fn advance(&self, bytes: u64) {
        (**self).advance(bytes);
    }
}

/// Observer that ignores every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn advance(&self, _bytes: u64) {}
}

/// Observer that only counts bytes. Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct ByteCounter {
    total: Arc<AtomicU64>,
}

impl ByteCounter {
    /// Creates a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes observed so far.
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }
}

impl ProgressObserver for ByteCounter {
    fn advance(&self, bytes: u64) {
        self.total.fetch_add(bytes, Ordering::Relaxed);
    }
}
