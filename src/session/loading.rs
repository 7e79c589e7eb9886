//! Loading indicator shared by all loading-tracked requests
//!
//! Visible while at least one guard is alive. Guards travel with the
//! request and release on drop, so every exit path hides the overlay.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
pub struct LoadingIndicator {
    outstanding: Arc<AtomicUsize>,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the indicator until the returned guard is dropped
    pub fn acquire(&self) -> LoadingGuard {
        self.outstanding.fetch_add(1, Ordering::SeqCst);
        LoadingGuard {
            outstanding: Arc::clone(&self.outstanding),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.outstanding.load(Ordering::SeqCst) > 0
    }
}

#[derive(Debug)]
pub struct LoadingGuard {
    outstanding: Arc<AtomicUsize>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.outstanding.fetch_sub(1, Ordering::SeqCst);
    }
}
