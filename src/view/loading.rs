// src/view/loading.rs
//! Loading indicator shared by every action.
//!
//! Visibility is tied to a guard so it is released on every exit path,
//! including early returns through `?` and panics unwinding out of a
//! request future.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator {
    in_flight: Arc<AtomicUsize>,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the indicator until the returned guard is dropped
    pub fn show(&self) -> LoadingGuard {
        let previous = self.in_flight.fetch_add(1, Ordering::SeqCst);
        if previous == 0 {
            debug!("Loading indicator shown");
        }
        LoadingGuard {
            in_flight: Arc::clone(&self.in_flight),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.in_flight() > 0
    }

    /// Number of actions currently waiting on the backend
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

#[must_use = "the indicator hides as soon as the guard is dropped"]
pub struct LoadingGuard {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let previous = self.in_flight.fetch_sub(1, Ordering::SeqCst);
        if previous == 1 {
            debug!("Loading indicator hidden");
        }
    }
}
