//! Cooperative cancellation for audit runs
//!
//! A single token is created per run and handed down through both
//! fan-out levels. Workers check it between units of work; the ffprobe
//! adapter polls it while a child process is in flight.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Token for cooperative cancellation of an audit run.
///
/// Uses an AtomicBool internally. Clone is cheap and shares state.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new cancellation token (not cancelled).
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Check if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}
