//! Query context passed to every source call.
//!
//! Carries a shared cancellation flag. Callers never inspect it on a source's
//! behalf; a source that wants to honour cancellation calls
//! [`Cx::checkpoint`] at its own yield points.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

/// Returned by [`Cx::checkpoint`] once the context has been cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("query context cancelled")]
pub struct Cancelled;

#[derive(Debug, Clone, Default)]
pub struct Cx {
    cancelled: Arc<AtomicBool>,
}

impl Cx {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel this context and every clone of it.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    pub fn checkpoint(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}
