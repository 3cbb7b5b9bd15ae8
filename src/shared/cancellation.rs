use super::error::HiveError;
use super::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation flag passed through every use case and
/// repository operation.
///
/// Clones share the same flag. Repositories call [`CancelSignal::check`]
/// after taking the store lock and before mutating anything, so a cancelled
/// operation never leaves a partial write behind.
#[derive(Debug, Clone, Default)]
pub struct CancelSignal {
    cancelled: Arc<AtomicBool>,
}

impl CancelSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Returns `Err(HiveError::Cancelled)` once the signal has fired.
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(HiveError::Cancelled)
        } else {
            Ok(())
        }
    }
}
