use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

/// A shared generation counter for invalidating scheduled work.
///
/// Every clone observes the same counter. Work that was scheduled against an
/// older value (for example a pending calibration finalize) compares its
/// stamp with `current()` and drops itself once `advance()` has been called.
#[derive(Clone, Debug)]
pub struct Epoch {
    value: Arc<AtomicU64>,
}

impl Epoch {
    pub fn new() -> Self {
        Self {
            value: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Get the current epoch value.
    pub fn current(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    /// Advance to the next epoch. Returns the new epoch value.
    pub fn advance(&self) -> u64 {
        self.value.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Check if the given epoch is still current.
    pub fn is_current(&self, epoch: u64) -> bool {
        epoch == self.current()
    }

    /// Stamp a value with the current epoch.
    pub fn stamp<T>(&self, inner: T) -> Stamped<T> {
        Stamped {
            epoch: self.current(),
            inner,
        }
    }
}

impl Default for Epoch {
    fn default() -> Self {
        Self::new()
    }
}

/// A value stamped with the epoch it was created in.
#[derive(Clone, Debug, PartialEq)]
pub struct Stamped<T> {
    pub epoch: u64,
    pub inner: T,
}
