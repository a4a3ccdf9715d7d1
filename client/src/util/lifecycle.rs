//! Cancellation flag shared between a component and the tasks it spawns.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cleared when the owning component is torn down or the work it started is
/// superseded. Spawned tasks check it after every await and stop applying
/// updates once it is cleared.
#[derive(Clone, Debug)]
pub struct LiveFlag(Arc<AtomicBool>);

impl Default for LiveFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl LiveFlag {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn cancel(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}
