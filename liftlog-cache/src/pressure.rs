//! Injectable memory-pressure trigger.
//!
//! The host environment's low-memory hook calls [`MemoryPressure::signal`]
//! once at whatever granularity it provides; the sweeper awaits
//! [`MemoryPressure::notified`] and runs an immediate pass. Keeping the
//! trigger as an injected handle (rather than a platform callback wired up
//! in a constructor) lets tests drive it deterministically.

use std::sync::Arc;
use tokio::sync::Notify;

/// Cheap-to-clone handle for signalling memory pressure to the sweeper.
#[derive(Debug, Clone, Default)]
pub struct MemoryPressure {
    notify: Arc<Notify>,
}

impl MemoryPressure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the signal. If the sweeper is not currently waiting, one
    /// permit is stored so the next wait completes immediately; repeated
    /// signals coalesce into a single sweep.
    pub fn signal(&self) {
        self.notify.notify_one();
    }

    /// Wait for the next pressure signal.
    pub async fn notified(&self) {
        self.notify.notified().await;
    }
}
