//! Background expiry sweeper.
//!
//! Reads never delete, so expired entries would sit in memory forever
//! without this task. It runs one sweep pass per configured interval and
//! an immediate pass whenever the host raises a memory-pressure signal,
//! until the shutdown channel flips. Each pass delegates to
//! [`CacheCoordinator::sweep_expired`], which re-checks freshness at
//! removal time so a concurrent put is never erased by a stale scan.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::time::{interval, MissedTickBehavior};

use crate::coordinator::CacheCoordinator;
use crate::pressure::MemoryPressure;

// ============================================================================
// METRICS
// ============================================================================

/// Counters for sweeper activity.
#[derive(Debug, Default)]
pub struct SweepMetrics {
    /// Total sweep passes completed since startup.
    pub sweep_cycles: AtomicU64,

    /// Total entries physically removed since startup.
    pub entries_removed: AtomicU64,

    /// Sweep passes triggered by the memory-pressure signal.
    pub pressure_sweeps: AtomicU64,
}

impl SweepMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current snapshot of all counters.
    pub fn snapshot(&self) -> SweepSnapshot {
        SweepSnapshot {
            sweep_cycles: self.sweep_cycles.load(Ordering::Relaxed),
            entries_removed: self.entries_removed.load(Ordering::Relaxed),
            pressure_sweeps: self.pressure_sweeps.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of sweeper counters at a point in time.
#[derive(Debug, Clone)]
pub struct SweepSnapshot {
    pub sweep_cycles: u64,
    pub entries_removed: u64,
    pub pressure_sweeps: u64,
}

// ============================================================================
// BACKGROUND TASK
// ============================================================================

enum SweepTrigger {
    Periodic,
    MemoryPressure,
}

/// Background task that periodically reclaims expired cache entries.
///
/// Runs until the shutdown signal is received. Spawn it once at startup:
///
/// ```ignore
/// let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
/// let handle = tokio::spawn(expiry_sweep_task(
///     coordinator.clone(),
///     pressure.clone(),
///     shutdown_rx,
/// ));
///
/// // Later, trigger shutdown and collect metrics.
/// let _ = shutdown_tx.send(true);
/// let metrics = handle.await.unwrap();
/// ```
///
/// The sweep interval comes from the coordinator's [`CacheConfig`]; the
/// suggestions index carries no timestamps and is never swept.
///
/// [`CacheConfig`]: crate::config::CacheConfig
pub async fn expiry_sweep_task(
    coordinator: CacheCoordinator,
    pressure: MemoryPressure,
    mut shutdown_rx: watch::Receiver<bool>,
) -> Arc<SweepMetrics> {
    let metrics = Arc::new(SweepMetrics::new());

    let mut sweep_interval = interval(coordinator.config().sweep_interval);
    sweep_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    tracing::info!(
        ttl_secs = coordinator.config().ttl.as_secs(),
        sweep_interval_secs = coordinator.config().sweep_interval.as_secs(),
        "Expiry sweeper started"
    );

    loop {
        tokio::select! {
            // Check for shutdown signal
            _ = shutdown_rx.changed() => {
                if *shutdown_rx.borrow() {
                    tracing::info!("Expiry sweeper shutting down");
                    break;
                }
            }

            // Regular periodic sweep
            _ = sweep_interval.tick() => {
                run_sweep(&coordinator, &metrics, SweepTrigger::Periodic).await;
            }

            // Host signalled memory pressure: sweep immediately
            _ = pressure.notified() => {
                run_sweep(&coordinator, &metrics, SweepTrigger::MemoryPressure).await;
            }
        }
    }

    let snapshot = metrics.snapshot();
    tracing::info!(
        sweep_cycles = snapshot.sweep_cycles,
        entries_removed = snapshot.entries_removed,
        pressure_sweeps = snapshot.pressure_sweeps,
        "Expiry sweeper stopped"
    );

    metrics
}

/// Perform one sweep pass and record its outcome.
async fn run_sweep(
    coordinator: &CacheCoordinator,
    metrics: &SweepMetrics,
    trigger: SweepTrigger,
) {
    if let SweepTrigger::MemoryPressure = trigger {
        metrics.pressure_sweeps.fetch_add(1, Ordering::Relaxed);
        tracing::debug!("Memory pressure signal received, sweeping now");
    }

    let removed = coordinator.sweep_expired().await;
    metrics.sweep_cycles.fetch_add(1, Ordering::Relaxed);
    metrics
        .entries_removed
        .fetch_add(removed as u64, Ordering::Relaxed);

    if removed > 0 {
        tracing::info!(removed, "Removed expired entries from the cache");
    } else {
        tracing::trace!("Sweep cycle completed with no expired entries");
    }
}

// ============================================================================
// TESTS
// ============================================================================
