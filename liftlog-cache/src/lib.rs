//! In-process TTL cache for LiftLog's user-facing entities.
//!
//! Repeated screen loads hit the same templates, programs, exercise
//! histories and day-type summaries over and over. This crate keeps a
//! process-wide cache of those entities in front of the persistence layer
//! so reads avoid recomputation and decode-from-storage costs. The cache
//! never owns canonical data: persistence stays with the stores, and the
//! worst defect observable here is a stale read or an extra recompute.
//!
//! # Design
//!
//! - [`CacheKey`] is a sum type over entity kinds, so the kind-to-store
//!   mapping is exhaustive and compiler-checked rather than parsed out of
//!   string prefixes.
//! - [`CacheCoordinator`] owns all mutable state behind one RwLock and is
//!   the only mutation path, which makes divergence between a collection
//!   store and the shared timestamp index unrepresentable outside a single
//!   write guard.
//! - [`expiry_sweep_task`] reclaims expired entries in the background,
//!   driven by a periodic timer and by an injectable [`MemoryPressure`]
//!   signal. Reads never delete; `get` on an expired entry just misses.
//! - The template-suggestions index is a derived, non-TTL collection: it
//!   is only ever replaced per key or cleared, never swept.
//!
//! # Example
//!
//! ```ignore
//! let coordinator = CacheCoordinator::new(CacheConfig::default());
//!
//! coordinator.put_template(template.clone()).await;
//! let hit = coordinator.get_template(template.template_id).await;
//!
//! // Spawn the background sweeper at startup.
//! let pressure = MemoryPressure::new();
//! let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//! tokio::spawn(expiry_sweep_task(coordinator.clone(), pressure.clone(), shutdown_rx));
//! ```

pub mod config;
pub mod coordinator;
pub mod entry;
pub mod key;
pub mod pressure;
pub mod store;
pub mod suggestions;
pub mod sweeper;

pub use config::CacheConfig;
pub use coordinator::{CacheCoordinator, CacheStats};
pub use entry::CacheEntry;
pub use key::{CacheKey, CacheKind};
pub use pressure::MemoryPressure;
pub use store::CollectionStore;
pub use suggestions::SuggestionsIndex;
pub use sweeper::{expiry_sweep_task, SweepMetrics, SweepSnapshot};
