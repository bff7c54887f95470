//! Cache coordinator - the single mutation path for all cached state.
//!
//! The coordinator owns one collection store per entity kind, the shared
//! timestamp index, and the suggestions index, all behind a single RwLock.
//! Every mutation updates the owning store and the timestamp index under
//! one write guard, so the two can never be observed out of step. Reads
//! run concurrently with each other and are exclusive only with in-flight
//! mutations.
//!
//! All operations are total: nothing here returns an error, and a miss is
//! indistinguishable whether the entry was never cached, explicitly
//! invalidated, or expired. The caller's remedy is identical in all three
//! cases (recompute and put again).

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use liftlog_core::{
    DayTypeInfo, ExerciseHistory, ProgramId, TemplateId, TemplateRef, WorkoutProgram,
    WorkoutTemplate,
};

use crate::config::CacheConfig;
use crate::key::{CacheKey, CacheKind};
use crate::store::CollectionStore;
use crate::suggestions::SuggestionsIndex;

/// Snapshot of cache usage counters.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of cache hits since creation.
    pub hits: u64,
    /// Number of cache misses since creation.
    pub misses: u64,
    /// Number of TTL-gated entries currently cached (suggestions excluded).
    pub entry_count: u64,
}

impl CacheStats {
    /// Calculate the hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Hit/miss counters, bumped with relaxed ordering on the read path.
#[derive(Debug, Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
}

/// All mutable cache state. Only ever touched through the coordinator's
/// lock, which is what keeps the store/index pairing an invariant rather
/// than a runtime check.
#[derive(Debug, Default)]
struct CacheState {
    templates: CollectionStore<TemplateId, WorkoutTemplate>,
    programs: CollectionStore<ProgramId, WorkoutProgram>,
    exercise_history: CollectionStore<String, ExerciseHistory>,
    day_type_info: CollectionStore<String, DayTypeInfo>,
    /// Insertion timestamps for every entry across all TTL-gated stores.
    index: HashMap<CacheKey, Instant>,
    suggestions: SuggestionsIndex,
}

impl CacheState {
    /// Remove an entry from its owning store and the index together.
    /// Idempotent: absent keys are a successful no-op.
    fn remove_key(&mut self, key: &CacheKey) -> bool {
        let present = match key {
            CacheKey::Template(id) => self.templates.remove(id),
            CacheKey::Program(id) => self.programs.remove(id),
            CacheKey::ExerciseHistory(name) => self.exercise_history.remove(name),
            CacheKey::DayTypeInfo(name) => self.day_type_info.remove(name),
        };
        self.index.remove(key);
        present
    }

    /// Drop every entry of one kind from its store and the index.
    fn clear_kind(&mut self, kind: CacheKind) -> usize {
        let removed = match kind {
            CacheKind::Template => {
                let n = self.templates.len();
                self.templates.clear();
                n
            }
            CacheKind::Program => {
                let n = self.programs.len();
                self.programs.clear();
                n
            }
            CacheKind::ExerciseHistory => {
                let n = self.exercise_history.len();
                self.exercise_history.clear();
                n
            }
            CacheKind::DayTypeInfo => {
                let n = self.day_type_info.len();
                self.day_type_info.clear();
                n
            }
        };
        self.index.retain(|key, _| key.kind() != kind);
        removed
    }
}

/// Process-wide façade over all entity caches.
///
/// Cheap to clone (all state is Arc-backed); construct once at startup and
/// inject the handle into collaborators rather than reaching for a global.
#[derive(Debug, Clone)]
pub struct CacheCoordinator {
    state: Arc<RwLock<CacheState>>,
    counters: Arc<Counters>,
    config: CacheConfig,
}

impl CacheCoordinator {
    /// Create a coordinator with the given configuration.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(CacheState::default())),
            counters: Arc::new(Counters::default()),
            config,
        }
    }

    /// Create a coordinator with the default 30-minute TTL.
    pub fn with_defaults() -> Self {
        Self::new(CacheConfig::default())
    }

    /// The active configuration.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    fn is_fresh(&self, inserted_at: Instant, now: Instant) -> bool {
        now.saturating_duration_since(inserted_at) < self.config.ttl
    }

    fn record(&self, hit: bool) {
        if hit {
            self.counters.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.counters.misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    // ------------------------------------------------------------------
    // Templates
    // ------------------------------------------------------------------

    /// Fetch a cached workout template. Expired entries miss but are left
    /// in place; physical removal is the sweeper's job, keeping the read
    /// path free of side effects.
    pub async fn get_template(&self, template_id: TemplateId) -> Option<WorkoutTemplate> {
        let now = Instant::now();
        let state = self.state.read().await;
        let found = match state.index.get(&CacheKey::Template(template_id)) {
            Some(&inserted_at) if self.is_fresh(inserted_at, now) => state
                .templates
                .get(&template_id)
                .map(|entry| entry.value().clone()),
            _ => None,
        };
        self.record(found.is_some());
        found
    }

    /// Insert or replace a cached template, refreshing its timestamp.
    pub async fn put_template(&self, template: WorkoutTemplate) {
        let now = Instant::now();
        let mut state = self.state.write().await;
        state
            .index
            .insert(CacheKey::Template(template.template_id), now);
        state.templates.insert(template.template_id, template, now);
    }

    /// Remove a cached template if present.
    pub async fn invalidate_template(&self, template_id: TemplateId) {
        self.invalidate(&CacheKey::Template(template_id)).await;
    }

    // ------------------------------------------------------------------
    // Programs
    // ------------------------------------------------------------------

    /// Fetch a cached workout program.
    pub async fn get_program(&self, program_id: ProgramId) -> Option<WorkoutProgram> {
        let now = Instant::now();
        let state = self.state.read().await;
        let found = match state.index.get(&CacheKey::Program(program_id)) {
            Some(&inserted_at) if self.is_fresh(inserted_at, now) => state
                .programs
                .get(&program_id)
                .map(|entry| entry.value().clone()),
            _ => None,
        };
        self.record(found.is_some());
        found
    }

    /// Insert or replace a cached program, refreshing its timestamp.
    pub async fn put_program(&self, program: WorkoutProgram) {
        let now = Instant::now();
        let mut state = self.state.write().await;
        state.index.insert(CacheKey::Program(program.program_id), now);
        state.programs.insert(program.program_id, program, now);
    }

    /// Remove a cached program if present.
    pub async fn invalidate_program(&self, program_id: ProgramId) {
        self.invalidate(&CacheKey::Program(program_id)).await;
    }

    // ------------------------------------------------------------------
    // Exercise history
    // ------------------------------------------------------------------

    /// Fetch cached history for an exercise. Names are matched exactly.
    pub async fn get_exercise_history(&self, exercise_name: &str) -> Option<ExerciseHistory> {
        let now = Instant::now();
        let key = CacheKey::exercise_history(exercise_name);
        let state = self.state.read().await;
        let found = match state.index.get(&key) {
            Some(&inserted_at) if self.is_fresh(inserted_at, now) => state
                .exercise_history
                .get(&exercise_name.to_string())
                .map(|entry| entry.value().clone()),
            _ => None,
        };
        self.record(found.is_some());
        found
    }

    /// Insert or replace cached history, keyed by its exercise name.
    pub async fn put_exercise_history(&self, history: ExerciseHistory) {
        let now = Instant::now();
        let mut state = self.state.write().await;
        state
            .index
            .insert(CacheKey::exercise_history(history.exercise_name.clone()), now);
        state
            .exercise_history
            .insert(history.exercise_name.clone(), history, now);
    }

    /// Remove cached history for an exercise if present.
    pub async fn invalidate_exercise_history(&self, exercise_name: &str) {
        self.invalidate(&CacheKey::exercise_history(exercise_name)).await;
    }

    // ------------------------------------------------------------------
    // Day-type info
    // ------------------------------------------------------------------

    /// Fetch a cached day-type summary. Day names are matched exactly.
    pub async fn get_day_type_info(&self, day_name: &str) -> Option<DayTypeInfo> {
        let now = Instant::now();
        let key = CacheKey::day_type_info(day_name);
        let state = self.state.read().await;
        let found = match state.index.get(&key) {
            Some(&inserted_at) if self.is_fresh(inserted_at, now) => state
                .day_type_info
                .get(&day_name.to_string())
                .map(|entry| entry.value().clone()),
            _ => None,
        };
        self.record(found.is_some());
        found
    }

    /// Insert or replace a cached day-type summary, keyed by day name.
    pub async fn put_day_type_info(&self, info: DayTypeInfo) {
        let now = Instant::now();
        let mut state = self.state.write().await;
        state
            .index
            .insert(CacheKey::day_type_info(info.day_name.clone()), now);
        state.day_type_info.insert(info.day_name.clone(), info, now);
    }

    /// Remove a cached day-type summary if present.
    pub async fn invalidate_day_type_info(&self, day_name: &str) {
        self.invalidate(&CacheKey::day_type_info(day_name)).await;
    }

    // ------------------------------------------------------------------
    // Suggestions index (non-TTL)
    // ------------------------------------------------------------------

    /// Fetch the precomputed suggestion list for a day type. Keys are
    /// case-insensitive and never expire.
    pub async fn get_suggestions(&self, day_type: &str) -> Option<Vec<TemplateRef>> {
        let state = self.state.read().await;
        let found = state.suggestions.get(day_type).cloned();
        self.record(found.is_some());
        found
    }

    /// Replace the suggestion list for a day type wholesale.
    pub async fn put_suggestions(&self, day_type: &str, refs: Vec<TemplateRef>) {
        let mut state = self.state.write().await;
        state.suggestions.replace(day_type, refs);
    }

    /// Drop the entire suggestions index.
    pub async fn invalidate_suggestions(&self) {
        let mut state = self.state.write().await;
        state.suggestions.clear();
    }

    // ------------------------------------------------------------------
    // Keyed and bulk invalidation
    // ------------------------------------------------------------------

    /// Remove one entry and its timestamp. No-op when absent.
    pub async fn invalidate(&self, key: &CacheKey) -> bool {
        let mut state = self.state.write().await;
        state.remove_key(key)
    }

    /// Drop every cached entry of one kind. Returns the number removed.
    pub async fn invalidate_kind(&self, kind: CacheKind) -> usize {
        let mut state = self.state.write().await;
        state.clear_kind(kind)
    }

    /// Empty every store, the timestamp index and the suggestions index
    /// under one write guard, so a concurrent sweep sees either the full
    /// cache or an empty one.
    pub async fn clear_all(&self) {
        let mut state = self.state.write().await;
        state.templates.clear();
        state.programs.clear();
        state.exercise_history.clear();
        state.day_type_info.clear();
        state.index.clear();
        state.suggestions.clear();
    }

    // ------------------------------------------------------------------
    // Warming
    // ------------------------------------------------------------------

    /// Pre-populate the template cache from an already-loaded collection,
    /// truncated to the configured warming cap in provided order.
    ///
    /// Population happens on a spawned task; the caller only pays for the
    /// enqueue. Warming refreshes template entries but never evicts
    /// entries of any other kind. The handle is returned for tests and
    /// callers that want to observe completion, but awaiting it is never
    /// required.
    pub fn warm_templates(&self, templates: Vec<WorkoutTemplate>) -> JoinHandle<usize> {
        let coordinator = self.clone();
        let limit = self.config.warm_template_limit;
        tokio::spawn(async move {
            let provided = templates.len();
            let mut warmed = 0usize;
            for template in templates.into_iter().take(limit) {
                coordinator.put_template(template).await;
                warmed += 1;
            }
            tracing::debug!(warmed, provided, "template cache warming completed");
            warmed
        })
    }

    /// Pre-populate the program cache from an already-loaded collection.
    /// Programs are few, so program warming is uncapped.
    pub fn warm_programs(&self, programs: Vec<WorkoutProgram>) -> JoinHandle<usize> {
        let coordinator = self.clone();
        tokio::spawn(async move {
            let mut warmed = 0usize;
            for program in programs {
                coordinator.put_program(program).await;
                warmed += 1;
            }
            tracing::debug!(warmed, "program cache warming completed");
            warmed
        })
    }

    // ------------------------------------------------------------------
    // Sweeping
    // ------------------------------------------------------------------

    /// One expiry pass: scan the timestamp index for expired keys under
    /// the read lock, then remove them under the write lock.
    ///
    /// Freshness is re-checked at removal time, so a put that lands
    /// between the scan and the delete survives; keys already removed by
    /// a concurrent invalidate are a successful no-op. The suggestions
    /// index carries no timestamps and is never touched. Returns the
    /// number of entries removed.
    pub async fn sweep_expired(&self) -> usize {
        let now = Instant::now();
        let candidates: Vec<CacheKey> = {
            let state = self.state.read().await;
            state
                .index
                .iter()
                .filter(|(_, &inserted_at)| !self.is_fresh(inserted_at, now))
                .map(|(key, _)| key.clone())
                .collect()
        };

        if candidates.is_empty() {
            return 0;
        }

        let mut state = self.state.write().await;
        let now = Instant::now();
        let mut removed = 0usize;
        for key in candidates {
            match state.index.get(&key) {
                Some(&inserted_at) if !self.is_fresh(inserted_at, now) => {
                    state.remove_key(&key);
                    removed += 1;
                }
                // Refreshed since the scan, or already invalidated.
                _ => {}
            }
        }
        removed
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    /// Number of TTL-gated entries currently held (fresh or expired).
    pub async fn entry_count(&self) -> usize {
        self.state.read().await.index.len()
    }

    /// Snapshot of usage counters.
    pub async fn stats(&self) -> CacheStats {
        let entry_count = self.entry_count().await as u64;
        CacheStats {
            hits: self.counters.hits.load(Ordering::Relaxed),
            misses: self.counters.misses.load(Ordering::Relaxed),
            entry_count,
        }
    }
}
