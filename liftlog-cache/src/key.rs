//! Composite cache keys for the shared timestamp index.
//!
//! Every TTL-gated collection shares one timestamp index, so index entries
//! need a key that carries both the entity kind and the natural identifier.
//! Encoding the kind as an enum variant (instead of a string prefix) makes
//! the kind-to-store dispatch exhaustive: adding a cached kind without
//! handling it everywhere is a compile error, and a malformed identifier
//! is unrepresentable.

use liftlog_core::{ProgramId, TemplateId};

/// Discriminator for the TTL-gated entity collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKind {
    Template,
    Program,
    ExerciseHistory,
    DayTypeInfo,
}

impl CacheKind {
    /// Stable name used in tracing fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheKind::Template => "template",
            CacheKind::Program => "program",
            CacheKind::ExerciseHistory => "exercise_history",
            CacheKind::DayTypeInfo => "day_type_info",
        }
    }
}

/// Composite key of (collection kind, natural identifier).
///
/// Equality is structural. Templates and programs are keyed by UUID;
/// exercise histories and day-type summaries are keyed by their display
/// name, stored case-preserving and matched exactly. (Only the separate
/// suggestions index normalizes its string keys.)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Template(TemplateId),
    Program(ProgramId),
    ExerciseHistory(String),
    DayTypeInfo(String),
}

impl CacheKey {
    /// Build a key for a cached exercise history.
    pub fn exercise_history(name: impl Into<String>) -> Self {
        Self::ExerciseHistory(name.into())
    }

    /// Build a key for a cached day-type summary.
    pub fn day_type_info(day_name: impl Into<String>) -> Self {
        Self::DayTypeInfo(day_name.into())
    }

    /// The collection kind this key belongs to.
    pub fn kind(&self) -> CacheKind {
        match self {
            CacheKey::Template(_) => CacheKind::Template,
            CacheKey::Program(_) => CacheKind::Program,
            CacheKey::ExerciseHistory(_) => CacheKind::ExerciseHistory,
            CacheKey::DayTypeInfo(_) => CacheKind::DayTypeInfo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_kind_dispatch() {
        let id = Uuid::now_v7();
        assert_eq!(CacheKey::Template(id).kind(), CacheKind::Template);
        assert_eq!(CacheKey::Program(id).kind(), CacheKind::Program);
        assert_eq!(
            CacheKey::exercise_history("Bench Press").kind(),
            CacheKind::ExerciseHistory
        );
        assert_eq!(
            CacheKey::day_type_info("Monday").kind(),
            CacheKind::DayTypeInfo
        );
    }

    #[test]
    fn test_equality_is_structural() {
        let id = Uuid::now_v7();
        assert_eq!(CacheKey::Template(id), CacheKey::Template(id));
        assert_eq!(
            CacheKey::exercise_history("Squat"),
            CacheKey::exercise_history("Squat")
        );
    }

    #[test]
    fn test_same_id_different_kinds_are_different_keys() {
        let id = Uuid::now_v7();
        assert_ne!(CacheKey::Template(id), CacheKey::Program(id));
    }

    #[test]
    fn test_string_keys_preserve_case() {
        // Exercise/day-name keys are exact-match; no normalization happens
        // outside the suggestions index.
        assert_ne!(
            CacheKey::exercise_history("Bench Press"),
            CacheKey::exercise_history("bench press")
        );
        assert_ne!(
            CacheKey::day_type_info("Monday"),
            CacheKey::day_type_info("monday")
        );
    }
}
