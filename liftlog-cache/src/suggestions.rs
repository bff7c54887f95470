//! Template-suggestions index.
//!
//! A derived collection mapping a day-type string to a precomputed list of
//! template references. Unlike the point-entity stores it is not a cache of
//! canonical data and carries no timestamps: a key is only ever fully
//! replaced or the index fully cleared, never partially expired, so the
//! sweep leaves it alone.

use std::collections::HashMap;

use liftlog_core::TemplateRef;

/// Non-TTL index from normalized day-type to suggested templates.
///
/// Keys are case-insensitive: "Push", "push" and "PUSH" address the same
/// slot. Lookups return the full precomputed list or nothing.
#[derive(Debug, Default)]
pub struct SuggestionsIndex {
    by_day_type: HashMap<String, Vec<TemplateRef>>,
}

/// Canonical form of a suggestions key.
fn normalize(day_type: &str) -> String {
    day_type.to_lowercase()
}

impl SuggestionsIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the suggestion list for a day type, if one has been computed.
    pub fn get(&self, day_type: &str) -> Option<&Vec<TemplateRef>> {
        self.by_day_type.get(&normalize(day_type))
    }

    /// Replace the suggestion list for a day type wholesale.
    pub fn replace(&mut self, day_type: &str, refs: Vec<TemplateRef>) {
        self.by_day_type.insert(normalize(day_type), refs);
    }

    /// Drop every suggestion list.
    pub fn clear(&mut self) {
        self.by_day_type.clear();
    }

    pub fn len(&self) -> usize {
        self.by_day_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_day_type.is_empty()
    }
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: normalization is idempotent, so re-normalizing a
        /// stored key can never move it to a different slot.
        #[test]
        fn prop_normalize_idempotent(key in ".{0,40}") {
            prop_assert_eq!(normalize(&normalize(&key)), normalize(&key));
        }

        /// Property: any two case-variants of a key address the same slot.
        #[test]
        fn prop_case_variants_share_slot(key in "[a-zA-Z]{1,20}") {
            let mut index = SuggestionsIndex::new();
            index.replace(&key.to_uppercase(), Vec::new());
            prop_assert!(index.get(&key.to_lowercase()).is_some());
            prop_assert_eq!(index.len(), 1);
        }
    }
}
