//! Per-kind collection stores.

use std::collections::HashMap;
use std::hash::Hash;
use tokio::time::Instant;

use crate::entry::CacheEntry;

/// Thin, kind-scoped mapping from natural identifier to cache entry.
///
/// One store exists per cached entity kind. A store carries no TTL
/// knowledge and no locking: expiry policy lives in the coordinator, which
/// also serializes all access. Stored keys are independent slots with no
/// ordering guarantees.
#[derive(Debug)]
pub struct CollectionStore<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
}

impl<K, V> CollectionStore<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Look up an entry by identifier.
    pub fn get(&self, id: &K) -> Option<&CacheEntry<V>> {
        self.entries.get(id)
    }

    /// Insert or replace an entry wholesale (last-write-wins, no merge).
    pub fn insert(&mut self, id: K, value: V, inserted_at: Instant) {
        self.entries.insert(id, CacheEntry::new(value, inserted_at));
    }

    /// Remove an entry. Returns whether anything was present.
    pub fn remove(&mut self, id: &K) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Drop every entry in this store.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an identifier currently has an entry, fresh or not.
    pub fn contains(&self, id: &K) -> bool {
        self.entries.contains_key(id)
    }
}

impl<K, V> Default for CollectionStore<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_insert_and_get() {
        let mut store: CollectionStore<String, u32> = CollectionStore::new();
        store.insert("squat".to_string(), 5, Instant::now());

        let entry = store.get(&"squat".to_string()).expect("entry present");
        assert_eq!(*entry.value(), 5);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_insert_replaces_wholesale() {
        let mut store: CollectionStore<String, u32> = CollectionStore::new();
        let first = Instant::now();
        store.insert("squat".to_string(), 5, first);

        tokio::time::advance(std::time::Duration::from_secs(10)).await;
        let second = Instant::now();
        store.insert("squat".to_string(), 8, second);

        let entry = store.get(&"squat".to_string()).expect("entry present");
        assert_eq!(*entry.value(), 8);
        assert_eq!(entry.inserted_at(), second);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remove_is_idempotent() {
        let mut store: CollectionStore<String, u32> = CollectionStore::new();
        store.insert("squat".to_string(), 5, Instant::now());

        assert!(store.remove(&"squat".to_string()));
        assert!(!store.remove(&"squat".to_string()));
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear() {
        let mut store: CollectionStore<u32, &str> = CollectionStore::new();
        let now = Instant::now();
        store.insert(1, "a", now);
        store.insert(2, "b", now);

        store.clear();
        assert!(store.is_empty());
        assert!(!store.contains(&1));
    }
}
