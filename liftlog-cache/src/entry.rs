//! Timestamped value wrapper for TTL-gated collections.

use std::time::Duration;
use tokio::time::Instant;

/// A cached value paired with its insertion time.
///
/// The insertion time is duplicated into the coordinator's shared timestamp
/// index under the entry's composite key; the single coordinator mutation
/// path keeps the two in lockstep. Uses `tokio::time::Instant` so expiry is
/// deterministic under paused test time.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    value: T,
    inserted_at: Instant,
}

impl<T> CacheEntry<T> {
    /// Wrap a value with the given insertion time.
    pub fn new(value: T, inserted_at: Instant) -> Self {
        Self { value, inserted_at }
    }

    /// Borrow the cached value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume the entry and return the value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// When the value was inserted.
    pub fn inserted_at(&self) -> Instant {
        self.inserted_at
    }

    /// Whether the entry has outlived the TTL as of `now`.
    ///
    /// The boundary is inclusive: an entry exactly `ttl` old is expired.
    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.inserted_at) >= ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fresh_entry_is_not_expired() {
        let entry = CacheEntry::new("value", Instant::now());
        let ttl = Duration::from_secs(60);
        assert!(!entry.is_expired(ttl, Instant::now()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expires_at_exactly_ttl() {
        let entry = CacheEntry::new("value", Instant::now());
        let ttl = Duration::from_secs(60);

        tokio::time::advance(Duration::from_secs(59)).await;
        assert!(!entry.is_expired(ttl, Instant::now()));

        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(entry.is_expired(ttl, Instant::now()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_now_before_insertion_is_not_expired() {
        // Saturating arithmetic: an entry can never be expired at a
        // timestamp earlier than its own insertion.
        let later = Instant::now() + Duration::from_secs(10);
        let entry = CacheEntry::new("value", later);
        assert!(!entry.is_expired(Duration::from_secs(1), Instant::now()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_into_value() {
        let entry = CacheEntry::new(vec![1, 2, 3], Instant::now());
        assert_eq!(entry.value(), &vec![1, 2, 3]);
        assert_eq!(entry.into_value(), vec![1, 2, 3]);
    }
}
