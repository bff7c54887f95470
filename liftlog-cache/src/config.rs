//! Cache configuration.

use std::time::Duration;

/// Entries live for 30 minutes by default. Detail cards are cheap to
/// recompute and staleness tolerance is uniform across entity kinds, so a
/// single global TTL is the only expiry knob.
pub const DEFAULT_TTL_SECS: u64 = 30 * 60;

/// Template warming is capped to bound startup work.
pub const DEFAULT_WARM_TEMPLATE_LIMIT: usize = 20;

/// Configuration for the entity cache and its background sweeper.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long a cached entry stays readable after insertion.
    pub ttl: Duration,

    /// How often the background sweeper runs. The sweep exists to reclaim
    /// memory, not for correctness, so once per TTL interval is enough.
    pub sweep_interval: Duration,

    /// Maximum number of templates populated by one warming call.
    pub warm_template_limit: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(DEFAULT_TTL_SECS),
            sweep_interval: Duration::from_secs(DEFAULT_TTL_SECS),
            warm_template_limit: DEFAULT_WARM_TEMPLATE_LIMIT,
        }
    }
}

impl CacheConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the entry TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the sweep interval.
    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }

    /// Set the template warming cap.
    pub fn with_warm_template_limit(mut self, limit: usize) -> Self {
        self.warm_template_limit = limit;
        self
    }

    /// Create a config from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    ///
    /// # Environment Variables
    /// - `LIFTLOG_CACHE_TTL_SECS`: entry TTL (default: 1800)
    /// - `LIFTLOG_CACHE_SWEEP_INTERVAL_SECS`: sweep cadence (default: 1800)
    /// - `LIFTLOG_CACHE_WARM_TEMPLATE_LIMIT`: warming cap (default: 20)
    pub fn from_env() -> Self {
        let ttl = Duration::from_secs(
            std::env::var("LIFTLOG_CACHE_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TTL_SECS),
        );

        let sweep_interval = Duration::from_secs(
            std::env::var("LIFTLOG_CACHE_SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TTL_SECS),
        );

        let warm_template_limit = std::env::var("LIFTLOG_CACHE_WARM_TEMPLATE_LIMIT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_WARM_TEMPLATE_LIMIT);

        Self {
            ttl,
            sweep_interval,
            warm_template_limit,
        }
    }

    /// Create a configuration for development/testing with short expiry.
    pub fn development() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            sweep_interval: Duration::from_secs(60),
            warm_template_limit: DEFAULT_WARM_TEMPLATE_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(DEFAULT_TTL_SECS));
        assert_eq!(config.sweep_interval, Duration::from_secs(DEFAULT_TTL_SECS));
        assert_eq!(config.warm_template_limit, DEFAULT_WARM_TEMPLATE_LIMIT);
    }

    #[test]
    fn test_config_builder() {
        let config = CacheConfig::new()
            .with_ttl(Duration::from_secs(120))
            .with_sweep_interval(Duration::from_secs(30))
            .with_warm_template_limit(5);

        assert_eq!(config.ttl, Duration::from_secs(120));
        assert_eq!(config.sweep_interval, Duration::from_secs(30));
        assert_eq!(config.warm_template_limit, 5);
    }

    #[test]
    fn test_config_development() {
        let config = CacheConfig::development();
        assert_eq!(config.ttl, Duration::from_secs(60));
        assert_eq!(config.sweep_interval, Duration::from_secs(60));
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Without environment variables set, should use defaults
        let config = CacheConfig::from_env();
        assert_eq!(config.ttl, Duration::from_secs(DEFAULT_TTL_SECS));
        assert_eq!(config.warm_template_limit, DEFAULT_WARM_TEMPLATE_LIMIT);
    }
}
