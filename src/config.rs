//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::error::{CacheError, Result};
use crate::search::{SEARCH_CACHE_MAX_SIZE, SEARCH_CACHE_TTL_MS};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// Sliding TTL in milliseconds, 0 disables expiry
    pub ttl_ms: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// Missing or unparseable values fall back to the defaults.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 200)
    /// - `CACHE_TTL_MS` - Sliding TTL in milliseconds (default: 5000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_entries: env_or("MAX_ENTRIES", defaults.max_entries),
            ttl_ms: env_or("CACHE_TTL_MS", defaults.ttl_ms),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
        }
    }

    /// Rejects values the cache or cleanup task cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.max_entries == 0 {
            return Err(CacheError::InvalidConfig(
                "MAX_ENTRIES must be greater than 0".to_string(),
            ));
        }
        if self.cleanup_interval == 0 {
            return Err(CacheError::InvalidConfig(
                "CLEANUP_INTERVAL must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: SEARCH_CACHE_MAX_SIZE,
            ttl_ms: SEARCH_CACHE_TTL_MS,
            server_port: 3000,
            cleanup_interval: 1,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_entries, 200);
        assert_eq!(config.ttl_ms, 5_000);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("MAX_ENTRIES");
        env::remove_var("CACHE_TTL_MS");
        env::remove_var("SERVER_PORT");
        env::remove_var("CLEANUP_INTERVAL");

        assert_eq!(Config::from_env(), Config::default());
    }

    #[test]
    fn test_env_or_falls_back_on_garbage() {
        env::set_var("NOTE_CACHE_TEST_GARBAGE", "not-a-number");
        assert_eq!(env_or("NOTE_CACHE_TEST_GARBAGE", 7u64), 7);
        env::remove_var("NOTE_CACHE_TEST_GARBAGE");
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let config = Config {
            max_entries: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(CacheError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let config = Config {
            cleanup_interval: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(CacheError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_allows_disabled_ttl() {
        let config = Config {
            ttl_ms: 0,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }
}
