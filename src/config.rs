//! Configuration for RankKV
//!
//! Centralized configuration with sensible defaults.

use std::net::SocketAddr;

use crate::error::{KvError, Result};

/// Default ranked set capacity (the sort queue limit)
pub const DEFAULT_CAPACITY: usize = 100;

/// Default value above which an inserted item is heap-repaired immediately
pub const DEFAULT_INSERTION_THRESHOLD: i64 = 100;

/// Default number of leading values returned by the sorted queue read
pub const DEFAULT_EXPOSURE_CAP: usize = 100;

/// Main configuration for a RankKV instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Ranked Set Configuration
    // -------------------------------------------------------------------------
    /// Maximum number of items retained by the ranked set.
    /// Rank queries at or beyond this bound are rejected outright.
    pub capacity: usize,

    /// Items with a value strictly greater than this are sifted toward the
    /// root on insert; the rest are appended without repair
    pub insertion_threshold: i64,

    /// Max number of values exposed by the sorted queue read
    pub exposure_cap: usize,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            insertion_threshold: DEFAULT_INSERTION_THRESHOLD,
            exposure_cap: DEFAULT_EXPOSURE_CAP,
            listen_addr: "0.0.0.0:7069".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the configuration for values the store cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(KvError::Config("capacity must be at least 1".to_string()));
        }
        if self.exposure_cap == 0 {
            return Err(KvError::Config(
                "exposure cap must be at least 1".to_string(),
            ));
        }
        self.socket_addr()?;
        Ok(())
    }

    /// Parse the listen address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr.parse().map_err(|e| {
            KvError::Config(format!("invalid listen address {:?}: {}", self.listen_addr, e))
        })
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the ranked set capacity
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Set the heap-repair threshold
    pub fn insertion_threshold(mut self, threshold: i64) -> Self {
        self.config.insertion_threshold = threshold;
        self
    }

    /// Set how many values the sorted queue read returns
    pub fn exposure_cap(mut self, cap: usize) -> Self {
        self.config.exposure_cap = cap;
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.capacity, 100);
        assert_eq!(config.insertion_threshold, 100);
        assert_eq!(config.exposure_cap, 100);
        assert_eq!(config.socket_addr().unwrap().port(), 7069);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = Config::builder().capacity(0).build();
        assert!(matches!(config.validate(), Err(KvError::Config(_))));
    }

    #[test]
    fn test_zero_exposure_cap_rejected() {
        let config = Config::builder().exposure_cap(0).build();
        assert!(matches!(config.validate(), Err(KvError::Config(_))));
    }

    #[test]
    fn test_bad_listen_addr_rejected() {
        let config = Config::builder().listen_addr("not an address").build();
        assert!(matches!(config.validate(), Err(KvError::Config(_))));
    }
}
