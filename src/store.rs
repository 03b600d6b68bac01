//! Store Module
//!
//! The key-value store that coordinates the exact map and the ranked set.
//!
//! ## Responsibilities
//! - Exact key lookup of the last written value (as decimal text)
//! - Forward every write to the ranked set
//! - Serve rank and sorted-queue reads from a freshly sorted ranked set
//! - Serialize access with a single reader/writer lock

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::config::Config;
use crate::error::{KvError, Result};
use crate::protocol::{Command, Reply};
use crate::ranked::{Item, RankedSet};

/// State guarded by the store lock
struct Inner {
    /// Last written value per key, rendered as decimal text
    exact: HashMap<String, String>,

    /// Approximate top-ranked view of all writes
    ranked: RankedSet,
}

/// The in-memory key-value store
///
/// ## Concurrency Model
///
/// One `RwLock` covers both the exact map and the ranked set:
///
/// - **Shared**: `get` (exact map only)
/// - **Exclusive**: `set`, `get_rank`, `sorted_values`
///
/// Rank reads take the write lock because `RankedSet::sort` reorders the
/// shared storage before indexing into it.
pub struct Store {
    /// Store configuration
    config: Config,

    inner: RwLock<Inner>,
}

impl Store {
    /// Create an empty store
    ///
    /// Rejects configurations the ranked set cannot be built from.
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        let ranked = RankedSet::from_config(&config)?;

        tracing::debug!(
            capacity = config.capacity,
            insertion_threshold = config.insertion_threshold,
            exposure_cap = config.exposure_cap,
            "store opened"
        );

        Ok(Self {
            config,
            inner: RwLock::new(Inner {
                exact: HashMap::new(),
                ranked,
            }),
        })
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers
    pub fn execute(&self, command: Command) -> Result<Reply> {
        match command {
            Command::Get { key } => {
                let value = self.get(&key)?;
                Ok(Reply::Value { key, value })
            }
            Command::Set { key, value } => {
                self.set(&key, value);
                Ok(Reply::written(&key, value))
            }
            Command::GetRank { rank } => {
                let item = self.get_rank(rank)?;
                Ok(Reply::Ranked {
                    key: item.key,
                    value: item.value,
                })
            }
            Command::GetSortedQueue => Ok(Reply::SortedQueue(self.sorted_values())),
        }
    }

    /// Get the decimal text stored for a key
    pub fn get(&self, key: &str) -> Result<String> {
        let inner = self.inner.read();

        tracing::trace!(key, "get");

        inner
            .exact
            .get(key)
            .cloned()
            .ok_or_else(|| KvError::KeyNotFound(key.to_string()))
    }

    /// Store a value and offer it to the ranked set
    ///
    /// Both effects happen under one exclusive lock acquisition.
    pub fn set(&self, key: &str, value: i64) {
        let mut inner = self.inner.write();

        inner.exact.insert(key.to_string(), value.to_string());
        inner.ranked.insert(Item::new(key, value));

        tracing::debug!(key, value, ranked_len = inner.ranked.len(), "set");
    }

    /// Item at zero-based descending rank
    ///
    /// Negative ranks and ranks at or beyond the configured capacity are
    /// rejected with `InvalidRank` before touching the set. Ranks below
    /// capacity but past the current size fail with `RankOutOfRange`.
    pub fn get_rank(&self, rank: i64) -> Result<Item> {
        let index = match usize::try_from(rank) {
            Ok(index) if index < self.config.capacity => index,
            _ => {
                return Err(KvError::InvalidRank {
                    rank,
                    limit: self.config.capacity,
                })
            }
        };

        let mut inner = self.inner.write();
        inner.ranked.sort();
        inner.ranked.get_rank(index).cloned()
    }

    /// Leading values in descending order, capped at the exposure limit
    pub fn sorted_values(&self) -> Vec<i64> {
        let mut inner = self.inner.write();
        inner.ranked.sort();
        inner.ranked.sorted_values()
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of distinct keys in the exact map
    pub fn key_count(&self) -> usize {
        self.inner.read().exact.len()
    }

    /// Number of items currently retained by the ranked set
    pub fn ranked_len(&self) -> usize {
        self.inner.read().ranked.len()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
