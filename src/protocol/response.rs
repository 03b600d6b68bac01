//! Response definitions
//!
//! Represents successful replies to clients. Failures travel as plain-text
//! HTTP error bodies and are not modelled here.

use serde::{Deserialize, Serialize};

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Exact lookup result; the value is the stored decimal text
    Value { key: String, value: String },

    /// Write acknowledgement
    Written { message: String },

    /// Item at the requested rank
    Ranked { key: String, value: i64 },

    /// Leading values in descending order
    SortedQueue(Vec<i64>),
}

impl Reply {
    /// Acknowledgement for a completed `set`
    pub fn written(key: &str, value: i64) -> Self {
        Reply::Written {
            message: format!("key: {},value: {}, write success", key, value),
        }
    }
}

// =============================================================================
// Response Bodies
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetResponse {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRankResponse {
    pub key: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortedQueueResponse {
    pub sorted_queue: Vec<i64>,
}
