//! Command definitions
//!
//! Represents commands from clients.

use serde::{Deserialize, Serialize};

/// Command types, one per endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Get,
    Set,
    GetRank,
    GetSortedQueue,
}

impl CommandType {
    pub const ALL: [CommandType; 4] = [
        CommandType::Get,
        CommandType::Set,
        CommandType::GetRank,
        CommandType::GetSortedQueue,
    ];

    /// URL path serving this command
    pub fn path(self) -> &'static str {
        match self {
            CommandType::Get => "/get",
            CommandType::Set => "/set",
            CommandType::GetRank => "/get_rank",
            CommandType::GetSortedQueue => "/get_sorted_queue",
        }
    }

    /// Look up the command served at a URL path
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.path() == path)
    }

    /// Whether the endpoint rejects methods other than POST
    pub fn requires_post(self) -> bool {
        !matches!(self, CommandType::GetSortedQueue)
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Get a value by key
    Get { key: String },

    /// Set a key to an integer value
    Set { key: String, value: i64 },

    /// Get the item at a descending rank
    GetRank { rank: i64 },

    /// Get the leading sorted values
    GetSortedQueue,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Get { .. } => CommandType::Get,
            Command::Set { .. } => CommandType::Set,
            Command::GetRank { .. } => CommandType::GetRank,
            Command::GetSortedQueue => CommandType::GetSortedQueue,
        }
    }
}

// =============================================================================
// Request Bodies
// =============================================================================
//
// Missing fields decode to their zero value: `{}` on `/get_rank` reads rank 0,
// `{"key":"a"}` on `/set` writes 0. Only unparsable bodies are rejected.

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetRequest {
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetRequest {
    pub key: String,
    pub value: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetRankRequest {
    pub rank: i64,
}
