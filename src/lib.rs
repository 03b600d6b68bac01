//! # RankKV
//!
//! An in-memory key-value store with:
//! - Exact key lookup of the last written value
//! - An approximate top-ranked view of recent writes (bounded max-heap)
//! - Rank and sorted-queue reads over that view
//! - HTTP/JSON client protocol
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server                             │
//! │          /get  /set  /get_rank  /get_sorted_queue            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Store                                 │
//! │               (one RwLock over both parts)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Exact Map  │          │ RankedSet   │
//!   │ key → text  │          │ (max-heap)  │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod ranked;
pub mod store;
pub mod network;
pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KvError, Result};
pub use config::Config;
pub use ranked::{Item, RankedSet};
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of RankKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
