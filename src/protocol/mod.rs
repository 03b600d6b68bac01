//! Protocol Module
//!
//! Defines the HTTP/JSON protocol for client-server communication.
//!
//! ## Endpoints
//! ```text
//! ┌────────────────────┬────────┬───────────────────────┬──────────────────────────┐
//! │ Path               │ Method │ Request body          │ Response body            │
//! ├────────────────────┼────────┼───────────────────────┼──────────────────────────┤
//! │ /get               │ POST   │ {"key"}               │ {"key", "value": string} │
//! │ /set               │ POST   │ {"key", "value": int} │ {"message"}              │
//! │ /get_rank          │ POST   │ {"rank": int}         │ {"key", "value": int}    │
//! │ /get_sorted_queue  │ any    │ (none)                │ {"sorted_queue": [int]}  │
//! └────────────────────┴────────┴───────────────────────┴──────────────────────────┘
//! ```
//!
//! ### Status Codes
//! - 200: OK, JSON body
//! - 400: body could not be decoded
//! - 404: unknown path
//! - 405: wrong method
//! - 500: key not found, invalid rank, or any other failure (plain text)

mod command;
mod response;
mod codec;

pub use command::{Command, CommandType, GetRankRequest, GetRequest, SetRequest};
pub use response::{GetRankResponse, GetResponse, Reply, SetResponse, SortedQueueResponse};
pub use codec::{decode_command, decode_reply, encode_command, encode_reply};
