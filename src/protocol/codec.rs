//! Protocol codec
//!
//! JSON encoding and decoding for request and response bodies.
//!
//! The endpoint (and therefore the command type) comes from the URL path,
//! so decoders take the `CommandType` alongside the body bytes.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{KvError, Result};
use super::{
    Command, CommandType, GetRankRequest, GetRankResponse, GetRequest, GetResponse, Reply,
    SetRequest, SetResponse, SortedQueueResponse,
};

// =============================================================================
// Command Encoding/Decoding
// =============================================================================

/// Encode a command's request body
///
/// `GetSortedQueue` carries no body and encodes to an empty vec.
pub fn encode_command(command: &Command) -> Result<Vec<u8>> {
    match command {
        Command::Get { key } => to_json(&GetRequest { key: key.clone() }),
        Command::Set { key, value } => to_json(&SetRequest {
            key: key.clone(),
            value: *value,
        }),
        Command::GetRank { rank } => to_json(&GetRankRequest { rank: *rank }),
        Command::GetSortedQueue => Ok(Vec::new()),
    }
}

/// Decode a request body for the given command type
///
/// The body of `GetSortedQueue` is ignored.
pub fn decode_command(command_type: CommandType, body: &[u8]) -> Result<Command> {
    match command_type {
        CommandType::Get => {
            let req: GetRequest = from_json(body)?;
            Ok(Command::Get { key: req.key })
        }
        CommandType::Set => {
            let req: SetRequest = from_json(body)?;
            Ok(Command::Set {
                key: req.key,
                value: req.value,
            })
        }
        CommandType::GetRank => {
            let req: GetRankRequest = from_json(body)?;
            Ok(Command::GetRank { rank: req.rank })
        }
        CommandType::GetSortedQueue => Ok(Command::GetSortedQueue),
    }
}

// =============================================================================
// Reply Encoding/Decoding
// =============================================================================

/// Encode a reply as a JSON response body
pub fn encode_reply(reply: &Reply) -> Result<Vec<u8>> {
    match reply {
        Reply::Value { key, value } => to_json(&GetResponse {
            key: key.clone(),
            value: value.clone(),
        }),
        Reply::Written { message } => to_json(&SetResponse {
            message: message.clone(),
        }),
        Reply::Ranked { key, value } => to_json(&GetRankResponse {
            key: key.clone(),
            value: *value,
        }),
        Reply::SortedQueue(values) => to_json(&SortedQueueResponse {
            sorted_queue: values.clone(),
        }),
    }
}

/// Decode a JSON response body produced for the given command type
pub fn decode_reply(command_type: CommandType, body: &[u8]) -> Result<Reply> {
    match command_type {
        CommandType::Get => {
            let resp: GetResponse = from_json(body)?;
            Ok(Reply::Value {
                key: resp.key,
                value: resp.value,
            })
        }
        CommandType::Set => {
            let resp: SetResponse = from_json(body)?;
            Ok(Reply::Written {
                message: resp.message,
            })
        }
        CommandType::GetRank => {
            let resp: GetRankResponse = from_json(body)?;
            Ok(Reply::Ranked {
                key: resp.key,
                value: resp.value,
            })
        }
        CommandType::GetSortedQueue => {
            let resp: SortedQueueResponse = from_json(body)?;
            Ok(Reply::SortedQueue(resp.sorted_queue))
        }
    }
}

// =============================================================================
// JSON helpers
// =============================================================================

fn to_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| KvError::Serialization(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| KvError::Protocol(format!("Malformed JSON body: {}", e)))
}
