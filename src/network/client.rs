//! HTTP Client
//!
//! Typed client for a running RankKV server.

use hyper::client::HttpConnector;
use hyper::header::CONTENT_TYPE;
use hyper::{Body, Method, Request, StatusCode};

use crate::error::{KvError, Result};
use crate::protocol::{decode_reply, encode_command, Command, Reply};
use crate::ranked::Item;

/// Client for the four store endpoints
#[derive(Clone)]
pub struct Client {
    /// Server address (host:port)
    addr: String,

    http: hyper::Client<HttpConnector>,
}

impl Client {
    /// Create a client for a server at `host:port`
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            http: hyper::Client::new(),
        }
    }

    /// Get the decimal text stored for a key
    pub async fn get(&self, key: &str) -> Result<String> {
        match self.execute(Command::Get { key: key.to_string() }).await? {
            Reply::Value { value, .. } => Ok(value),
            other => Err(unexpected(other)),
        }
    }

    /// Write a value; returns the server's acknowledgement message
    pub async fn set(&self, key: &str, value: i64) -> Result<String> {
        let command = Command::Set {
            key: key.to_string(),
            value,
        };
        match self.execute(command).await? {
            Reply::Written { message } => Ok(message),
            other => Err(unexpected(other)),
        }
    }

    /// Item at a descending rank
    pub async fn get_rank(&self, rank: i64) -> Result<Item> {
        match self.execute(Command::GetRank { rank }).await? {
            Reply::Ranked { key, value } => Ok(Item::new(key, value)),
            other => Err(unexpected(other)),
        }
    }

    /// Leading values in descending order
    pub async fn sorted_queue(&self) -> Result<Vec<i64>> {
        match self.execute(Command::GetSortedQueue).await? {
            Reply::SortedQueue(values) => Ok(values),
            other => Err(unexpected(other)),
        }
    }

    /// Send a command and decode the reply
    ///
    /// A 500 for a `Get` is reported as `KeyNotFound`; every other
    /// non-200 status becomes `KvError::Remote`.
    pub async fn execute(&self, command: Command) -> Result<Reply> {
        let command_type = command.command_type();
        let body = encode_command(&command)?;

        let request = Request::builder()
            .method(Method::POST)
            .uri(format!("http://{}{}", self.addr, command_type.path()))
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .map_err(|e| KvError::Protocol(format!("Failed to build request: {}", e)))?;

        let response = self.http.request(request).await?;
        let status = response.status();
        let bytes = hyper::body::to_bytes(response.into_body()).await?;

        if status == StatusCode::OK {
            return decode_reply(command_type, &bytes);
        }

        let message = String::from_utf8_lossy(&bytes).trim_end().to_string();
        tracing::debug!("{} returned {}: {}", command_type.path(), status, message);

        match command {
            Command::Get { key } if status == StatusCode::INTERNAL_SERVER_ERROR => {
                Err(KvError::KeyNotFound(key))
            }
            _ => Err(KvError::Remote {
                status: status.as_u16(),
                message,
            }),
        }
    }
}

fn unexpected(reply: Reply) -> KvError {
    KvError::Protocol(format!("Unexpected reply: {:?}", reply))
}
