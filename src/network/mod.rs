//! Network Module
//!
//! HTTP server, request handling and client.
//!
//! ## Architecture
//! - hyper server on the tokio runtime
//! - One `handle_request` call per request, routed by URL path
//! - Commands executed synchronously against the shared `Store`

mod server;
mod handler;
mod client;

pub use server::Server;
pub use handler::handle_request;
pub use client::Client;
