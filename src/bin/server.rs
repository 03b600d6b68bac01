//! RankKV Server Binary
//!
//! Starts the HTTP server for RankKV.

use std::sync::Arc;
use clap::Parser;
use rankkv::{Config, Store};
use rankkv::network::Server;
use tracing_subscriber::{fmt, EnvFilter};

/// RankKV Server
#[derive(Parser, Debug)]
#[command(name = "rankkv-server")]
#[command(about = "In-memory key-value store with a ranked view of recent values")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "0.0.0.0:7069")]
    listen: String,

    /// Maximum number of items kept in the ranked set
    #[arg(short, long, default_value = "100")]
    capacity: usize,

    /// Values above this are promoted toward the heap root on insert
    #[arg(short, long, default_value = "100")]
    threshold: i64,

    /// Maximum number of values returned by get_sorted_queue
    #[arg(short, long, default_value = "100")]
    exposure_cap: usize,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rankkv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("RankKV Server v{}", rankkv::VERSION);
    tracing::info!("Listen address: {}", args.listen);

    // Build config from args
    let config = Config::builder()
        .listen_addr(&args.listen)
        .capacity(args.capacity)
        .insertion_threshold(args.threshold)
        .exposure_cap(args.exposure_cap)
        .build();

    // Open store
    let store = match Store::open(config.clone()) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Store initialized successfully");

    // Start server, stopping on Ctrl+C
    let server = Server::new(config, store);
    if let Err(e) = server.run(shutdown_signal()).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}

/// Resolves on Ctrl+C
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, initiating shutdown..."),
        Err(e) => tracing::error!("Failed to listen for Ctrl+C: {}", e),
    }
}
