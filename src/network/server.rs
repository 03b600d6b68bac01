//! HTTP Server
//!
//! Accepts connections and dispatches requests to the handler.

use std::convert::Infallible;
use std::future::Future;
use std::net::TcpListener;
use std::sync::Arc;

use hyper::service::{make_service_fn, service_fn};

use crate::config::Config;
use crate::error::Result;
use crate::store::Store;
use super::handle_request;

/// HTTP server for RankKV
pub struct Server {
    config: Config,
    store: Arc<Store>,
}

impl Server {
    /// Create a new server with the given config and store
    pub fn new(config: Config, store: Arc<Store>) -> Self {
        Self { config, store }
    }

    /// Bind the configured address and serve until `shutdown` resolves
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        let addr = self.config.socket_addr()?;
        let listener = TcpListener::bind(addr)?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    ///
    /// In-flight requests are allowed to finish before returning.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        listener.set_nonblocking(true)?;
        let local_addr = listener.local_addr()?;

        let store = self.store;
        let make_svc = make_service_fn(move |_conn| {
            let store = Arc::clone(&store);
            async move {
                Ok::<_, Infallible>(service_fn(move |request| {
                    handle_request(Arc::clone(&store), request)
                }))
            }
        });

        let server = hyper::Server::from_tcp(listener)?.serve(make_svc);

        tracing::info!("Listening on http://{}", local_addr);

        server.with_graceful_shutdown(shutdown).await?;

        tracing::info!("Server on {} shut down", local_addr);
        Ok(())
    }
}
