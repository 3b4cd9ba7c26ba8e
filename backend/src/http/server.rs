//! Sequential accept loop.
//!
//! One connection is accepted, exactly one request is served on it and the
//! connection is closed before the next `accept`. A slow client holds the
//! loop: there are no read or write timeouts.

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use hyper_util::service::TowerToHyperService;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info, warn};

use crate::config::ServerConfig;

/// Startup failures.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Bind the listening socket described by `config`.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, ServerError> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    if let Ok(local) = listener.local_addr() {
        info!("Server listening on http://{}", local);
    }
    Ok(listener)
}

/// Run the accept loop until `shutdown` resolves.
///
/// Per-connection failures are logged and never end the loop. A shutdown
/// requested while a connection is in flight takes effect once it closes.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F)
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        let accepted = tokio::select! {
            _ = &mut shutdown => {
                info!("Shutdown requested, accept loop stopped");
                return;
            }
            accepted = listener.accept() => accepted,
        };

        match accepted {
            Ok((stream, peer)) => serve_connection(stream, peer, router.clone()).await,
            Err(err) => {
                error!(error = %err, "Failed to accept connection");
                // Usually fd exhaustion; back off instead of spinning.
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
        }
    }
}

async fn serve_connection(stream: TcpStream, peer: SocketAddr, router: Router) {
    debug!(%peer, "connection accepted");

    let io = TokioIo::new(stream);
    let service = TowerToHyperService::new(router);
    let result = http1::Builder::new()
        .keep_alive(false)
        .serve_connection(io, service)
        .await;

    match result {
        Ok(()) => debug!(%peer, "connection closed"),
        Err(err) => warn!(%peer, error = %err, "connection failed"),
    }
}
