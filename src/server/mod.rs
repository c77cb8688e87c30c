//! Server module
//!
//! Listener construction, the accept loop, per-connection serving, and
//! shutdown signal handling.

pub mod connection;
pub mod listener;
pub mod signal;

use crate::handler::Router;
use crate::logger::Logger;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

/// Bind `addr` and serve until a shutdown signal arrives.
///
/// A bind failure is returned to the caller; accept errors are logged and
/// the loop keeps serving.
pub async fn run(addr: SocketAddr, router: Arc<Router>, logger: Arc<Logger>) -> io::Result<()> {
    let listener = listener::bind_listener(addr)?;

    let shutdown = signal::ShutdownSignal::new();
    shutdown.start();

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::handle_connection(
                            stream,
                            peer_addr,
                            Arc::clone(&router),
                            Arc::clone(&logger),
                        );
                    }
                    Err(e) => {
                        logger.error(&format!("failed to accept connection: {e}"));
                    }
                }
            }

            _ = shutdown.notified() => {
                logger.info("shutdown signal received, stopping listener");
                return Ok(());
            }
        }
    }
}
