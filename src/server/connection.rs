// Connection handling module
// Serves one accepted TCP connection on its own spawned task.

use crate::handler::{self, Router};
use crate::logger::Logger;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;

/// Serve a single connection in a spawned task.
///
/// Wraps the stream in `TokioIo`, serves it with HTTP/1.1 keep-alive, and
/// routes every request through the response adapter. Connection-level
/// errors are logged and affect only this connection.
pub fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    router: Arc<Router>,
    logger: Arc<Logger>,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);
        let conn_logger = Arc::clone(&logger);

        let conn = http1::Builder::new().keep_alive(true).serve_connection(
            io,
            service_fn(move |req| {
                let router = Arc::clone(&router);
                let logger = Arc::clone(&logger);
                async move { handler::dispatch(req, peer_addr, router, logger).await }
            }),
        );

        if let Err(err) = conn.await {
            conn_logger.error(&format!(
                "failed to serve connection from {peer_addr}: {err:?}"
            ));
        }
    });
}
