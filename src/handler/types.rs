// Handler contract types
// Defines the tagged outcome every route handler returns and the request
// metadata it receives.

use hyper::{Method, StatusCode, Uri};
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed error carried as the underlying cause of a handler failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure reported by a route handler.
///
/// `message` is what the client sees; `cause` goes to the log only.
pub struct HandlerError {
    pub cause: BoxError,
    pub message: String,
    pub status: StatusCode,
}

impl HandlerError {
    #[allow(dead_code)]
    pub fn new(cause: impl Into<BoxError>, message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            cause: cause.into(),
            message: message.into(),
            status,
        }
    }
}

impl fmt::Debug for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerError")
            .field("message", &self.message)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Outcome of one request-handling invocation.
///
/// * `Ok(Some(value))` — success; `value` is serialized to the JSON body.
/// * `Ok(None)` — success with no payload; surfaced to the client as a
///   generic 500, never as a JSON error body.
/// * `Err(error)` — explicit failure with a user message and status code.
pub type HandlerResult = Result<Option<Value>, HandlerError>;

/// Immutable per-request metadata handed to route handlers. Handlers never
/// touch the response stream; they return a [`HandlerResult`] instead.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub remote_addr: SocketAddr,
    pub method: Method,
    pub uri: Uri,
}

impl RequestContext {
    pub fn new(remote_addr: SocketAddr, method: Method, uri: Uri) -> Self {
        Self {
            remote_addr,
            method,
            uri,
        }
    }
}

/// Boxed future returned by a route handler.
pub type HandlerFuture = Pin<Box<dyn Future<Output = HandlerResult> + Send>>;

/// A registered route handler, callable once per matched request.
pub type RouteHandlerFn = Arc<dyn Fn(RequestContext) -> HandlerFuture + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_handler_error_holds_user_message_and_status() {
        let err = HandlerError::new(
            io::Error::new(io::ErrorKind::Other, "disk on fire"),
            "bad thing",
            StatusCode::BAD_REQUEST,
        );
        assert_eq!(err.message, "bad thing");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.cause.to_string().contains("disk on fire"));
    }

    #[test]
    fn test_handler_error_from_string_cause() {
        let err = HandlerError::new(
            "no session".to_string(),
            "unauthorized",
            StatusCode::UNAUTHORIZED,
        );
        assert_eq!(err.cause.to_string(), "no session");
    }
}
