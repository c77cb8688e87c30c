//! Response adapter module
//!
//! Gives every route handler a uniform contract: handlers return a
//! [`HandlerResult`] and the adapter turns it into wire-level status,
//! headers, and body, centralizing JSON encoding, error-status mapping, and
//! access logging. Exactly one status line and body are written per request;
//! every failure is terminal for that request only.

use super::router::Router;
use super::types::{HandlerResult, RequestContext};
use crate::http::response;
use crate::logger::{AccessLogEntry, Logger};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use serde_json::Value;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Fixed body for a handler that reported success without a payload.
const NIL_RESPONSE_BODY: &str = "Internal server error. Check the logs.";

/// Fixed body for a payload that could not be serialized.
const MARSHAL_FAILURE_BODY: &str = "Error marshalling JSON";

/// Request entry point wired into hyper's `service_fn`.
///
/// Looks up the route, runs its handler, and converts the outcome into the
/// response. Unmatched requests get the router's default 404.
pub async fn dispatch<B>(
    req: Request<B>,
    remote_addr: SocketAddr,
    router: Arc<Router>,
    logger: Arc<Logger>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let ctx = RequestContext::new(remote_addr, req.method().clone(), req.uri().clone());

    let Some(handler) = router.lookup(&ctx.method, ctx.uri.path()) else {
        return Ok(response::build_404_response());
    };

    let result = handler(ctx.clone()).await;
    Ok(finish_response(result, &ctx, &logger))
}

/// Convert a handler outcome into the wire response.
///
/// * Failure: the underlying cause is logged, the client gets
///   `{"error":"<message>"}` with the handler's status code.
/// * Null/empty payload: logged as an internal error; the client gets a
///   fixed plain-text 500, not a JSON error body.
/// * Serialization failure: fixed plain-text 500, cause logged only.
/// * Success: JSON content type, serialized payload, and one access-log
///   line. The success path always records status 200.
pub fn finish_response(
    result: HandlerResult,
    ctx: &RequestContext,
    logger: &Logger,
) -> Response<Full<Bytes>> {
    let payload = match result {
        Err(err) => {
            logger.error(&err.cause.to_string());
            return response::build_error_response(err.status, &err.message);
        }
        Ok(None | Some(Value::Null)) => {
            logger.error("response from handler is nil");
            return response::build_500_text_response(NIL_RESPONSE_BODY);
        }
        Ok(Some(payload)) => payload,
    };

    let body = match serde_json::to_vec(&payload) {
        Ok(bytes) => bytes,
        Err(err) => {
            logger.error(&format!("failed to marshal response: {err}"));
            return response::build_500_text_response(MARSHAL_FAILURE_BODY);
        }
    };

    logger.access(&AccessLogEntry::new(
        ctx.remote_addr.to_string(),
        ctx.method.to_string(),
        ctx.uri.to_string(),
        200,
    ));
    response::build_json_response(body)
}
