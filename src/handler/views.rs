//! View handlers for the application routes.

use super::types::{HandlerResult, RequestContext};
use serde_json::Value;

/// `GET /` — homepage handler.
pub async fn home(_ctx: RequestContext) -> HandlerResult {
    Ok(Some(Value::String("ploplop".to_string())))
}
