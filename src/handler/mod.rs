//! Request handler module
//!
//! The route table, the handler contract, and the response adapter that
//! turns handler outcomes into HTTP responses.

pub mod adapter;
pub mod router;
pub mod types;
pub mod views;

pub use adapter::dispatch;
pub use router::Router;
pub use types::{HandlerError, HandlerResult, RequestContext};
