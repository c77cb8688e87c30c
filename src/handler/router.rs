//! Route table module
//!
//! Maps `(method, path)` pairs to handlers. The table is built mutably while
//! the process starts, then frozen behind an `Arc` for the serving phase;
//! no registration happens after the listener starts.

use super::types::{HandlerFuture, HandlerResult, RequestContext, RouteHandlerFn};
use hyper::Method;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

/// Exact-match route table.
#[derive(Default)]
pub struct Router {
    routes: HashMap<(Method, String), RouteHandlerFn>,
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Register a handler for one method and path.
    ///
    /// Registering the same `(method, path)` twice replaces the earlier
    /// entry; the last registration wins.
    pub fn register<F, Fut>(&mut self, method: Method, path: &str, handler: F)
    where
        F: Fn(RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        let handler: RouteHandlerFn =
            Arc::new(move |ctx| -> HandlerFuture { Box::pin(handler(ctx)) });
        self.routes.insert((method, path.to_string()), handler);
    }

    /// Find the handler registered for `(method, path)`, if any.
    #[must_use]
    pub fn lookup(&self, method: &Method, path: &str) -> Option<RouteHandlerFn> {
        self.routes
            .get(&(method.clone(), path.to_string()))
            .map(Arc::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn test_ctx(method: Method, path: &str) -> RequestContext {
        RequestContext::new("127.0.0.1:50000".parse().unwrap(), method, path.parse().unwrap())
    }

    #[test]
    fn test_lookup_unregistered_returns_none() {
        let mut router = Router::new();
        router.register(Method::GET, "/", |_ctx| async {
            Ok(Some(Value::String("home".to_string())))
        });

        assert!(router.lookup(&Method::GET, "/missing").is_none());
        assert!(router.lookup(&Method::POST, "/").is_none());
        assert!(router.lookup(&Method::HEAD, "/").is_none());
        assert!(router.lookup(&Method::GET, "/").is_some());
    }

    #[tokio::test]
    async fn test_duplicate_registration_last_wins() {
        let mut router = Router::new();
        router.register(Method::GET, "/", |_ctx| async {
            Ok(Some(Value::String("first".to_string())))
        });
        router.register(Method::GET, "/", |_ctx| async {
            Ok(Some(Value::String("second".to_string())))
        });

        let handler = router.lookup(&Method::GET, "/").unwrap();
        let result = handler(test_ctx(Method::GET, "/")).await.unwrap();
        assert_eq!(result, Some(Value::String("second".to_string())));
    }

    #[tokio::test]
    async fn test_method_is_part_of_the_key() {
        let mut router = Router::new();
        router.register(Method::GET, "/config", |_ctx| async {
            Ok(Some(Value::String("read".to_string())))
        });
        router.register(Method::PUT, "/config", |_ctx| async {
            Ok(Some(Value::String("write".to_string())))
        });

        let handler = router.lookup(&Method::PUT, "/config").unwrap();
        let result = handler(test_ctx(Method::PUT, "/config")).await.unwrap();
        assert_eq!(result, Some(Value::String("write".to_string())));
        assert!(router.lookup(&Method::GET, "/config").is_some());
    }
}
