//! Middleware chain composition
//!
//! A [`Middleware`] turns a [`Handler`] into another [`Handler`] that wraps
//! it. [`chain`] composes an ordered list so that the first entry is the
//! outermost wrapper: it sees the request first and the response last.

use axum::{extract::Request, response::Response};
use std::convert::Infallible;
use std::sync::Arc;
use tower::{util::BoxCloneService, Layer, Service};

/// Type-erased request handler that never fails at the service level
pub type Handler = BoxCloneService<Request, Response, Infallible>;

/// A shareable handler-to-handler transformation
#[derive(Clone)]
pub struct Middleware(Arc<dyn Fn(Handler) -> Handler + Send + Sync>);

impl Middleware {
    /// Build a middleware from a wrapping function
    pub fn new<F>(wrap: F) -> Self
    where
        F: Fn(Handler) -> Handler + Send + Sync + 'static,
    {
        Self(Arc::new(wrap))
    }

    /// Build a middleware from any tower [`Layer`] producing an infallible service
    pub fn from_layer<L>(layer: L) -> Self
    where
        L: Layer<Handler> + Send + Sync + 'static,
        L::Service: Service<Request, Response = Response, Error = Infallible> + Clone + Send + 'static,
        <L::Service as Service<Request>>::Future: Send + 'static,
    {
        Self::new(move |next| BoxCloneService::new(layer.layer(next)))
    }

    /// Wrap `next` with this middleware
    pub fn wrap(&self, next: Handler) -> Handler {
        (self.0)(next)
    }
}

impl std::fmt::Debug for Middleware {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Middleware").finish_non_exhaustive()
    }
}

/// Erase a service into a [`Handler`]
pub fn into_handler<S>(service: S) -> Handler
where
    S: Service<Request, Response = Response, Error = Infallible> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    BoxCloneService::new(service)
}

/// Compose middleware into one; the first element ends up outermost.
pub fn chain<I>(middlewares: I) -> Middleware
where
    I: IntoIterator<Item = Middleware>,
{
    let middlewares: Vec<Middleware> = middlewares.into_iter().collect();

    Middleware::new(move |handler| {
        middlewares
            .iter()
            .rev()
            .fold(handler, |next, middleware| middleware.wrap(next))
    })
}
