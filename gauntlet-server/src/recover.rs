//! Panic recovery boundary

use crate::error::ApiError;
use crate::middleware::{into_handler, Middleware};
use axum::{
    body::{Body, Bytes, HttpBody},
    http,
    response::{IntoResponse, Response},
    BoxError,
};
use std::any::Any;
use tower::{util::MapResponseLayer, Layer};
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;

/// Convert a panic anywhere inside the wrapped handler into a plain 500.
///
/// Meant to be the outermost middleware so nothing escapes to the connection.
pub fn recover() -> Middleware {
    Middleware::new(|next| {
        let caught = CatchPanicLayer::custom(panic_response).layer(next);
        into_handler(MapResponseLayer::new(into_axum_response).layer(caught))
    })
}

fn into_axum_response<B>(response: http::Response<B>) -> Response
where
    B: HttpBody<Data = Bytes> + Send + 'static,
    B::Error: Into<BoxError>,
{
    response.map(Body::new)
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else {
        "non-string panic payload"
    };

    error!(error = %detail, "recovered from panic");
    ApiError::Internal(detail.to_string()).into_response()
}
