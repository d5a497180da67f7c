//! Request logging middleware

use crate::middleware::Middleware;
use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{field::Empty, info, info_span, Instrument};

/// Header carrying the caller-supplied request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Open a request span carrying method, path and request id, and emit one
/// `request end` line with the elapsed time once the inner handler returns.
///
/// The span is the request-scoped logger: everything logged further down the
/// chain (including the identity recorded by authentication) is attached to it.
pub fn log_requests() -> Middleware {
    Middleware::from_layer(axum::middleware::from_fn(log_request))
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();

    let span = info_span!(
        "request",
        http_method = %method,
        http_url_path = %path,
        request_id = %request_id,
        user_id = Empty,
        hero_name = Empty,
    );

    let started_at = Instant::now();
    let response = next.run(request).instrument(span.clone()).await;
    let elapsed_time = u64::try_from(started_at.elapsed().as_nanos()).unwrap_or(u64::MAX);

    span.in_scope(|| {
        info!(
            http_method = %method,
            http_url_path = %path,
            request_id = %request_id,
            elapsed_time,
            status = response.status().as_u16(),
            "request end"
        );
    });

    response
}
