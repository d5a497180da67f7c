//! Router assembly

use crate::auth::authenticate;
use crate::handlers;
use crate::logging::log_requests;
use crate::middleware::{chain, into_handler};
use crate::recover::recover;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Bare routes without any middleware
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/stones", get(handlers::list_stones))
        .route("/stones/report", post(handlers::report_activity))
        .route("/stones/:name", get(handlers::get_stone))
        .with_state(state)
}

/// Routes wrapped in recovery, logging and authentication, outermost first
pub fn app(state: AppState) -> Router {
    let middleware = chain([
        recover(),
        log_requests(),
        authenticate(state.verifier.clone()),
    ]);
    let handler = middleware.wrap(into_handler(routes(state)));

    Router::new().fallback_service(handler)
}
