//! Gauntlet HTTP Server - Basic-auth guarded REST API over the stone catalog
//!
//! Every request flows through a fixed middleware chain (panic recovery,
//! request logging, Basic authentication) before reaching the router.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod recover;
pub mod state;
pub mod telemetry;

pub use app::{app, routes};
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use middleware::{chain, into_handler, Handler, Middleware};
pub use state::AppState;
