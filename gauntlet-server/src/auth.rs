//! HTTP Basic authentication middleware

use crate::error::ApiError;
use crate::middleware::Middleware;
use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use gauntlet_core::IdentityVerifier;
use std::sync::Arc;
use tracing::{debug, info, Span};

/// Username/password pair taken from an `Authorization: Basic` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    /// User id part
    pub username: String,
    /// Password part
    pub password: String,
}

impl BasicCredentials {
    /// Extract credentials from request headers
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
        Self::parse(value)
    }

    /// Parse a raw `Authorization` value; the scheme is case-insensitive and
    /// the password is everything after the first `:`.
    pub fn parse(value: &str) -> Option<Self> {
        let (scheme, encoded) = value.split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }

        let decoded = STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;

        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// Reject requests without valid Basic credentials with 401.
///
/// Missing headers and wrong credentials are indistinguishable to the
/// caller. On success the identity is recorded on the current request span
/// and inserted into the request extensions.
pub fn authenticate(verifier: Arc<dyn IdentityVerifier>) -> Middleware {
    Middleware::from_layer(axum::middleware::from_fn_with_state(verifier, basic_auth))
}

async fn basic_auth(
    State(verifier): State<Arc<dyn IdentityVerifier>>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(credentials) = BasicCredentials::from_headers(request.headers()) else {
        debug!("missing or malformed basic auth");
        return ApiError::Unauthorized.into_response();
    };

    let user = match verifier.verify(&credentials.username, &credentials.password) {
        Ok(user) => user,
        Err(e) => {
            debug!(error = %e, "credential verification failed");
            return ApiError::Unauthorized.into_response();
        }
    };

    // Only the id and hero name go to the logs.
    let span = Span::current();
    span.record("user_id", user.id);
    span.record("hero_name", user.hero_name.as_str());
    info!(user_id = user.id, hero_name = %user.hero_name, "user logged");

    request.extensions_mut().insert(user);
    next.run(request).await
}
