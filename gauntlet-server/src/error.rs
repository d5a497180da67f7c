//! Error types for the HTTP API
//!
//! Every variant renders as its bare status text. Details carried by a
//! variant are for server-side logs only and never reach the client.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use gauntlet_core::CatalogError;
use thiserror::Error;

/// Challenge sent with every 401
pub const BASIC_CHALLENGE: &str = r#"Basic realm="gauntlet""#;

/// API error type
#[derive(Error, Debug)]
pub enum ApiError {
    /// Bad request (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing, malformed or rejected credentials (401)
    #[error("Unauthorized")]
    Unauthorized,

    /// Not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            CatalogError::DuplicateStone(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = status.canonical_reason().unwrap_or_default();
        let mut response = (status, body).into_response();

        if matches!(self, ApiError::Unauthorized) {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(BASIC_CHALLENGE),
            );
        }

        response
    }
}
