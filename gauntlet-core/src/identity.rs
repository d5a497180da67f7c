//! Identity verification for Basic auth credentials

use crate::error::AuthError;
use serde::{Deserialize, Serialize};

/// Authenticated caller.
///
/// Built fresh by the verifier on every successful match and dropped with the
/// request; nothing about it is retained across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric user id
    pub id: i64,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Display (hero) name
    pub hero_name: String,
}

/// Validates a username/password pair.
///
/// Called once per request, so implementations must be cheap and free of side
/// effects beyond the lookup itself.
pub trait IdentityVerifier: Send + Sync {
    /// Resolve the identity behind a credential pair
    fn verify(&self, username: &str, password: &str) -> Result<User, AuthError>;
}

const USERNAME: &str = "tony.stark";
const PASSWORD: &str = "howard";

/// Verifier holding a single fixed credential pair
#[derive(Debug, Default, Clone, Copy)]
pub struct InMemoryIdentityVerifier;

impl InMemoryIdentityVerifier {
    /// Create a new verifier
    pub fn new() -> Self {
        Self
    }
}

impl IdentityVerifier for InMemoryIdentityVerifier {
    fn verify(&self, username: &str, password: &str) -> Result<User, AuthError> {
        if username != USERNAME || password != PASSWORD {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(User {
            id: 1,
            first_name: "Tony".to_string(),
            last_name: "Stark".to_string(),
            hero_name: "Iron Man".to_string(),
        })
    }
}
