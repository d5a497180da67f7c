//! Error types for Gauntlet

use thiserror::Error;

/// Credential verification failure.
///
/// Carries no detail about which half of the pair was wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Username/password pair did not match
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Catalog lookup and construction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No stone with this name
    #[error("stone {name} not found")]
    NotFound {
        /// Name that was looked up
        name: String,
    },

    /// Two stones share a name
    #[error("duplicate stone name: {0}")]
    DuplicateStone(String),
}

/// Main error type for Gauntlet operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GauntletError {
    /// Authentication failed
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Catalog error
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Result type alias for Gauntlet operations
pub type Result<T> = std::result::Result<T, GauntletError>;
