//! Gauntlet Core - Domain layer for the stone catalog service
//!
//! This crate holds the collaborators the HTTP layer talks to: the identity
//! verifier behind Basic auth, the read-only stone catalog, and the activity
//! reporter. Each one is a trait with an in-memory implementation so that a
//! persistent backend can be swapped in behind the same contract.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod identity;
pub mod report;

pub use catalog::{InMemoryStoneCatalog, InfinityStone, StoneCatalog, StoneStatus};
pub use error::{AuthError, CatalogError, GauntletError, Result};
pub use identity::{IdentityVerifier, InMemoryIdentityVerifier, User};
pub use report::{ActivityReporter, LoggingActivityReporter, Report};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.contains('.'));
    }
}
