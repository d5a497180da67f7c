//! Application state

use gauntlet_core::{
    ActivityReporter, IdentityVerifier, InMemoryIdentityVerifier, InMemoryStoneCatalog,
    LoggingActivityReporter, StoneCatalog,
};
use std::sync::Arc;

/// Collaborators shared across handlers and middleware
#[derive(Clone)]
pub struct AppState {
    /// Stone catalog
    pub catalog: Arc<dyn StoneCatalog>,

    /// Activity report sink
    pub reporter: Arc<dyn ActivityReporter>,

    /// Basic auth credential verifier
    pub verifier: Arc<dyn IdentityVerifier>,
}

impl AppState {
    /// Create application state from explicit collaborators
    pub fn new(
        catalog: Arc<dyn StoneCatalog>,
        reporter: Arc<dyn ActivityReporter>,
        verifier: Arc<dyn IdentityVerifier>,
    ) -> Self {
        Self {
            catalog,
            reporter,
            verifier,
        }
    }

    /// Create application state with the in-memory implementations
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryStoneCatalog::new()),
            Arc::new(LoggingActivityReporter::new()),
            Arc::new(InMemoryIdentityVerifier::new()),
        )
    }
}
