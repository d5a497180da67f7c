//! Suspicious activity reports

use serde::{Deserialize, Serialize};
use tracing::info;

/// Report about a stone, decoded from a request body.
///
/// Absent fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Report {
    /// Stone the report is about
    pub stone: String,
    /// Free-form report text
    pub report: String,
}

/// Sink for activity reports.
///
/// Fire and forget: there is no failure path visible to the caller.
pub trait ActivityReporter: Send + Sync {
    /// Record a report
    fn report(&self, report: Report);
}

/// Reporter that writes each report to the log and discards it
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingActivityReporter;

impl LoggingActivityReporter {
    /// Create a new reporter
    pub fn new() -> Self {
        Self
    }
}

impl ActivityReporter for LoggingActivityReporter {
    fn report(&self, report: Report) {
        info!(
            stone = %report.stone,
            report = %report.report,
            "suspicious activity reported"
        );
    }
}
