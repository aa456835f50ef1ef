//! Output formatter trait for CLI results.

use anyhow::Result;
use depprep_core::ConfigureReport;
use depprep_core::ExtractionReport;
use serde::Serialize;
use std::ffi::OsString;
use std::path::Path;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Announce an extraction before it starts
    fn format_extraction_start(&self, archive: &Path, destination: &Path) -> Result<()>;

    /// Format extraction result
    fn format_extraction_result(&self, report: &ExtractionReport) -> Result<()>;

    /// Announce a configure run before the script is launched
    fn format_configure_start(&self, directory: &Path, arguments: &[OsString]) -> Result<()>;

    /// Format configure result
    fn format_configure_result(&self, report: &ConfigureReport) -> Result<()>;

    /// Format a failed operation. The error itself is still returned to
    /// `main`, which prints it to stderr.
    fn format_error(&self, operation: &str, error: &anyhow::Error);

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    /// Operation name, `extract` or `configure`
    pub operation: String,
    /// Outcome of the operation
    pub status: Status,
    /// Operation-specific payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error description for failed operations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of an operation in JSON output
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The operation succeeded
    Success,
    /// The operation failed
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    /// Wraps a successful result
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }

    /// Wraps a failure without a payload
    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> JsonOutput<()> {
        JsonOutput {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let output = JsonOutput::success("extract", 3_u32);
        let json: serde_json::Value = serde_json::to_value(&output).unwrap();
        assert_eq!(json["operation"], "extract");
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"], 3);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_envelope() {
        let output = JsonOutput::<()>::error("configure", "exited with status 2");
        let json: serde_json::Value = serde_json::to_value(&output).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"], "exited with status 2");
        assert!(json.get("data").is_none());
    }
}
