//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use depprep_core::ConfigureReport;
use depprep_core::ExtractionReport;
use serde::Serialize;
use std::ffi::OsString;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

#[derive(Debug, Serialize)]
struct ExtractionOutput {
    archive: String,
    destination: String,
    files_extracted: usize,
    directories_created: usize,
    symlinks_created: usize,
    bytes_written: u64,
    duration_ms: u128,
    warnings: Vec<String>,
}

impl From<&ExtractionReport> for ExtractionOutput {
    fn from(report: &ExtractionReport) -> Self {
        Self {
            archive: report.archive.display().to_string(),
            destination: report.destination.display().to_string(),
            files_extracted: report.files_extracted,
            directories_created: report.directories_created,
            symlinks_created: report.symlinks_created,
            bytes_written: report.bytes_written,
            duration_ms: report.duration.as_millis(),
            warnings: report.warnings.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ConfigureOutput {
    directory: String,
    arguments: Vec<String>,
    exit_code: i32,
    duration_ms: u128,
}

impl From<&ConfigureReport> for ConfigureOutput {
    fn from(report: &ConfigureReport) -> Self {
        Self {
            directory: report.directory.display().to_string(),
            arguments: report
                .arguments
                .iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
            exit_code: report.exit_code,
            duration_ms: report.duration.as_millis(),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_extraction_start(&self, _archive: &Path, _destination: &Path) -> Result<()> {
        Ok(())
    }

    fn format_extraction_result(&self, report: &ExtractionReport) -> Result<()> {
        Self::output(&JsonOutput::success(
            "extract",
            ExtractionOutput::from(report),
        ))
    }

    fn format_configure_start(&self, _directory: &Path, _arguments: &[OsString]) -> Result<()> {
        Ok(())
    }

    fn format_configure_result(&self, report: &ConfigureReport) -> Result<()> {
        Self::output(&JsonOutput::success(
            "configure",
            ConfigureOutput::from(report),
        ))
    }

    fn format_error(&self, operation: &str, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error(operation, format!("{error:#}"));
        let _ = Self::output(&output);
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn test_extraction_output_fields() {
        let mut report = ExtractionReport::new("/src/zlib.tar.gz", "/deps");
        report.files_extracted = 4;
        report.bytes_written = 2048;
        report.duration = Duration::from_millis(12);

        let json = serde_json::to_value(ExtractionOutput::from(&report)).unwrap();

        assert_eq!(json["archive"], "/src/zlib.tar.gz");
        assert_eq!(json["destination"], "/deps");
        assert_eq!(json["files_extracted"], 4);
        assert_eq!(json["bytes_written"], 2048);
        assert_eq!(json["duration_ms"], 12);
    }

    #[test]
    fn test_configure_output_keeps_argument_order() {
        let report = ConfigureReport {
            directory: PathBuf::from("/deps/icu/source"),
            arguments: vec!["--prefix=/usr".into(), "--enable-foo".into()],
            exit_code: 0,
            duration: Duration::from_secs(1),
        };

        let json = serde_json::to_value(ConfigureOutput::from(&report)).unwrap();

        assert_eq!(
            json["arguments"],
            serde_json::json!(["--prefix=/usr", "--enable-foo"])
        );
        assert_eq!(json["exit_code"], 0);
        assert_eq!(json["duration_ms"], 1000);
    }
}
