//! Error conversion utilities for CLI.
//!
//! Converts depprep-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use depprep_core::ConfigureError;
use depprep_core::ExtractionError;
use std::path::Path;

/// Converts `ExtractionError` to user-friendly anyhow error with context
pub fn convert_extraction_error(err: ExtractionError, archive: &Path) -> anyhow::Error {
    match err {
        ExtractionError::ArchiveOpen { path, source } => {
            anyhow!(
                "Cannot open archive '{}': {}\n\
                 HINT: Check that the archive was downloaded and the path is correct.",
                path.display(),
                source
            )
        }
        ExtractionError::InvalidArchive(reason) => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: Only gzip-compressed tar archives (.tar.gz, .tgz) are supported.",
                archive.display(),
                reason
            )
        }
        ExtractionError::PathTraversal { path } => {
            anyhow!(
                "Security violation: Archive '{}' attempted path traversal with '{}'\n\
                 HINT: This archive may be malicious. Do not extract from untrusted sources.",
                archive.display(),
                path.display()
            )
        }
        ExtractionError::DestinationNotDirectory { path } => {
            anyhow!(
                "Destination '{}' exists and is not a directory",
                path.display()
            )
        }
        ExtractionError::Unpack { path, source } => {
            anyhow!(
                "Failed to unpack '{}' from '{}': {}\n\
                 HINT: Files extracted before this entry were left in place.",
                path.display(),
                archive.display(),
                source
            )
        }
        ExtractionError::Io(io_err) => {
            anyhow!(
                "I/O error while processing '{}': {}",
                archive.display(),
                io_err
            )
        }
    }
}

/// Converts `ConfigureError` to user-friendly anyhow error with context
pub fn convert_configure_error(err: ConfigureError, dir: &Path) -> anyhow::Error {
    match err {
        ConfigureError::DirectoryNotFound { path } => {
            anyhow!("Configure directory '{}' does not exist", path.display())
        }
        ConfigureError::NotADirectory { path } => {
            anyhow!("Configure directory '{}' is not a directory", path.display())
        }
        ConfigureError::ScriptNotFound { path } => {
            anyhow!(
                "Configure script '{}' not found\n\
                 HINT: Use --script to run a differently named script.",
                path.display()
            )
        }
        ConfigureError::Spawn { program, source } => {
            anyhow!(
                "Failed to launch '{}': {}\n\
                 HINT: Use --shell to choose another interpreter.",
                program,
                source
            )
        }
        err @ ConfigureError::Failed { .. } => {
            anyhow::Error::from(err).context(format!("Configure failed in '{}'", dir.display()))
        }
        ConfigureError::Io(io_err) => {
            anyhow!(
                "I/O error while preparing '{}': {}",
                dir.display(),
                io_err
            )
        }
    }
}

/// Adds context to an extraction result
pub fn add_archive_context<T>(
    result: Result<T, ExtractionError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_extraction_error(e, archive))
}

/// Adds context to a configure result
pub fn add_configure_context<T>(result: Result<T, ConfigureError>, dir: &Path) -> anyhow::Result<T> {
    result.map_err(|e| convert_configure_error(e, dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_convert_path_traversal_error() {
        let err = ExtractionError::PathTraversal {
            path: PathBuf::from("../../../etc/passwd"),
        };
        let converted = convert_extraction_error(err, Path::new("malicious.tar.gz"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("path traversal"));
        assert!(msg.contains("malicious.tar.gz"));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_invalid_archive_error() {
        let err = ExtractionError::InvalidArchive("invalid gzip header".into());
        let converted = convert_extraction_error(err, Path::new("icu.zip"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("invalid gzip header"));
        assert!(msg.contains(".tar.gz"));
    }

    #[test]
    fn test_convert_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let converted = convert_extraction_error(ExtractionError::Io(io_err), Path::new("a.tgz"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("I/O error"));
    }

    #[test]
    fn test_convert_configure_failure_keeps_status() {
        let err = ConfigureError::Failed { code: Some(2) };
        let converted = convert_configure_error(err, Path::new("/deps/icu"));
        let msg = format!("{converted:#}");
        assert!(msg.contains("/deps/icu"));
        assert!(msg.contains("status 2"));
    }

    #[test]
    fn test_convert_script_not_found() {
        let err = ConfigureError::ScriptNotFound {
            path: PathBuf::from("/deps/icu/configure"),
        };
        let msg = format!("{:?}", convert_configure_error(err, Path::new("/deps/icu")));
        assert!(msg.contains("--script"));
    }
}
