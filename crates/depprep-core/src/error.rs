//! Error types for extraction and configure operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ExtractionError`.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Errors that can occur while extracting a tarball.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// I/O operation failed outside of a specific archive entry.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The archive file could not be opened.
    #[error("failed to open archive {path}: {source}")]
    ArchiveOpen {
        /// Absolute path of the archive.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The archive is not a gzip-compressed tar stream, or is corrupted.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// The destination exists but is not a directory.
    #[error("destination is not a directory: {path}")]
    DestinationNotDirectory {
        /// Absolute path of the destination.
        path: PathBuf,
    },

    /// An entry was refused because it would be written outside the
    /// destination directory.
    #[error("path traversal detected: {path}")]
    PathTraversal {
        /// The entry path as stored in the archive.
        path: PathBuf,
    },

    /// Writing a single entry to disk failed.
    #[error("failed to unpack {path}: {source}")]
    Unpack {
        /// The entry path as stored in the archive.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ExtractionError {
    /// Returns `true` if the error was caused by the caller's input rather
    /// than by a failure while writing.
    ///
    /// # Examples
    ///
    /// ```
    /// use depprep_core::ExtractionError;
    ///
    /// let err = ExtractionError::InvalidArchive("invalid gzip header".into());
    /// assert!(err.is_user_error());
    /// ```
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::ArchiveOpen { .. }
                | Self::InvalidArchive(_)
                | Self::DestinationNotDirectory { .. }
                | Self::PathTraversal { .. }
        )
    }
}

/// Errors that can occur while running a configure script.
#[derive(Error, Debug)]
pub enum ConfigureError {
    /// Resolving the configure directory failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configure directory does not exist.
    #[error("configure directory does not exist: {path}")]
    DirectoryNotFound {
        /// Absolute path of the directory.
        path: PathBuf,
    },

    /// The configure directory path exists but is not a directory.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// Absolute path that was given.
        path: PathBuf,
    },

    /// The configure script is missing from the directory.
    #[error("configure script not found: {path}")]
    ScriptNotFound {
        /// Absolute path where the script was expected.
        path: PathBuf,
    },

    /// The shell interpreter could not be launched.
    #[error("failed to launch {program}: {source}")]
    Spawn {
        /// The interpreter that was launched.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configure script ran and exited unsuccessfully.
    ///
    /// `code` is `None` when the process was terminated by a signal.
    #[error("{}", describe_failure(*code))]
    Failed {
        /// Exit code of the script, if it exited normally.
        code: Option<i32>,
    },
}

impl ConfigureError {
    /// Returns `true` if the error was caused by the caller's input rather
    /// than by the script itself.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::DirectoryNotFound { .. } | Self::NotADirectory { .. } | Self::ScriptNotFound { .. }
        )
    }

    /// Returns the exit code of a failed script run, if there was one.
    #[must_use]
    pub const fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Failed { code } => *code,
            _ => None,
        }
    }
}

fn describe_failure(code: Option<i32>) -> String {
    code.map_or_else(
        || "configure script was terminated by a signal".to_string(),
        |code| format!("configure script exited with status {code}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_extraction_error_display() {
        let err = ExtractionError::PathTraversal {
            path: PathBuf::from("../etc/passwd"),
        };
        assert_eq!(err.to_string(), "path traversal detected: ../etc/passwd");

        let err = ExtractionError::ArchiveOpen {
            path: PathBuf::from("/tmp/missing.tar.gz"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/tmp/missing.tar.gz"));
    }

    #[test]
    fn test_extraction_error_from_io() {
        let err: ExtractionError = io::Error::other("disk full").into();
        assert!(matches!(err, ExtractionError::Io(_)));
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_extraction_user_errors() {
        assert!(ExtractionError::InvalidArchive("bad".into()).is_user_error());
        assert!(
            !ExtractionError::Unpack {
                path: PathBuf::from("a.txt"),
                source: io::Error::other("denied"),
            }
            .is_user_error()
        );
    }

    #[test]
    fn test_configure_failed_display() {
        let err = ConfigureError::Failed { code: Some(2) };
        assert_eq!(err.to_string(), "configure script exited with status 2");
        assert_eq!(err.exit_code(), Some(2));

        let err = ConfigureError::Failed { code: None };
        assert!(err.to_string().contains("signal"));
        assert_eq!(err.exit_code(), None);
    }

    #[test]
    fn test_configure_user_errors() {
        assert!(
            ConfigureError::DirectoryNotFound {
                path: PathBuf::from("/nope"),
            }
            .is_user_error()
        );
        assert!(!ConfigureError::Failed { code: Some(1) }.is_user_error());
    }
}
