//! Operation reports and progress reporting.

use std::ffi::OsString;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

/// Report of a tarball extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Absolute path of the extracted archive.
    pub archive: PathBuf,

    /// Absolute path of the destination directory.
    pub destination: PathBuf,

    /// Number of regular files and hardlinks written.
    pub files_extracted: usize,

    /// Number of directory entries unpacked.
    pub directories_created: usize,

    /// Number of symlinks created.
    pub symlinks_created: usize,

    /// Total bytes of file content written.
    pub bytes_written: u64,

    /// Duration of the extraction.
    pub duration: Duration,

    /// Warnings generated during extraction.
    pub warnings: Vec<String>,
}

impl ExtractionReport {
    /// Creates an empty report for the given archive and destination.
    #[must_use]
    pub fn new(archive: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            archive: archive.into(),
            destination: destination.into(),
            ..Self::default()
        }
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, message: String) {
        self.warnings.push(message);
    }

    /// Returns total number of entries unpacked.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.files_extracted + self.directories_created + self.symlinks_created
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Report of a successful configure run.
#[derive(Debug, Clone, Default)]
pub struct ConfigureReport {
    /// Absolute path of the directory the script ran in.
    pub directory: PathBuf,

    /// Extra arguments forwarded to the script, in order.
    pub arguments: Vec<OsString>,

    /// Exit code of the script. Always `0` for a report.
    pub exit_code: i32,

    /// Wall-clock duration of the script.
    pub duration: Duration,
}

/// Callback trait for progress reporting during extraction.
///
/// The total entry count of a streamed tarball is unknown until the end, so
/// callbacks only receive the running entry index.
///
/// # Examples
///
/// ```
/// use depprep_core::ProgressCallback;
/// use std::path::Path;
///
/// struct Printer;
///
/// impl ProgressCallback for Printer {
///     fn on_entry_start(&mut self, path: &Path, current: usize) {
///         println!("{current}: {}", path.display());
///     }
///
///     fn on_bytes_written(&mut self, _bytes: u64) {}
///
///     fn on_entry_complete(&mut self, _path: &Path) {}
///
///     fn on_complete(&mut self) {}
/// }
/// ```
pub trait ProgressCallback {
    /// Called before an entry is unpacked. `current` is 1-indexed.
    fn on_entry_start(&mut self, path: &Path, current: usize);

    /// Called with the content size of each regular file written.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called after an entry has been unpacked.
    fn on_entry_complete(&mut self, path: &Path);

    /// Called once after the last entry.
    fn on_complete(&mut self);
}

/// `ProgressCallback` that ignores every event.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _path: &Path, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {}
}
