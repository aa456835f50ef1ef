//! Dependency preparation helpers: tarball extraction and configure runs.
//!
//! `depprep-core` provides the two operations a dependency build step needs
//! before compiling vendored sources:
//!
//! - [`extract_tarball`] unpacks a gzip-compressed tar archive into a
//!   destination directory.
//! - [`run_configure`] runs a project's `./configure` script through a fixed
//!   shell interpreter inside the project directory, forwarding extra
//!   arguments verbatim.
//!
//! # Examples
//!
//! ```no_run
//! use depprep_core::ConfigureConfig;
//! use depprep_core::ExtractConfig;
//! use depprep_core::extract_tarball;
//! use depprep_core::run_configure;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = extract_tarball("deps/icu.tar.gz", "deps", &ExtractConfig::default())?;
//! println!("Extracted {} files", report.files_extracted);
//!
//! run_configure("deps/icu/source", ["--prefix=/usr"], &ConfigureConfig::default())?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod configure;
pub mod error;
pub mod extract;
pub mod paths;
pub mod report;

#[cfg(any(test, feature = "test-utils"))]
#[doc(hidden)]
pub mod test_utils;

pub use config::ConfigureConfig;
pub use config::ExtractConfig;
pub use configure::ConfigureInvocation;
pub use configure::run_configure;
pub use error::ConfigureError;
pub use error::ExtractionError;
pub use error::Result;
pub use extract::extract_tarball;
pub use extract::extract_tarball_with_progress;
pub use paths::resolve_absolute;
pub use report::ConfigureReport;
pub use report::ExtractionReport;
pub use report::NoopProgress;
pub use report::ProgressCallback;
