//! Configuration for extraction and configure runs.

use std::ffi::OsString;
use std::path::PathBuf;

/// Default shell interpreter used to run the configure script.
pub const DEFAULT_SHELL: &str = "bash";

/// Default configure script, relative to the configure directory.
pub const DEFAULT_SCRIPT: &str = "./configure";

/// Options controlling how archive members are written to disk.
///
/// Defaults match the `tar` crate's own unpacking defaults, so a
/// default-configured extraction behaves like `tar::Archive::unpack`.
///
/// # Examples
///
/// ```
/// use depprep_core::ExtractConfig;
///
/// let config = ExtractConfig::default().with_preserve_permissions(true);
/// assert!(config.overwrite);
/// assert!(config.preserve_permissions);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Replace files that already exist in the destination.
    pub overwrite: bool,

    /// Apply the full mode bits stored in the archive (including
    /// setuid/setgid) instead of masking them.
    pub preserve_permissions: bool,

    /// Apply modification times stored in the archive.
    pub preserve_mtime: bool,

    /// Unpack extended attributes (Unix only).
    pub unpack_xattrs: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            overwrite: true,
            preserve_permissions: false,
            preserve_mtime: true,
            unpack_xattrs: false,
        }
    }
}

impl ExtractConfig {
    /// Sets whether existing files are overwritten.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether archive permissions are preserved.
    #[must_use]
    pub fn with_preserve_permissions(mut self, preserve: bool) -> Self {
        self.preserve_permissions = preserve;
        self
    }

    /// Sets whether archive modification times are applied.
    #[must_use]
    pub fn with_preserve_mtime(mut self, preserve: bool) -> Self {
        self.preserve_mtime = preserve;
        self
    }

    /// Sets whether extended attributes are unpacked.
    #[must_use]
    pub fn with_unpack_xattrs(mut self, unpack: bool) -> Self {
        self.unpack_xattrs = unpack;
        self
    }
}

/// Which interpreter runs which script for a configure step.
///
/// # Examples
///
/// ```
/// use depprep_core::ConfigureConfig;
///
/// let config = ConfigureConfig::default();
/// assert_eq!(config.shell, "bash");
/// assert_eq!(config.script.to_str(), Some("./configure"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigureConfig {
    /// Interpreter program, looked up on `PATH`.
    pub shell: OsString,

    /// Script path passed as the interpreter's first argument, relative to
    /// the configure directory.
    pub script: PathBuf,

    /// Send the script's stdout to this process's stderr instead of stdout.
    pub stdout_to_stderr: bool,
}

impl Default for ConfigureConfig {
    fn default() -> Self {
        Self {
            shell: OsString::from(DEFAULT_SHELL),
            script: PathBuf::from(DEFAULT_SCRIPT),
            stdout_to_stderr: false,
        }
    }
}

impl ConfigureConfig {
    /// Sets the interpreter program.
    #[must_use]
    pub fn with_shell(mut self, shell: impl Into<OsString>) -> Self {
        self.shell = shell.into();
        self
    }

    /// Sets the script path.
    #[must_use]
    pub fn with_script(mut self, script: impl Into<PathBuf>) -> Self {
        self.script = script.into();
        self
    }

    /// Routes the script's stdout to stderr, keeping stdout free for
    /// machine-readable output.
    #[must_use]
    pub fn with_stdout_to_stderr(mut self, redirect: bool) -> Self {
        self.stdout_to_stderr = redirect;
        self
    }
}
