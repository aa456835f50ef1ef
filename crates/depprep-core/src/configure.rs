//! Running a project's configure script.
//!
//! The script runs with the configure directory as its working directory.
//! That directory is handed to the child process; the calling process never
//! changes its own working directory.

use std::ffi::OsStr;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;
use std::time::Instant;

use crate::ConfigureConfig;
use crate::ConfigureError;
use crate::ConfigureReport;
use crate::paths::resolve_absolute;

/// Result type alias using `ConfigureError`.
pub type Result<T> = std::result::Result<T, ConfigureError>;

/// A validated, ready-to-launch configure command.
///
/// The launched command line is `<shell> <script> <extra_args...>`, run in
/// `directory`. Extra arguments keep their input order.
///
/// # Examples
///
/// ```no_run
/// use depprep_core::ConfigureConfig;
/// use depprep_core::ConfigureInvocation;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let invocation = ConfigureInvocation::new(
///     "deps/icu/source",
///     ["--prefix=/usr", "--enable-static"],
///     &ConfigureConfig::default(),
/// )?;
/// println!("running in {}", invocation.directory().display());
/// let report = invocation.run()?;
/// assert_eq!(report.exit_code, 0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigureInvocation {
    directory: PathBuf,
    shell: OsString,
    script: PathBuf,
    arguments: Vec<OsString>,
    stdout_to_stderr: bool,
}

impl ConfigureInvocation {
    /// Resolves `dir` and checks that it holds the configured script.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` does not exist, is not a directory, or does
    /// not contain the script.
    pub fn new<P, I, S>(dir: P, extra_args: I, config: &ConfigureConfig) -> Result<Self>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let directory = resolve_absolute(dir)?;

        match fs::metadata(&directory) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Err(ConfigureError::NotADirectory { path: directory }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigureError::DirectoryNotFound { path: directory });
            }
            Err(e) => return Err(e.into()),
        }

        let script_path = resolve_absolute(directory.join(&config.script))?;
        if !script_path.is_file() {
            return Err(ConfigureError::ScriptNotFound { path: script_path });
        }

        Ok(Self {
            directory,
            shell: config.shell.clone(),
            script: config.script.clone(),
            arguments: extra_args.into_iter().map(Into::into).collect(),
            stdout_to_stderr: config.stdout_to_stderr,
        })
    }

    /// Absolute directory the script runs in.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Interpreter program that is launched.
    pub fn shell(&self) -> &OsStr {
        &self.shell
    }

    /// Extra arguments forwarded after the script path.
    pub fn arguments(&self) -> &[OsString] {
        &self.arguments
    }

    /// Builds the launch command without running it.
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.shell);
        command
            .arg(&self.script)
            .args(&self.arguments)
            .current_dir(&self.directory);
        if self.stdout_to_stderr {
            command.stdout(Stdio::from(io::stderr()));
        }
        command
    }

    /// Runs the script and waits for it to exit.
    ///
    /// The child inherits stdin and stderr. Stdout is inherited too unless
    /// [`ConfigureConfig::stdout_to_stderr`] is set, in which case it goes to
    /// this process's stderr.
    ///
    /// # Errors
    ///
    /// Returns an error if the interpreter cannot be launched, or if the
    /// script exits non-zero or is killed by a signal.
    pub fn run(&self) -> Result<ConfigureReport> {
        let start = Instant::now();

        let status = self
            .command()
            .status()
            .map_err(|source| ConfigureError::Spawn {
                program: self.shell.to_string_lossy().into_owned(),
                source,
            })?;

        if !status.success() {
            return Err(ConfigureError::Failed {
                code: status.code(),
            });
        }

        Ok(ConfigureReport {
            directory: self.directory.clone(),
            arguments: self.arguments.clone(),
            exit_code: 0,
            duration: start.elapsed(),
        })
    }
}

/// Runs the configure script in `dir` with `extra_args` appended.
///
/// Shorthand for [`ConfigureInvocation::new`] followed by
/// [`ConfigureInvocation::run`].
///
/// # Errors
///
/// See [`ConfigureInvocation::new`] and [`ConfigureInvocation::run`].
pub fn run_configure<P, I, S>(
    dir: P,
    extra_args: I,
    config: &ConfigureConfig,
) -> Result<ConfigureReport>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    ConfigureInvocation::new(dir, extra_args, config)?.run()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::write_configure_script;
    use std::env;
    use tempfile::TempDir;

    const NO_ARGS: [&str; 0] = [];

    #[test]
    fn test_missing_directory() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        let err = ConfigureInvocation::new(&missing, NO_ARGS, &ConfigureConfig::default())
            .unwrap_err();

        assert!(
            matches!(err, ConfigureError::DirectoryNotFound { ref path } if *path == missing)
        );
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("configure");
        fs::write(&file, "").unwrap();

        let err =
            ConfigureInvocation::new(&file, NO_ARGS, &ConfigureConfig::default()).unwrap_err();

        assert!(matches!(err, ConfigureError::NotADirectory { .. }));
    }

    #[test]
    fn test_missing_script() {
        let temp = TempDir::new().unwrap();

        let err = ConfigureInvocation::new(temp.path(), NO_ARGS, &ConfigureConfig::default())
            .unwrap_err();

        match err {
            ConfigureError::ScriptNotFound { path } => {
                assert_eq!(path, temp.path().join("configure"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_command_shape() {
        let temp = TempDir::new().unwrap();
        write_configure_script(temp.path(), "exit 0");

        let invocation = ConfigureInvocation::new(
            temp.path(),
            ["--prefix=/usr", "--enable-foo"],
            &ConfigureConfig::default(),
        )
        .unwrap();
        let command = invocation.command();

        assert_eq!(command.get_program(), "bash");
        let args: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(args, ["./configure", "--prefix=/usr", "--enable-foo"]);
        assert_eq!(command.get_current_dir(), Some(temp.path()));
    }

    #[test]
    fn test_custom_script_and_shell() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("autogen.sh"), "exit 0\n").unwrap();
        let config = ConfigureConfig::default()
            .with_shell("sh")
            .with_script("./autogen.sh");

        let invocation = ConfigureInvocation::new(temp.path(), NO_ARGS, &config).unwrap();

        assert_eq!(invocation.shell(), "sh");
        assert_eq!(
            invocation.command().get_args().next(),
            Some(OsStr::new("./autogen.sh"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_arguments_forwarded_in_order() {
        let temp = TempDir::new().unwrap();
        write_configure_script(temp.path(), r#"printf '%s\n' "$@" > args.txt"#);

        let report = run_configure(
            temp.path(),
            ["--prefix=/usr", "--enable-foo"],
            &ConfigureConfig::default(),
        )
        .unwrap();

        let recorded = fs::read_to_string(temp.path().join("args.txt")).unwrap();
        assert_eq!(recorded, "--prefix=/usr\n--enable-foo\n");
        assert_eq!(report.arguments, ["--prefix=/usr", "--enable-foo"]);
        assert_eq!(report.exit_code, 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_in_configure_directory() {
        let temp = TempDir::new().unwrap();
        write_configure_script(temp.path(), "touch sentinel");
        let cwd_before = env::current_dir().unwrap();

        run_configure(temp.path(), NO_ARGS, &ConfigureConfig::default()).unwrap();

        assert!(temp.path().join("sentinel").exists());
        assert_eq!(env::current_dir().unwrap(), cwd_before);
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_propagated() {
        let temp = TempDir::new().unwrap();
        write_configure_script(temp.path(), "exit 2");

        let err = run_configure(temp.path(), NO_ARGS, &ConfigureConfig::default()).unwrap_err();

        assert!(matches!(err, ConfigureError::Failed { code: Some(2) }));
    }

    #[test]
    fn test_missing_shell() {
        let temp = TempDir::new().unwrap();
        write_configure_script(temp.path(), "exit 0");
        let config = ConfigureConfig::default().with_shell("depprep-no-such-shell");

        let err = run_configure(temp.path(), NO_ARGS, &config).unwrap_err();

        assert!(matches!(err, ConfigureError::Spawn { .. }));
    }
}
