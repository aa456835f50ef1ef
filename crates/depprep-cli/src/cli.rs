//! CLI argument parsing using clap.

use clap::Parser;
use depprep_core::config::DEFAULT_SCRIPT;
use depprep_core::config::DEFAULT_SHELL;
use std::ffi::OsString;
use std::path::PathBuf;

/// Output flags shared by both utilities.
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct OutputArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,
}

/// Arguments of `depprep-extract`.
#[derive(Parser, Debug)]
#[command(name = "depprep-extract")]
#[command(author, version, long_about = None)]
#[command(about = "Extract a gzip-compressed tar archive into a directory")]
pub struct ExtractCli {
    /// Path to the .tar.gz archive
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Destination directory (created if missing)
    #[arg(value_name = "DEST_DIR")]
    pub dest_dir: PathBuf,

    /// Fail instead of replacing files that already exist
    #[arg(long)]
    pub no_overwrite: bool,

    /// Apply the full permission bits stored in the archive
    #[arg(long)]
    pub preserve_permissions: bool,

    /// Do not apply modification times stored in the archive
    #[arg(long)]
    pub no_mtime: bool,

    /// Unpack extended attributes
    #[arg(long)]
    pub xattrs: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments of `depprep-configure`.
#[derive(Parser, Debug)]
#[command(name = "depprep-configure")]
#[command(author, version, long_about = None)]
#[command(about = "Run a configure script inside a directory with forwarded arguments")]
#[command(
    after_help = "Options must come before CONFIG_DIR. Everything after the first extra \
                  argument is forwarded verbatim; use `--` to forward an argument that \
                  matches one of the options above."
)]
pub struct ConfigureCli {
    /// Directory containing the configure script
    #[arg(value_name = "CONFIG_DIR")]
    pub config_dir: PathBuf,

    /// Arguments forwarded to the configure script
    #[arg(
        value_name = "EXTRA_ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub extra_args: Vec<OsString>,

    /// Shell interpreter used to run the script
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_SHELL)]
    pub shell: OsString,

    /// Script to run, relative to CONFIG_DIR
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SCRIPT)]
    pub script: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definitions_are_valid() {
        ExtractCli::command().debug_assert();
        ConfigureCli::command().debug_assert();
    }

    #[test]
    fn test_extract_positional_args() {
        let cli = ExtractCli::try_parse_from(["depprep-extract", "icu.tgz", "deps"]).unwrap();
        assert_eq!(cli.archive, PathBuf::from("icu.tgz"));
        assert_eq!(cli.dest_dir, PathBuf::from("deps"));
        assert!(!cli.no_overwrite);
        assert!(!cli.output.quiet);
    }

    #[test]
    fn test_extract_requires_destination() {
        assert!(ExtractCli::try_parse_from(["depprep-extract", "icu.tgz"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = ExtractCli::try_parse_from(["depprep-extract", "-q", "-v", "a.tgz", "out"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_configure_forwards_hyphen_args_in_order() {
        let cli = ConfigureCli::try_parse_from([
            "depprep-configure",
            "deps/icu/source",
            "--prefix=/usr",
            "--enable-foo",
            "-q",
        ])
        .unwrap();
        assert_eq!(cli.config_dir, PathBuf::from("deps/icu/source"));
        assert_eq!(cli.extra_args, ["--prefix=/usr", "--enable-foo", "-q"]);
        assert!(!cli.output.quiet);
    }

    #[test]
    fn test_configure_double_dash_forwards_option_names() {
        let cli =
            ConfigureCli::try_parse_from(["depprep-configure", "src", "--", "--quiet"]).unwrap();
        assert_eq!(cli.extra_args, ["--quiet"]);
        assert!(!cli.output.quiet);
    }

    #[test]
    fn test_configure_defaults() {
        let cli = ConfigureCli::try_parse_from(["depprep-configure", "src"]).unwrap();
        assert!(cli.extra_args.is_empty());
        assert_eq!(cli.shell, "bash");
        assert_eq!(cli.script, PathBuf::from("./configure"));
    }

    #[test]
    fn test_configure_options_before_directory() {
        let cli = ConfigureCli::try_parse_from([
            "depprep-configure",
            "--shell",
            "sh",
            "-q",
            "src",
            "--disable-shared",
        ])
        .unwrap();
        assert_eq!(cli.shell, "sh");
        assert!(cli.output.quiet);
        assert_eq!(cli.extra_args, ["--disable-shared"]);
    }
}
