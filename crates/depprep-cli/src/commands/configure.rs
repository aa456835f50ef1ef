//! Configure command implementation.

use crate::cli::ConfigureCli;
use crate::error::add_configure_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use depprep_core::ConfigureConfig;
use depprep_core::ConfigureInvocation;

/// Runs the configure script named on the command line.
pub fn execute(args: &ConfigureCli, formatter: &dyn OutputFormatter) -> Result<()> {
    let result = run(args, formatter);
    if let Err(err) = &result {
        formatter.format_error("configure", err);
    }
    result
}

fn run(args: &ConfigureCli, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = ConfigureConfig::default()
        .with_shell(args.shell.clone())
        .with_script(args.script.clone())
        .with_stdout_to_stderr(args.output.json);

    let invocation = add_configure_context(
        ConfigureInvocation::new(&args.config_dir, args.extra_args.iter().cloned(), &config),
        &args.config_dir,
    )?;

    formatter.format_configure_start(invocation.directory(), invocation.arguments())?;

    let report = add_configure_context(invocation.run(), invocation.directory())?;

    formatter.format_configure_result(&report)?;

    Ok(())
}
