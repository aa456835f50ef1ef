//! Extract command implementation.

use crate::cli::ExtractCli;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Context;
use anyhow::Result;
use depprep_core::ExtractConfig;
use depprep_core::NoopProgress;
use depprep_core::extract_tarball_with_progress;
use depprep_core::resolve_absolute;

/// Extracts the archive named on the command line.
pub fn execute(args: &ExtractCli, formatter: &dyn OutputFormatter) -> Result<()> {
    let result = run(args, formatter);
    if let Err(err) = &result {
        formatter.format_error("extract", err);
    }
    result
}

fn run(args: &ExtractCli, formatter: &dyn OutputFormatter) -> Result<()> {
    let archive = resolve_absolute(&args.archive)
        .with_context(|| format!("failed to resolve '{}'", args.archive.display()))?;
    let dest = resolve_absolute(&args.dest_dir)
        .with_context(|| format!("failed to resolve '{}'", args.dest_dir.display()))?;

    let config = ExtractConfig {
        overwrite: !args.no_overwrite,
        preserve_permissions: args.preserve_permissions,
        preserve_mtime: !args.no_mtime,
        unpack_xattrs: args.xattrs,
    };

    formatter.format_extraction_start(&archive, &dest)?;

    // Spinner only on an interactive stderr, and never alongside JSON output
    let show_progress = !args.output.quiet && !args.output.json && CliProgress::should_show();
    let report = if show_progress {
        let mut progress = CliProgress::new("Extracting");
        add_archive_context(
            extract_tarball_with_progress(&archive, &dest, &config, &mut progress),
            &archive,
        )?
    } else {
        let mut noop = NoopProgress;
        add_archive_context(
            extract_tarball_with_progress(&archive, &dest, &config, &mut noop),
            &archive,
        )?
    };

    formatter.format_extraction_result(&report)?;

    Ok(())
}
