//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use depprep_core::ConfigureReport;
use depprep_core::ExtractionReport;
use std::ffi::OsString;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn arguments_line(arguments: &[OsString]) -> String {
        format!("Configure arguments: {arguments:?}")
    }

    fn headline(&self, text: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {text}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(text);
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_extraction_start(&self, archive: &Path, destination: &Path) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.term.write_line(&format!(
            "Extracting {} to {}",
            archive.display(),
            destination.display()
        ))?;
        Ok(())
    }

    fn format_extraction_result(&self, report: &ExtractionReport) -> Result<()> {
        for warning in &report.warnings {
            self.format_warning(warning);
        }

        if self.quiet || !self.verbose {
            return Ok(());
        }

        self.headline("Extraction complete");
        let _ = self
            .term
            .write_line(&format!("  Files extracted: {}", report.files_extracted));
        let _ = self
            .term
            .write_line(&format!("  Directories: {}", report.directories_created));
        let _ = self
            .term
            .write_line(&format!("  Symlinks: {}", report.symlinks_created));
        let _ = self.term.write_line(&format!(
            "  Total size: {}",
            Self::format_size(report.bytes_written)
        ));
        let _ = self
            .term
            .write_line(&format!("  Duration: {:?}", report.duration));

        Ok(())
    }

    fn format_configure_start(&self, directory: &Path, arguments: &[OsString]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.term
            .write_line(&format!("Changing to {}", directory.display()))?;
        self.term.write_line(&Self::arguments_line(arguments))?;
        Ok(())
    }

    fn format_configure_result(&self, report: &ConfigureReport) -> Result<()> {
        if self.quiet || !self.verbose {
            return Ok(());
        }

        self.headline("Configure complete");
        let _ = self
            .term
            .write_line(&format!("  Directory: {}", report.directory.display()));
        let _ = self
            .term
            .write_line(&format!("  Duration: {:?}", report.duration));

        Ok(())
    }

    fn format_error(&self, _operation: &str, _error: &anyhow::Error) {}

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        let stderr = Term::stderr();
        if self.use_colors {
            let _ = stderr.write_line(&format!("{} {message}", style("warning:").yellow().bold()));
        } else {
            let _ = stderr.write_line(&format!("warning: {message}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(HumanFormatter::format_size(0), "0 B");
        assert_eq!(HumanFormatter::format_size(1023), "1023 B");
        assert_eq!(HumanFormatter::format_size(1536), "1.5 KB");
        assert_eq!(HumanFormatter::format_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(HumanFormatter::format_size(2 * 1024 * 1024 * 1024), "2.0 GB");
    }

    #[test]
    fn test_arguments_line() {
        let args = vec![
            OsString::from("--prefix=/usr"),
            OsString::from("--enable-foo"),
        ];
        assert_eq!(
            HumanFormatter::arguments_line(&args),
            r#"Configure arguments: ["--prefix=/usr", "--enable-foo"]"#
        );
        assert_eq!(HumanFormatter::arguments_line(&[]), "Configure arguments: []");
    }
}
