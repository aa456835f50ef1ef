//! depprep-extract - unpack a `.tar.gz` archive into a directory.

use anyhow::Result;
use clap::Parser;
use depprep_cli::cli::ExtractCli;
use depprep_cli::commands;
use depprep_cli::output;

fn main() -> Result<()> {
    let cli = ExtractCli::parse();

    let formatter = output::create_formatter(&cli.output);

    commands::extract::execute(&cli, &*formatter)
}
