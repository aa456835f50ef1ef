//! depprep-configure - run `./configure` inside a directory with forwarded
//! arguments.

use anyhow::Result;
use clap::Parser;
use depprep_cli::cli::ConfigureCli;
use depprep_cli::commands;
use depprep_cli::output;

fn main() -> Result<()> {
    let cli = ConfigureCli::parse();

    let formatter = output::create_formatter(&cli.output);

    commands::configure::execute(&cli, &*formatter)
}
