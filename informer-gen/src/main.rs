mod commands;
mod ops;
mod reports;
mod trace;

use clap::Parser;
use eyre::Result;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    trace::init(cli.verbose);
    cli.run()
}
