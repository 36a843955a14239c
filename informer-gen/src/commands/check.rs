use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to informer-gen.toml
    #[arg(short, long, default_value = "informer-gen.toml")]
    pub config: PathBuf,

    /// Universe file (.toml or .json) describing the input packages
    #[arg(short, long)]
    pub input: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let inputs = ops::Inputs::load(&self.config, &self.input).unwrap_or_exit();
        let report = ops::check(inputs, &self.config)?;

        report.render(&mut TerminalOutput::new());
        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
