use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Target records as JSON
    Json,
}

#[derive(Args)]
pub struct PlanCommand {
    /// Path to informer-gen.toml
    #[arg(short, long, default_value = "informer-gen.toml")]
    pub config: PathBuf,

    /// Universe file (.toml or .json) describing the input packages
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl PlanCommand {
    pub fn run(&self) -> Result<()> {
        let inputs = ops::Inputs::load(&self.config, &self.input).unwrap_or_exit();
        let report = ops::plan(inputs)?;

        match self.format {
            OutputFormat::Text => report.render(&mut TerminalOutput::new()),
            OutputFormat::Json => println!("{}", report.to_json()?),
        }
        Ok(())
    }
}
