mod check;
mod plan;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use plan::PlanCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for informer_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "informer-gen")]
#[command(version)]
#[command(about = "Plan informer packages for generated Kubernetes clients")]
pub(crate) struct Cli {
    /// Log per-package planning decisions
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Plan(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the planned informer targets
    Plan(PlanCommand),

    /// Validate configuration and input without printing the plan
    Check(CheckCommand),
}
