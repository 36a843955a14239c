//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod output;
mod plan;

pub use check::CheckReport;
pub use output::{Report, TerminalOutput};
pub use plan::PlanReport;
