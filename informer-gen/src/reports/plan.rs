//! Plan command report.

use eyre::Result;
use informer_codegen::target::{Target, render_summary};

use super::output::{Output, Report};

/// The planned targets of one run.
#[derive(Debug)]
pub struct PlanReport {
    pub targets: Vec<Target>,
}

impl PlanReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.targets)?)
    }
}

impl Report for PlanReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&render_summary(&self.targets));
    }
}
