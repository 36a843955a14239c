//! Plan operation - runs the planner over loaded inputs.

use eyre::{Context, Result};

use super::{Inputs, pipeline};
use crate::reports::PlanReport;

/// Execute the plan operation.
pub fn plan(inputs: Inputs) -> Result<PlanReport> {
    let ctx = pipeline()
        .run(inputs.universe, inputs.config, inputs.header)
        .wrap_err("Planning failed")?;

    Ok(PlanReport {
        targets: ctx.targets,
    })
}
