//! Check operation - configuration and input validation.

use std::path::Path;

use eyre::{Context, Result};
use informer_codegen::pipeline::Severity;

use super::{Inputs, pipeline};
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the full pipeline so structural problems surface, and collects its
/// diagnostics.
pub fn check(inputs: Inputs, config_path: &Path) -> Result<CheckReport> {
    let packages = inputs.universe.len();
    let ctx = pipeline()
        .run(inputs.universe, inputs.config, inputs.header)
        .wrap_err("Validation failed")?;

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        packages,
        targets: ctx.targets.len(),
        informers: ctx.targets.iter().map(|t| t.informers().count()).sum(),
        errors,
        warnings,
        infos,
    })
}
