//! Logging setup and pipeline tracing.

use eyre::Result;
use informer_codegen::pipeline::{PlanContext, Plugin};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Events go to stderr so plan output on
/// stdout stays machine-readable.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("informer_codegen=debug,informer_gen=debug")
    } else {
        EnvFilter::new("informer_codegen=info,informer_gen=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Reports what each planning phase produced.
pub struct TracePlugin;

impl Plugin for TracePlugin {
    fn name(&self) -> &'static str {
        "trace"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut PlanContext) -> Result<()> {
        tracing::debug!(
            "phase {} done: {} target(s), {} diagnostic(s)",
            phase,
            ctx.targets.len(),
            ctx.diagnostics.len()
        );
        Ok(())
    }
}
