//! Phase lifecycle hooks.

use eyre::Result;

use super::PlanContext;

/// Observer hooked around every phase.
///
/// Both hooks default to doing nothing. An error from either hook aborts
/// planning, wrapped with the plugin and phase names.
///
/// ```ignore
/// struct TargetCount;
///
/// impl Plugin for TargetCount {
///     fn name(&self) -> &'static str { "target-count" }
///
///     fn on_after_phase(&self, phase: &str, ctx: &mut PlanContext) -> Result<()> {
///         tracing::info!("{} planned {} targets so far", phase, ctx.targets.len());
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    /// Name used when a hook fails.
    fn name(&self) -> &'static str;

    /// Runs before `phase`.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut PlanContext) -> Result<()> {
        Ok(())
    }

    /// Runs once `phase` has succeeded.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut PlanContext) -> Result<()> {
        Ok(())
    }
}
