//! Pipeline phase trait.

use eyre::Result;

use super::PlanContext;

/// One step of planning.
///
/// The built-in steps are `CollectPhase`, `VersionsPhase` and
/// `GlobalsPhase`, run in that order. Extra phases registered with
/// [`Pipeline::phase`](super::Pipeline::phase) run after them and see every
/// target already planned.
pub trait Phase: Send + Sync {
    /// Short name, passed to plugin hooks and recorded on diagnostics.
    fn name(&self) -> &'static str;

    /// One-line summary shown in debug logs.
    fn description(&self) -> &'static str;

    /// # Errors
    ///
    /// Any error aborts planning; findings that should not stop the run
    /// belong in [`PlanContext::diagnostics`].
    fn run(&self, ctx: &mut PlanContext) -> Result<()>;
}
