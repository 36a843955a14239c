//! Pipeline orchestrator.

use std::sync::Arc;

use eyre::{Result, WrapErr};
use informer_ir::Universe;
use informer_manifest::InformerConfig;

use super::{
    Phase, PlanContext, Plugin,
    phases::{CollectPhase, GlobalsPhase, VersionsPhase},
};

/// The planning pipeline orchestrator.
///
/// Runs the built-in phases (collect, versions, globals) followed by any
/// user phases, calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(MyPlugin::new())
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(universe, config, header)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Plan every target for `universe`.
    ///
    /// Executes all phases in order:
    /// 1. CollectPhase - classifies packages into group/version tables
    /// 2. VersionsPhase - one target per classified group version
    /// 3. GlobalsPhase - factory, factory-interfaces and group targets
    /// 4. User phases (if any)
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally. Planning has no partial
    /// result.
    pub fn run(
        &self,
        universe: Universe,
        config: InformerConfig,
        header: impl Into<Arc<[u8]>>,
    ) -> Result<PlanContext> {
        let mut ctx = PlanContext::new(universe, config, header);

        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(CollectPhase),
            Box::new(VersionsPhase),
            Box::new(GlobalsPhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut PlanContext) -> Result<()> {
        let phase_name = phase.name();
        tracing::debug!("phase {}: {}", phase_name, phase.description());

        for plugin in &self.plugins {
            plugin
                .on_before_phase(phase_name, ctx)
                .wrap_err_with(|| format!("plugin {} failed before {}", plugin.name(), phase_name))?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin
                .on_after_phase(phase_name, ctx)
                .wrap_err_with(|| format!("plugin {} failed after {}", plugin.name(), phase_name))?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use informer_ir::{Member, PackageDescriptor, TypeDescriptor};

    use super::*;

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut PlanContext) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut PlanContext) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct PhaseLog(Arc<Mutex<Vec<String>>>);

    impl Plugin for PhaseLog {
        fn name(&self) -> &'static str {
            "phase-log"
        }

        fn on_after_phase(&self, phase: &str, ctx: &mut PlanContext) -> Result<()> {
            if let Ok(mut log) = self.0.lock() {
                log.push(format!("{}:{}", phase, ctx.targets.len()));
            }
            Ok(())
        }
    }

    struct FailBeforeVersions;

    impl Plugin for FailBeforeVersions {
        fn name(&self) -> &'static str {
            "fail-before-versions"
        }

        fn on_before_phase(&self, phase: &str, _ctx: &mut PlanContext) -> Result<()> {
            if phase == "versions" {
                return Err(eyre::eyre!("stop"));
            }
            Ok(())
        }
    }

    struct RejectAll;

    impl Phase for RejectAll {
        fn name(&self) -> &'static str {
            "reject"
        }

        fn description(&self) -> &'static str {
            "Fail unconditionally"
        }

        fn run(&self, _ctx: &mut PlanContext) -> Result<()> {
            Err(eyre::eyre!("rejected"))
        }
    }

    fn config() -> InformerConfig {
        InformerConfig::new(
            "out",
            "example.com/out",
            "example.com/clientset/versioned",
            "example.com/listers",
        )
    }

    fn universe() -> Universe {
        Universe::new(vec![PackageDescriptor::new("example.com/api/apps/v1").with_type(
            TypeDescriptor::new("", "Deployment")
                .with_comment("+genclient")
                .with_member(Member::new(
                    "ObjectMeta",
                    "meta.ObjectMeta",
                    r#"json:"metadata,omitempty""#,
                )),
        )])
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let ctx = Pipeline::new()
            .run(universe(), config(), Vec::<u8>::new())
            .expect("pipeline should succeed");

        assert!(ctx.classification.is_some());
        assert!(!ctx.targets.is_empty());
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let before = Arc::new(AtomicUsize::new(0));
        let after = Arc::new(AtomicUsize::new(0));
        let plugin = CountingPlugin {
            before_count: before.clone(),
            after_count: after.clone(),
        };

        Pipeline::new()
            .plugin(plugin)
            .run(universe(), config(), Vec::<u8>::new())
            .expect("pipeline should succeed");

        // 3 built-in phases = 3 before + 3 after hooks
        assert_eq!(before.load(Ordering::SeqCst), 3);
        assert_eq!(after.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_phase_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        Pipeline::new()
            .plugin(PhaseLog(log.clone()))
            .run(universe(), config(), Vec::<u8>::new())
            .expect("pipeline should succeed");

        // one version target, then factory-interfaces, factory and one group
        assert_eq!(
            *log.lock().unwrap(),
            vec!["collect:0", "versions:1", "globals:4"]
        );
    }

    #[test]
    fn test_user_phase_error_aborts() {
        let result = Pipeline::new()
            .phase(RejectAll)
            .run(universe(), config(), Vec::<u8>::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_plugin_error_names_plugin_and_phase() {
        let err = Pipeline::new()
            .plugin(FailBeforeVersions)
            .run(universe(), config(), Vec::<u8>::new())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "plugin fail-before-versions failed before versions"
        );
    }
}
