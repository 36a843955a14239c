//! Plan context passed through pipeline phases.

use std::sync::Arc;

use informer_ir::Universe;
use informer_manifest::InformerConfig;

use super::diagnostic::{Diagnostic, Severity};
use crate::{
    classify::{Classification, Tree},
    naming::NameSystems,
    target::{Layout, Target},
};

/// Context passed through all pipeline phases.
///
/// Carries the inputs of a planning run and accumulates the classification,
/// the planned targets, and diagnostics along the way.
#[derive(Debug)]
pub struct PlanContext {
    /// Input packages in traversal order.
    pub universe: Universe,
    pub config: InformerConfig,
    /// Header bytes shared by every target.
    pub header: Arc<[u8]>,
    /// Name systems bound to the configured plural exceptions.
    pub name_systems: NameSystems,
    /// Group/version tables (populated by CollectPhase).
    pub classification: Option<Classification>,
    /// Planned targets in emission order.
    pub targets: Vec<Target>,
    pub diagnostics: Vec<Diagnostic>,
}

impl PlanContext {
    pub fn new(universe: Universe, config: InformerConfig, header: impl Into<Arc<[u8]>>) -> Self {
        let name_systems = NameSystems::new(Arc::new(config.naming.plural_exceptions.clone()));
        Self {
            universe,
            config,
            header: header.into(),
            name_systems,
            classification: None,
            targets: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn layout(&self) -> Layout {
        Layout::from_config(&self.config.output)
    }

    /// Clientset package informers of `tree` are built on.
    pub fn clientset_package(&self, tree: Tree) -> Option<&str> {
        match tree {
            Tree::External => Some(self.config.packages.versioned_clientset.as_str()),
            Tree::Internal => self.config.packages.internal_clientset.as_deref(),
        }
    }

    /// The classification, or an error if CollectPhase has not run.
    pub fn classification(&self) -> eyre::Result<&Classification> {
        self.classification
            .as_ref()
            .ok_or_else(|| eyre::eyre!("classification not set - did CollectPhase run?"))
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Diagnostics of one severity, in recording order.
    pub fn diagnostics_of(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> InformerConfig {
        InformerConfig::new(
            "pkg/client/informers",
            "example.com/client/informers",
            "example.com/client/clientset/versioned",
            "example.com/client/listers",
        )
    }

    #[test]
    fn test_context_creation() {
        let ctx = PlanContext::new(Universe::default(), config(), Vec::<u8>::new());
        assert!(ctx.classification.is_none());
        assert!(ctx.classification().is_err());
        assert!(ctx.targets.is_empty());
        assert!(ctx.header.is_empty());
        assert_eq!(
            ctx.name_systems.exceptions().get("Endpoints"),
            Some("Endpoints")
        );
    }

    #[test]
    fn test_clientset_per_tree() {
        let ctx = PlanContext::new(Universe::default(), config(), Vec::<u8>::new());
        assert_eq!(
            ctx.clientset_package(Tree::External),
            Some("example.com/client/clientset/versioned")
        );
        assert_eq!(ctx.clientset_package(Tree::Internal), None);

        let ctx = PlanContext::new(
            Universe::default(),
            config().with_internal_clientset("example.com/client/clientset/internalversion"),
            Vec::<u8>::new(),
        );
        assert_eq!(
            ctx.clientset_package(Tree::Internal),
            Some("example.com/client/clientset/internalversion")
        );
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = PlanContext::new(Universe::default(), config(), Vec::<u8>::new());
        ctx.add_diagnostic(Diagnostic::info("collect", "skipped package"));
        ctx.add_diagnostic(Diagnostic::warning("collect", "odd package").at("example.com/x"));

        assert_eq!(ctx.diagnostics_of(Severity::Error).count(), 0);
        assert_eq!(ctx.diagnostics_of(Severity::Info).count(), 1);
        assert_eq!(
            ctx.diagnostics_of(Severity::Warning)
                .next()
                .and_then(|d| d.location.as_deref()),
            Some("example.com/x")
        );
    }
}
