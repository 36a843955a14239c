//! Collect phase - classifies packages into group/version tables.

use eyre::Result;
use indexmap::IndexMap;

use crate::{
    PlanError,
    classify::{Classification, ClassificationBuilder, PackageOutcome, Tree},
    pipeline::{Diagnostic, Phase, PlanContext},
};

/// Phase that classifies every package of the universe.
///
/// Packages without informable types are skipped and recorded as info
/// diagnostics; a group whose display name changes between packages gets a
/// warning, the last name winning. Structural problems in the resulting tables (an internal
/// tree without an internal clientset, both trees sharing one directory)
/// abort the run here, before any target is planned.
pub struct CollectPhase;

impl Phase for CollectPhase {
    fn name(&self) -> &'static str {
        "collect"
    }

    fn description(&self) -> &'static str {
        "Classify packages into group/version tables"
    }

    fn run(&self, ctx: &mut PlanContext) -> Result<()> {
        let mut builder = ClassificationBuilder::new();
        let mut findings = Vec::new();
        let mut go_names: IndexMap<String, String> = IndexMap::new();

        for package in ctx.universe.packages() {
            match builder.classify(package)? {
                PackageOutcome::Classified(index) => {
                    let classified = &builder.packages()[index];
                    tracing::debug!(
                        "classified {} as {} {} ({} informable type(s))",
                        classified.path,
                        classified.tree,
                        classified.group_version,
                        classified.types.len()
                    );
                    let previous = go_names.insert(
                        classified.group_package_name.clone(),
                        classified.group_go_name.clone(),
                    );
                    if let Some(previous) = previous.filter(|p| *p != classified.group_go_name) {
                        findings.push(
                            Diagnostic::warning(
                                self.name(),
                                format!(
                                    "group {} renamed from {} to {}",
                                    classified.group_package_name, previous, classified.group_go_name
                                ),
                            )
                            .at(&classified.path),
                        );
                    }
                }
                PackageOutcome::Skipped(reason) => {
                    tracing::debug!("skipping {}: {}", package.path, reason.describe());
                    findings.push(
                        Diagnostic::info(self.name(), format!("package skipped: {}", reason.describe()))
                            .at(&package.path),
                    );
                }
            }
        }

        for finding in findings {
            ctx.add_diagnostic(finding);
        }

        let classification = builder.finish();
        check_internal_clientset(ctx, &classification)?;
        check_single_directory(ctx, &classification)?;

        ctx.classification = Some(classification);
        Ok(())
    }
}

fn check_internal_clientset(
    ctx: &PlanContext,
    classification: &Classification,
) -> Result<(), PlanError> {
    if ctx.clientset_package(Tree::Internal).is_some() {
        return Ok(());
    }
    match classification
        .packages
        .iter()
        .find(|p| p.tree == Tree::Internal)
    {
        Some(package) => Err(PlanError::MissingInternalClientset {
            package: package.path.clone(),
        }),
        None => Ok(()),
    }
}

fn check_single_directory(
    ctx: &PlanContext,
    classification: &Classification,
) -> Result<(), PlanError> {
    let tables = &classification.tables;
    if ctx.config.output.single_directory
        && !tables.external.is_empty()
        && !tables.internal.is_empty()
    {
        return Err(PlanError::SingleDirectoryCollision {
            dir: ctx.config.output.dir.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use informer_ir::{Member, PackageDescriptor, TypeDescriptor, Universe};
    use informer_manifest::InformerConfig;

    use super::*;
    use crate::pipeline::Severity;

    fn config() -> InformerConfig {
        InformerConfig::new(
            "out",
            "example.com/out",
            "example.com/clientset/versioned",
            "example.com/listers",
        )
    }

    fn client_type(name: &str, tags: &str) -> TypeDescriptor {
        TypeDescriptor::new("", name)
            .with_comment("+genclient")
            .with_member(Member::new("ObjectMeta", "meta.ObjectMeta", tags))
    }

    fn external() -> PackageDescriptor {
        PackageDescriptor::new("example.com/api/apps/v1")
            .with_type(client_type("Deployment", r#"json:"metadata""#))
    }

    fn internal() -> PackageDescriptor {
        PackageDescriptor::new("example.com/internal/apps").with_type(client_type("Deployment", ""))
    }

    fn run(universe: Vec<PackageDescriptor>, config: InformerConfig) -> Result<PlanContext> {
        let mut ctx = PlanContext::new(Universe::new(universe), config, Vec::<u8>::new());
        CollectPhase.run(&mut ctx)?;
        Ok(ctx)
    }

    #[test]
    fn test_collect_classifies() {
        let ctx = run(vec![external()], config()).unwrap();
        let classification = ctx.classification().unwrap();
        assert_eq!(classification.packages.len(), 1);
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_skipped_packages_reported_as_info() {
        let types_only = PackageDescriptor::new("example.com/api/apps/v1/types")
            .with_type(TypeDescriptor::new("", "DeploymentSpec"));
        let ctx = run(vec![types_only, external()], config()).unwrap();

        let infos: Vec<_> = ctx.diagnostics_of(Severity::Info).collect();
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].phase, "collect");
        assert_eq!(
            infos[0].location.as_deref(),
            Some("example.com/api/apps/v1/types")
        );
        assert_eq!(ctx.diagnostics_of(Severity::Warning).count(), 0);
    }

    #[test]
    fn test_internal_requires_internal_clientset() {
        let err = run(vec![internal()], config()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PlanError>(),
            Some(PlanError::MissingInternalClientset { package }) if package == "example.com/internal/apps"
        ));

        let config = config().with_internal_clientset("example.com/clientset/internalversion");
        assert!(run(vec![internal()], config).is_ok());
    }

    #[test]
    fn test_single_directory_collision() {
        let config = config()
            .with_internal_clientset("example.com/clientset/internalversion")
            .with_single_directory(true);
        let err = run(vec![external(), internal()], config.clone()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PlanError>(),
            Some(PlanError::SingleDirectoryCollision { .. })
        ));

        assert!(run(vec![external()], config).is_ok());
    }

    #[test]
    fn test_missing_object_meta_is_fatal() {
        let broken = PackageDescriptor::new("example.com/api/apps/v1")
            .with_type(TypeDescriptor::new("", "Deployment").with_comment("+genclient"));
        let err = run(vec![broken], config()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unable to find ObjectMeta for any types in package example.com/api/apps/v1"
        );
    }

    #[test]
    fn test_group_display_name_change_warns() {
        let v1 = external().with_comment("+groupGoName=AppsV1");
        let v2 = PackageDescriptor::new("example.com/api/apps/v2")
            .with_comment("+groupGoName=AppsV2")
            .with_type(client_type("Deployment", r#"json:"metadata""#));
        let ctx = run(vec![v1, v2], config()).unwrap();

        let warnings: Vec<_> = ctx.diagnostics_of(Severity::Warning).collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message, "group apps renamed from AppsV1 to AppsV2");
        assert_eq!(warnings[0].location.as_deref(), Some("example.com/api/apps/v2"));
        assert_eq!(
            ctx.classification().unwrap().tables.group_go_names["apps"],
            "AppsV2"
        );
    }

    #[test]
    fn test_same_display_name_is_quiet() {
        let v2 = PackageDescriptor::new("example.com/api/apps/v2")
            .with_type(client_type("Deployment", r#"json:"metadata""#));
        let ctx = run(vec![external(), v2], config()).unwrap();
        assert!(ctx.diagnostics.is_empty());
    }
}
