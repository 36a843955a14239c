//! Versions phase - one target per classified group version.

use std::sync::Arc;

use eyre::Result;
use informer_ir::TypeDescriptor;

use crate::{
    PlanError,
    classify::ClassifiedPackage,
    order::Orderer,
    pipeline::{Phase, PlanContext},
    target::{
        Generator, InformerGenerator, Target, TargetKind, TreeRoot, TypeFilter,
        VersionInterfaceGenerator,
    },
};

/// Phase that plans the version targets.
///
/// Each classified package yields one target holding the version interface
/// and one informer per informable type, with types in private-name order.
/// Must run after `CollectPhase`.
pub struct VersionsPhase;

impl Phase for VersionsPhase {
    fn name(&self) -> &'static str {
        "versions"
    }

    fn description(&self) -> &'static str {
        "Plan version interfaces and informers"
    }

    fn run(&self, ctx: &mut PlanContext) -> Result<()> {
        let layout = ctx.layout();
        let orderer = Orderer::private();
        let mut targets = Vec::new();

        for package in &ctx.classification()?.packages {
            let root = layout.tree(package.tree);
            let clientset = ctx.clientset_package(package.tree).ok_or_else(|| {
                PlanError::MissingInternalClientset {
                    package: package.path.clone(),
                }
            })?;
            let packages = ImportPackages {
                clientset,
                listers: &ctx.config.packages.listers,
            };

            let target = version_target(
                &root,
                package,
                orderer.order(&package.types),
                &packages,
                Arc::clone(&ctx.header),
            );
            tracing::debug!(
                "planned {} with {} informer(s)",
                target.package_path,
                target.informers().count()
            );
            targets.push(target);
        }

        ctx.targets.extend(targets);
        Ok(())
    }
}

struct ImportPackages<'a> {
    clientset: &'a str,
    listers: &'a str,
}

fn version_target(
    root: &TreeRoot,
    package: &ClassifiedPackage,
    types: Vec<Arc<TypeDescriptor>>,
    packages: &ImportPackages<'_>,
    header: Arc<[u8]>,
) -> Target {
    let location = root.version(&package.group_package_name, &package.group_version.version);
    let output_package = location.package_path.clone();
    let internal_interfaces_package = root.internal_interfaces().package_path;

    let informers: Vec<Generator> = types
        .iter()
        .map(|ty| {
            Generator::Informer(InformerGenerator {
                output_package: output_package.clone(),
                group_package_name: package.group_package_name.clone(),
                group_version: package.group_version.clone(),
                group_go_name: package.group_go_name.clone(),
                type_to_generate: Arc::clone(ty),
                clientset_package: packages.clientset.to_string(),
                listers_package: packages.listers.to_string(),
                internal_interfaces_package: internal_interfaces_package.clone(),
            })
        })
        .collect();

    let mut target = Target::new(TargetKind::VersionInterface, package.tree, location, header)
        .with_filter(TypeFilter::ListWatchable)
        .with_generator(Generator::VersionInterface(VersionInterfaceGenerator {
            output_package,
            types,
            internal_interfaces_package,
        }));
    target.generators.extend(informers);
    target
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use informer_ir::{Member, PackageDescriptor, Universe};
    use informer_manifest::InformerConfig;

    use super::*;
    use crate::pipeline::phases::CollectPhase;

    fn client_type(name: &str) -> TypeDescriptor {
        TypeDescriptor::new("", name)
            .with_comment("+genclient")
            .with_member(Member::new("ObjectMeta", "meta.ObjectMeta", r#"json:"metadata""#))
    }

    fn run(packages: Vec<PackageDescriptor>) -> PlanContext {
        let config = InformerConfig::new(
            "out",
            "example.com/out",
            "example.com/clientset/versioned",
            "example.com/listers",
        );
        let mut ctx = PlanContext::new(Universe::new(packages), config, &b"// header\n"[..]);
        CollectPhase.run(&mut ctx).unwrap();
        VersionsPhase.run(&mut ctx).unwrap();
        ctx
    }

    #[test]
    fn test_version_target() {
        let ctx = run(vec![
            PackageDescriptor::new("example.com/api/apps/v1")
                .with_type(client_type("StatefulSet"))
                .with_type(client_type("Deployment")),
        ]);
        assert_eq!(ctx.targets.len(), 1);

        let target = &ctx.targets[0];
        assert_eq!(target.kind, TargetKind::VersionInterface);
        assert_eq!(target.package_name, "v1");
        assert_eq!(target.package_path, "example.com/out/externalversions/apps/v1");
        assert_eq!(target.dir, PathBuf::from("out/externalversions/apps/v1"));
        assert_eq!(target.filter, Some(TypeFilter::ListWatchable));
        assert_eq!(&*target.header, b"// header\n");

        let names: Vec<_> = target.generators.iter().map(Generator::name).collect();
        assert_eq!(names, vec!["interface", "deployment", "statefulset"]);
    }

    #[test]
    fn test_informer_fields() {
        let ctx = run(vec![
            PackageDescriptor::new("example.com/api/apps/v1")
                .with_comment("+groupName=apps.example.com")
                .with_type(client_type("Deployment")),
        ]);
        let informer = ctx.targets[0].informers().next().unwrap();
        assert_eq!(informer.group_package_name, "apps");
        assert_eq!(informer.group_version.group.as_str(), "apps.example.com");
        assert_eq!(informer.group_go_name, "Apps");
        assert_eq!(informer.clientset_package, "example.com/clientset/versioned");
        assert_eq!(informer.listers_package, "example.com/listers");
        assert_eq!(
            informer.internal_interfaces_package,
            "example.com/out/externalversions/internalinterfaces"
        );
    }

    #[test]
    fn test_requires_collect() {
        let mut ctx = PlanContext::new(
            Universe::default(),
            InformerConfig::new("out", "example.com/out", "cs", "listers"),
            Vec::<u8>::new(),
        );
        assert!(VersionsPhase.run(&mut ctx).is_err());
    }
}
