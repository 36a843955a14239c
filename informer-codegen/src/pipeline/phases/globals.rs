//! Globals phase - factory, factory-interfaces and group targets.

use std::sync::Arc;

use eyre::Result;

use crate::{
    PlanError,
    classify::Tree,
    pipeline::{Phase, PlanContext},
    target::{
        FactoryGenerator, FactoryInterfacesGenerator, GenericGenerator, Generator,
        GroupInterfaceGenerator, Target, TargetKind, TypeFilter,
    },
};

/// Phase that plans the per-tree targets.
///
/// For each non-empty tree, external first, plans the factory-interfaces
/// target, the factory target and one group target per group in first-seen
/// order. The trees are independent of each other. Must run after
/// `CollectPhase`.
pub struct GlobalsPhase;

impl Phase for GlobalsPhase {
    fn name(&self) -> &'static str {
        "globals"
    }

    fn description(&self) -> &'static str {
        "Plan factories and group interfaces"
    }

    fn run(&self, ctx: &mut PlanContext) -> Result<()> {
        let layout = ctx.layout();
        let tables = &ctx.classification()?.tables;
        let group_go_names = Arc::new(tables.group_go_names.clone());
        let types_for_group_version = Arc::new(tables.types_for_group_version.clone());
        let plural_exceptions = ctx.name_systems.shared_exceptions();
        let mut targets = Vec::new();

        for tree in [Tree::External, Tree::Internal] {
            let table = tables.table(tree);
            if table.is_empty() {
                continue;
            }

            let clientset = ctx
                .clientset_package(tree)
                .ok_or_else(|| PlanError::MissingInternalClientset {
                    package: table
                        .values()
                        .flat_map(|gvs| gvs.versions.iter())
                        .map(|v| v.package.clone())
                        .next()
                        .unwrap_or_default(),
                })?
                .to_string();

            let root = layout.tree(tree);
            let interfaces = root.internal_interfaces();
            let group_versions = Arc::new(table.clone());

            targets.push(
                Target::new(
                    TargetKind::FactoryInterfaces,
                    tree,
                    interfaces.clone(),
                    Arc::clone(&ctx.header),
                )
                .with_generator(Generator::FactoryInterfaces(FactoryInterfacesGenerator {
                    output_package: interfaces.package_path.clone(),
                    clientset_package: clientset.clone(),
                })),
            );

            let factory = root.factory();
            targets.push(
                Target::new(TargetKind::Factory, tree, factory.clone(), Arc::clone(&ctx.header))
                    .with_generator(Generator::Factory(FactoryGenerator {
                        output_package: factory.package_path.clone(),
                        group_versions: Arc::clone(&group_versions),
                        clientset_package: clientset,
                        internal_interfaces_package: interfaces.package_path.clone(),
                        group_go_names: Arc::clone(&group_go_names),
                    }))
                    .with_generator(Generator::Generic(GenericGenerator {
                        output_package: factory.package_path,
                        group_versions: Arc::clone(&group_versions),
                        plural_exceptions: Arc::clone(&plural_exceptions),
                        types_for_group_version: Arc::clone(&types_for_group_version),
                        group_go_names: Arc::clone(&group_go_names),
                    })),
            );

            for gvs in table.values() {
                let location = root.group(&gvs.package_name);
                let output_package = location.package_path.clone();
                targets.push(
                    Target::new(TargetKind::GroupInterface, tree, location, Arc::clone(&ctx.header))
                        .with_filter(TypeFilter::ListWatchable)
                        .with_generator(Generator::GroupInterface(GroupInterfaceGenerator {
                            output_package,
                            group_versions: gvs.clone(),
                            internal_interfaces_package: interfaces.package_path.clone(),
                        })),
                );
            }

            tracing::info!(
                "planned {} tree: {} group(s), {} version(s)",
                tree,
                table.len(),
                table.values().map(|gvs| gvs.versions.len()).sum::<usize>()
            );
        }

        ctx.targets.extend(targets);
        Ok(())
    }
}
