//! Generator records.
//!
//! A generator record carries everything the emission stage needs to render
//! one file of a target. Shared tables are reference-counted and never
//! mutated after planning.

use std::sync::Arc;

use indexmap::IndexMap;
use informer_core::PluralExceptions;
use informer_ir::{GroupVersion, GroupVersions, TypeDescriptor, Version};
use serde::{Serialize, Serializer};

use crate::{
    classify::GroupVersionTable,
    naming::{NameStrategy, NameSystems, Namer},
    order::Orderer,
};

/// Group package name -> group display identifier.
pub type GroupGoNames = IndexMap<String, String>;

/// Eligible types per group version.
pub type TypesForGroupVersion = IndexMap<GroupVersion, Vec<Arc<TypeDescriptor>>>;

/// One file to render inside a target.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Generator {
    FactoryInterfaces(FactoryInterfacesGenerator),
    Factory(FactoryGenerator),
    Generic(GenericGenerator),
    GroupInterface(GroupInterfaceGenerator),
    VersionInterface(VersionInterfaceGenerator),
    Informer(InformerGenerator),
}

impl Generator {
    /// Output name of the generated file, without extension.
    pub fn name(&self) -> String {
        match self {
            Generator::FactoryInterfaces(_) => "factory_interfaces".to_string(),
            Generator::Factory(_) => "factory".to_string(),
            Generator::Generic(_) => "generic".to_string(),
            Generator::GroupInterface(_) | Generator::VersionInterface(_) => {
                "interface".to_string()
            }
            Generator::Informer(g) => g.name(),
        }
    }

    pub fn output_filename(&self) -> String {
        format!("{}.go", self.name())
    }

    /// One-line description used in plan summaries.
    pub fn describe(&self) -> String {
        match self {
            Generator::FactoryInterfaces(g) => {
                format!("factory interfaces for clientset {}", g.clientset_package)
            }
            Generator::Factory(g) => format!(
                "shared informer factory for {} group(s)",
                g.group_versions.len()
            ),
            Generator::Generic(g) => {
                format!("generic informer lookup for {} resource(s)", g.accessors().len())
            }
            Generator::GroupInterface(g) => format!(
                "group interface {} with {} version(s)",
                g.group_versions.group.non_empty(),
                g.group_versions.versions.len()
            ),
            Generator::VersionInterface(g) => {
                format!("version interface with {} type(s)", g.types.len())
            }
            Generator::Informer(g) => format!(
                "informer for {} in {}",
                g.type_to_generate.name, g.group_version
            ),
        }
    }

    pub fn as_informer(&self) -> Option<&InformerGenerator> {
        match self {
            Generator::Informer(g) => Some(g),
            _ => None,
        }
    }
}

/// Declares the factory abstraction shared by every informer of a tree.
#[derive(Debug, Clone, Serialize)]
pub struct FactoryInterfacesGenerator {
    pub output_package: String,
    pub clientset_package: String,
}

/// The shared informer factory.
#[derive(Debug, Clone, Serialize)]
pub struct FactoryGenerator {
    pub output_package: String,
    pub group_versions: Arc<GroupVersionTable>,
    pub clientset_package: String,
    pub internal_interfaces_package: String,
    pub group_go_names: Arc<GroupGoNames>,
}

/// Resource-keyed lookup of generic informers.
#[derive(Debug, Clone, Serialize)]
pub struct GenericGenerator {
    pub output_package: String,
    pub group_versions: Arc<GroupVersionTable>,
    pub plural_exceptions: Arc<PluralExceptions>,
    #[serde(serialize_with = "serialize_types_for_group_version")]
    pub types_for_group_version: Arc<TypesForGroupVersion>,
    pub group_go_names: Arc<GroupGoNames>,
}

/// One case of the generic lookup: a resource of a group version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenericAccessor {
    pub group_version: GroupVersion,
    pub group_go_name: String,
    pub type_name: String,
    /// Public plural, e.g. `Deployments`.
    pub plural: String,
    /// Resource name, e.g. `deployments`.
    pub resource: String,
}

impl GenericGenerator {
    /// Accessors ordered by lower-cased group, then version, then private
    /// type name.
    pub fn accessors(&self) -> Vec<GenericAccessor> {
        let systems = NameSystems::new(Arc::clone(&self.plural_exceptions));
        let public_plural = systems.get(NameStrategy::PublicPlural);
        let resource = systems.get(NameStrategy::AllLowercasePlural);
        let orderer = Orderer::private();

        let mut groups: Vec<(&String, &GroupVersions)> = self.group_versions.iter().collect();
        groups.sort_by_key(|(_, gvs)| gvs.group.non_empty().to_lowercase());

        let mut accessors = Vec::new();
        for (package_name, gvs) in groups {
            let group_go_name = self
                .group_go_names
                .get(package_name)
                .cloned()
                .unwrap_or_default();

            let mut versions: Vec<&Version> = gvs.versions.iter().map(|v| &v.version).collect();
            versions.sort_by(|a, b| a.non_empty().cmp(b.non_empty()));
            versions.dedup();

            for version in versions {
                let group_version = GroupVersion {
                    group: gvs.group.clone(),
                    version: version.clone(),
                };
                let Some(types) = self.types_for_group_version.get(&group_version) else {
                    continue;
                };
                for ty in orderer.order(types) {
                    accessors.push(GenericAccessor {
                        group_version: group_version.clone(),
                        group_go_name: group_go_name.clone(),
                        type_name: ty.name.clone(),
                        plural: public_plural.name(&ty),
                        resource: resource.name(&ty),
                    });
                }
            }
        }
        accessors
    }
}

/// Per-group interface listing the group's versions.
#[derive(Debug, Clone, Serialize)]
pub struct GroupInterfaceGenerator {
    pub output_package: String,
    pub group_versions: GroupVersions,
    pub internal_interfaces_package: String,
}

/// Per-version interface listing the version's informers.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInterfaceGenerator {
    pub output_package: String,
    #[serde(serialize_with = "serialize_type_names")]
    pub types: Vec<Arc<TypeDescriptor>>,
    pub internal_interfaces_package: String,
}

/// The informer of one resource type.
#[derive(Debug, Clone, Serialize)]
pub struct InformerGenerator {
    pub output_package: String,
    pub group_package_name: String,
    pub group_version: GroupVersion,
    pub group_go_name: String,
    #[serde(rename = "type", serialize_with = "serialize_type_name")]
    pub type_to_generate: Arc<TypeDescriptor>,
    pub clientset_package: String,
    pub listers_package: String,
    pub internal_interfaces_package: String,
}

impl InformerGenerator {
    /// The lower-cased type name, unique within a version.
    pub fn name(&self) -> String {
        self.type_to_generate.name.to_lowercase()
    }
}

fn serialize_type_name<S: Serializer>(ty: &Arc<TypeDescriptor>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&ty.qualified_name())
}

fn serialize_type_names<S: Serializer>(
    types: &[Arc<TypeDescriptor>],
    s: S,
) -> Result<S::Ok, S::Error> {
    s.collect_seq(types.iter().map(|t| t.qualified_name()))
}

fn serialize_types_for_group_version<S: Serializer>(
    table: &Arc<TypesForGroupVersion>,
    s: S,
) -> Result<S::Ok, S::Error> {
    s.collect_map(table.iter().map(|(gv, types)| {
        let names: Vec<String> = types.iter().map(|t| t.qualified_name()).collect();
        (gv.to_string(), names)
    }))
}

#[cfg(test)]
mod tests {
    use informer_ir::Group;

    use super::*;

    fn ty(package: &str, name: &str) -> Arc<TypeDescriptor> {
        Arc::new(TypeDescriptor::new(package, name))
    }

    fn generic(exceptions: PluralExceptions) -> GenericGenerator {
        let mut table = GroupVersionTable::new();
        let mut apps = GroupVersions::new("apps", Group::new("apps"));
        apps.push(Version::new("v1beta1"), "example.com/api/apps/v1beta1");
        apps.push(Version::new("v1"), "example.com/api/apps/v1");
        let mut core = GroupVersions::new("core", Group::new("api"));
        core.push(Version::new("v1"), "example.com/api/core/v1");
        table.insert("apps".to_string(), apps);
        table.insert("core".to_string(), core);

        let mut types = TypesForGroupVersion::new();
        types.insert(
            GroupVersion::new("apps", "v1beta1"),
            vec![ty("example.com/api/apps/v1beta1", "Deployment")],
        );
        types.insert(
            GroupVersion::new("apps", "v1"),
            vec![
                ty("example.com/api/apps/v1", "StatefulSet"),
                ty("example.com/api/apps/v1", "DaemonSet"),
            ],
        );
        types.insert(
            GroupVersion::new("api", "v1"),
            vec![
                ty("example.com/api/core/v1", "Pod"),
                ty("example.com/api/core/v1", "Endpoints"),
            ],
        );

        let mut go_names = GroupGoNames::new();
        go_names.insert("apps".to_string(), "Apps".to_string());
        go_names.insert("core".to_string(), "Core".to_string());

        GenericGenerator {
            output_package: "example.com/client/informers/externalversions".to_string(),
            group_versions: Arc::new(table),
            plural_exceptions: Arc::new(exceptions),
            types_for_group_version: Arc::new(types),
            group_go_names: Arc::new(go_names),
        }
    }

    #[test]
    fn test_accessor_order() {
        let accessors = generic(PluralExceptions::defaults()).accessors();
        let keys: Vec<_> = accessors
            .iter()
            .map(|a| format!("{} {}", a.group_version, a.resource))
            .collect();
        assert_eq!(
            keys,
            vec![
                "apps/v1 daemonsets",
                "apps/v1 statefulsets",
                "apps/v1beta1 deployments",
                "core/v1 endpoints",
                "core/v1 pods",
            ]
        );
    }

    #[test]
    fn test_accessor_uses_plural_exceptions() {
        let accessors = generic(PluralExceptions::defaults()).accessors();
        let endpoints = accessors.iter().find(|a| a.type_name == "Endpoints").unwrap();
        assert_eq!(endpoints.plural, "Endpoints");
        assert_eq!(endpoints.resource, "endpoints");
        assert_eq!(endpoints.group_go_name, "Core");

        let accessors = generic(PluralExceptions::new()).accessors();
        let endpoints = accessors.iter().find(|a| a.type_name == "Endpoints").unwrap();
        assert_eq!(endpoints.plural, "Endpointses");
    }

    #[test]
    fn test_generator_names() {
        let informer = Generator::Informer(InformerGenerator {
            output_package: "example.com/client/informers/externalversions/apps/v1".to_string(),
            group_package_name: "apps".to_string(),
            group_version: GroupVersion::new("apps", "v1"),
            group_go_name: "Apps".to_string(),
            type_to_generate: ty("example.com/api/apps/v1", "ReplicaSet"),
            clientset_package: "example.com/client/clientset/versioned".to_string(),
            listers_package: "example.com/client/listers".to_string(),
            internal_interfaces_package:
                "example.com/client/informers/externalversions/internalinterfaces".to_string(),
        });
        assert_eq!(informer.name(), "replicaset");
        assert_eq!(informer.output_filename(), "replicaset.go");
        assert_eq!(informer.describe(), "informer for ReplicaSet in apps/v1");
        assert!(informer.as_informer().is_some());

        let generic = Generator::Generic(generic(PluralExceptions::defaults()));
        assert_eq!(generic.name(), "generic");
        assert_eq!(generic.describe(), "generic informer lookup for 5 resource(s)");
        assert!(generic.as_informer().is_none());
    }

    #[test]
    fn test_serialize_informer_as_type_name() {
        let generator = InformerGenerator {
            output_package: "out/apps/v1".to_string(),
            group_package_name: "apps".to_string(),
            group_version: GroupVersion::new("apps", "v1"),
            group_go_name: "Apps".to_string(),
            type_to_generate: ty("example.com/api/apps/v1", "Deployment"),
            clientset_package: "clientset".to_string(),
            listers_package: "listers".to_string(),
            internal_interfaces_package: "out/internalinterfaces".to_string(),
        };
        let value = serde_json::to_value(Generator::Informer(generator)).unwrap();
        assert_eq!(value["kind"], "informer");
        assert_eq!(value["type"], "example.com/api/apps/v1.Deployment");
    }

    #[test]
    fn test_serialize_generic_tables() {
        let value = serde_json::to_value(Generator::Generic(generic(PluralExceptions::defaults())))
            .unwrap();
        assert_eq!(value["kind"], "generic");
        assert_eq!(
            value["types_for_group_version"]["core/v1"][0],
            "example.com/api/core/v1.Pod"
        );
        assert_eq!(value["plural_exceptions"][0], "Endpoints=Endpoints");
    }
}
