//! Group/version classification.
//!
//! Each input package is classified as internal or external, given a
//! [`GroupVersion`], and its informable types are bucketed into the
//! aggregation tables the global targets are built from.

use std::sync::Arc;

use indexmap::IndexMap;
use informer_core::{first_dot_segment, join_package_path, last_path_segment, to_initial_upper};
use informer_ir::{Group, GroupVersion, GroupVersions, PackageDescriptor, TypeDescriptor, Version};
use serde::Serialize;

use crate::{
    PlanError,
    object_meta::locate_object_meta,
    tags::{GroupTags, tag_types},
};

/// Which output tree a package belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tree {
    /// Versioned, wire-serialized packages.
    External,
    /// The unversioned in-process representation.
    Internal,
}

impl Tree {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tree::External => "external",
            Tree::Internal => "internal",
        }
    }

    /// Sub-directory of the output root holding this tree.
    pub fn subdir(&self) -> &'static str {
        match self {
            Tree::External => "externalversions",
            Tree::Internal => "internalversion",
        }
    }
}

impl std::fmt::Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Group package name -> aggregated versions, in first-seen order.
pub type GroupVersionTable = IndexMap<String, GroupVersions>;

/// A package that contributes at least one informer.
#[derive(Debug, Clone)]
pub struct ClassifiedPackage {
    /// Cleaned import path of the source package.
    pub path: String,
    pub tree: Tree,
    pub group_version: GroupVersion,
    /// Path-derived group name used for output directories.
    pub group_package_name: String,
    /// Group display identifier in effect when the package was classified.
    pub group_go_name: String,
    /// Informable types in declaration order.
    pub types: Vec<Arc<TypeDescriptor>>,
}

/// Why a package contributes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No type requests a client.
    NoClientTypes,
    /// Client types exist but none can both list and watch.
    NoInformableTypes,
}

impl SkipReason {
    pub fn describe(&self) -> &'static str {
        match self {
            SkipReason::NoClientTypes => "no types request a client",
            SkipReason::NoInformableTypes => "no client types support both list and watch",
        }
    }
}

/// Result of classifying one package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageOutcome {
    /// Registered as `packages[index]`.
    Classified(usize),
    Skipped(SkipReason),
}

/// Aggregation tables built over all classified packages.
#[derive(Debug, Clone, Default)]
pub struct GroupVersionTables {
    pub external: GroupVersionTable,
    pub internal: GroupVersionTable,
    /// Group package name -> display identifier (last write wins).
    pub group_go_names: IndexMap<String, String>,
    /// Informable types per group version, in traversal order.
    pub types_for_group_version: IndexMap<GroupVersion, Vec<Arc<TypeDescriptor>>>,
}

impl GroupVersionTables {
    pub fn table(&self, tree: Tree) -> &GroupVersionTable {
        match tree {
            Tree::External => &self.external,
            Tree::Internal => &self.internal,
        }
    }

    fn table_mut(&mut self, tree: Tree) -> &mut GroupVersionTable {
        match tree {
            Tree::External => &mut self.external,
            Tree::Internal => &mut self.internal,
        }
    }
}

/// Completed classification handed to target planning.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    /// Classified packages in traversal order.
    pub packages: Vec<ClassifiedPackage>,
    pub tables: GroupVersionTables,
}

/// Accumulates a [`Classification`] one package at a time.
///
/// # Example
///
/// ```ignore
/// let mut builder = ClassificationBuilder::new();
/// for package in universe.packages() {
///     builder.classify(package)?;
/// }
/// let classification = builder.finish();
/// ```
#[derive(Debug, Default)]
pub struct ClassificationBuilder {
    classification: Classification,
    /// (tree, group package name, version) -> package that claimed it.
    claimed: IndexMap<(Tree, String, Version), String>,
}

impl ClassificationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one package and register its informable types.
    ///
    /// A package is registered only if it has at least one informable type;
    /// otherwise nothing is recorded and the skip reason is returned.
    ///
    /// # Errors
    ///
    /// Fails on malformed tags, a client package without ObjectMeta, a path
    /// from which no group (version) can be derived, or a group version
    /// already claimed by another package of the same tree.
    pub fn classify(&mut self, package: &PackageDescriptor) -> Result<PackageOutcome, PlanError> {
        let path = join_package_path([package.path.as_str()]);
        let tagged = tag_types(package)?;

        let Some(object_meta) = locate_object_meta(&path, &tagged)? else {
            return Ok(PackageOutcome::Skipped(SkipReason::NoClientTypes));
        };
        let tree = if object_meta.internal {
            Tree::Internal
        } else {
            Tree::External
        };

        let mut group_version = derive_group_version(&path, tree)?;
        let group_package_name = group_version.group.non_empty().to_string();

        let overrides = GroupTags::for_package(package)?;
        if let Some(group_name) = overrides.group_name {
            group_version.group = Group::new(group_name);
        }
        let group_go_name = match overrides.group_go_name {
            Some(go_name) => to_initial_upper(&go_name),
            None => to_initial_upper(first_dot_segment(group_version.group.non_empty())),
        };

        let types: Vec<_> = tagged
            .iter()
            .filter(|t| t.tags.is_informable())
            .map(|t| Arc::new(t.ty.clone()))
            .collect();
        if types.is_empty() {
            return Ok(PackageOutcome::Skipped(SkipReason::NoInformableTypes));
        }

        let key = (tree, group_package_name.clone(), group_version.version.clone());
        if let Some(previous) = self.claimed.get(&key) {
            return Err(PlanError::DuplicateGroupVersion {
                package: path,
                previous: previous.clone(),
            });
        }
        self.claimed.insert(key, path.clone());

        let tables = &mut self.classification.tables;
        tables
            .group_go_names
            .insert(group_package_name.clone(), group_go_name.clone());
        tables
            .types_for_group_version
            .entry(group_version.clone())
            .or_default()
            .extend(types.iter().cloned());
        tables
            .table_mut(tree)
            .entry(group_package_name.clone())
            .or_insert_with(|| GroupVersions::new(&group_package_name, group_version.group.clone()))
            .push(group_version.version.clone(), &path);

        let packages = &mut self.classification.packages;
        packages.push(ClassifiedPackage {
            path,
            tree,
            group_version,
            group_package_name,
            group_go_name,
            types,
        });
        Ok(PackageOutcome::Classified(packages.len() - 1))
    }

    /// Packages classified so far.
    pub fn packages(&self) -> &[ClassifiedPackage] {
        &self.classification.packages
    }

    pub fn finish(self) -> Classification {
        self.classification
    }
}

/// Derive the path-based group version of a cleaned package path.
///
/// Internal packages end in `<group>`; external packages end in
/// `<group>/<version>`. Empty segments never name a group or version.
pub fn derive_group_version(path: &str, tree: Tree) -> Result<GroupVersion, PlanError> {
    match tree {
        Tree::Internal => {
            let group = last_path_segment(path)
                .filter(|group| !group.is_empty())
                .ok_or_else(|| PlanError::InternalGroup {
                    package: path.to_string(),
                })?;
            Ok(GroupVersion {
                group: Group::new(group),
                version: Version::internal(),
            })
        }
        Tree::External => {
            let mut parts = path.rsplit('/');
            match (parts.next(), parts.next()) {
                (Some(version), Some(group)) if !version.is_empty() && !group.is_empty() => {
                    Ok(GroupVersion::new(group, version))
                }
                _ => Err(PlanError::ExternalGroupVersion {
                    package: path.to_string(),
                }),
            }
        }
    }
}
