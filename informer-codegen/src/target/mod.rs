//! Planned output targets.
//!
//! A [`Target`] is one output package: where it goes, the header every file
//! starts with, the generators that render its files, and an optional filter
//! restricting which types it applies to.

mod generators;
mod layout;
mod summary;

use std::{fmt, path::PathBuf, sync::Arc};

pub use generators::{
    FactoryGenerator, FactoryInterfacesGenerator, GenericAccessor, GenericGenerator, Generator,
    GroupGoNames, GroupInterfaceGenerator, InformerGenerator, TypesForGroupVersion,
    VersionInterfaceGenerator,
};
use informer_ir::TypeDescriptor;
pub use layout::{INTERNAL_INTERFACES, Layout, Location, TreeRoot};
use serde::Serialize;
pub use summary::render_summary;

pub use crate::classify::Tree;
use crate::{PlanError, tags::is_informable};

/// The kind of output package a target produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetKind {
    FactoryInterfaces,
    Factory,
    GroupInterface,
    VersionInterface,
}

impl TargetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::FactoryInterfaces => "factory-interfaces",
            TargetKind::Factory => "factory",
            TargetKind::GroupInterface => "group-interface",
            TargetKind::VersionInterface => "version-interface",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Restricts the types a target applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeFilter {
    /// Generated clients that support both list and watch; the same test
    /// the classifier uses.
    ListWatchable,
}

impl TypeFilter {
    pub fn matches(&self, ty: &TypeDescriptor) -> Result<bool, PlanError> {
        match self {
            TypeFilter::ListWatchable => is_informable(ty),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::ListWatchable => "list-watchable",
        }
    }
}

/// One planned output package.
#[derive(Debug, Clone, Serialize)]
pub struct Target {
    pub kind: TargetKind,
    pub tree: Tree,
    pub package_name: String,
    pub package_path: String,
    pub dir: PathBuf,
    /// Boilerplate prepended verbatim to every file, shared by all targets.
    #[serde(skip)]
    pub header: Arc<[u8]>,
    pub generators: Vec<Generator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<TypeFilter>,
}

impl Target {
    pub(crate) fn new(kind: TargetKind, tree: Tree, location: Location, header: Arc<[u8]>) -> Self {
        Self {
            kind,
            tree,
            package_name: location.package_name,
            package_path: location.package_path,
            dir: location.dir,
            header,
            generators: Vec::new(),
            filter: None,
        }
    }

    pub(crate) fn with_generator(mut self, generator: Generator) -> Self {
        self.generators.push(generator);
        self
    }

    pub(crate) fn with_filter(mut self, filter: TypeFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Whether the target applies to `ty`. Targets without a filter apply
    /// to every type.
    pub fn applies_to(&self, ty: &TypeDescriptor) -> Result<bool, PlanError> {
        match &self.filter {
            Some(filter) => filter.matches(ty),
            None => Ok(true),
        }
    }

    /// Informer generators of a version target, in declaration order.
    pub fn informers(&self) -> impl Iterator<Item = &InformerGenerator> {
        self.generators.iter().filter_map(Generator::as_informer)
    }
}
