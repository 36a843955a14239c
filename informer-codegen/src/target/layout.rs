//! Output directory and package layout.

use std::path::{Path, PathBuf};

use informer_core::{first_dot_segment, join_package_path, last_path_segment};
use informer_ir::Version;
use informer_manifest::OutputConfig;

use crate::classify::Tree;

/// Sub-package shared by the factory abstraction of one tree.
pub const INTERNAL_INTERFACES: &str = "internalinterfaces";

/// Where one output unit lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub dir: PathBuf,
    pub package_path: String,
    pub package_name: String,
}

/// Output root shared by both trees.
#[derive(Debug, Clone)]
pub struct Layout {
    dir: PathBuf,
    package: String,
    single_directory: bool,
}

impl Layout {
    pub fn new(dir: impl Into<PathBuf>, package: impl Into<String>, single_directory: bool) -> Self {
        Self {
            dir: dir.into(),
            package: package.into(),
            single_directory,
        }
    }

    pub fn from_config(output: &OutputConfig) -> Self {
        Self::new(&output.dir, &output.package, output.single_directory)
    }

    /// Root of one tree: `<root>/externalversions`, `<root>/internalversion`,
    /// or the root itself in single-directory mode.
    pub fn tree(&self, tree: Tree) -> TreeRoot {
        if self.single_directory {
            return TreeRoot {
                tree,
                dir: self.dir.clone(),
                package: join_package_path([self.package.as_str()]),
            };
        }
        TreeRoot {
            tree,
            dir: self.dir.join(tree.subdir()),
            package: join_package_path([self.package.as_str(), tree.subdir()]),
        }
    }
}

/// Resolved root of one output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRoot {
    pub tree: Tree,
    pub dir: PathBuf,
    pub package: String,
}

impl TreeRoot {
    /// The factory package itself, named after the root directory.
    pub fn factory(&self) -> Location {
        Location {
            dir: self.dir.clone(),
            package_path: self.package.clone(),
            package_name: dir_base_name(&self.dir),
        }
    }

    pub fn internal_interfaces(&self) -> Location {
        self.nested(&[INTERNAL_INTERFACES], INTERNAL_INTERFACES.to_string())
    }

    /// `<root>/<group package>`, named after the first dot segment.
    pub fn group(&self, group_package_name: &str) -> Location {
        self.nested(
            &[group_package_name],
            first_dot_segment(group_package_name).to_string(),
        )
    }

    /// `<root>/<group package>/<lower(version)>`.
    pub fn version(&self, group_package_name: &str, version: &Version) -> Location {
        let version = version.non_empty().to_lowercase();
        self.nested(&[group_package_name, version.as_str()], version.clone())
    }

    fn nested(&self, segments: &[&str], package_name: String) -> Location {
        let dir = segments.iter().fold(self.dir.clone(), |dir, s| dir.join(s));
        let package_path =
            join_package_path(std::iter::once(self.package.as_str()).chain(segments.iter().copied()));
        Location {
            dir,
            package_path,
            package_name,
        }
    }
}

fn dir_base_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .or_else(|| last_path_segment(&dir.to_string_lossy()).map(str::to_string))
        .unwrap_or_default()
}
