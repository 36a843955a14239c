//! Group and version identities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An API group name, e.g. `apps` or `flowcontrol.apiserver.k8s.io`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Group(String);

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name used for packages and identifiers: the legacy `api` group
    /// is spelled `core`.
    pub fn non_empty(&self) -> &str {
        if self.0 == "api" { "core" } else { &self.0 }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An API version name, e.g. `v1`. Empty for an internal package.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(String);

impl Version {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The unversioned (internal) version.
    pub fn internal() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_internal(&self) -> bool {
        self.0.is_empty()
    }

    /// The name used for packages and identifiers: the internal version is
    /// spelled `internalVersion`.
    pub fn non_empty(&self) -> &str {
        if self.0.is_empty() {
            "internalVersion"
        } else {
            &self.0
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A (group, version) pair identifying one input package.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupVersion {
    pub group: Group,
    pub version: Version,
}

impl GroupVersion {
    pub fn new(group: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group: Group::new(group),
            version: Version::new(version),
        }
    }
}

impl fmt::Display for GroupVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group.non_empty(), self.version.non_empty())
    }
}

/// One version of a group together with the package that declares it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageVersion {
    pub version: Version,
    /// Import path of the source package.
    pub package: String,
}

/// All versions seen for one group package.
///
/// Versions are kept in traversal order, not sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupVersions {
    /// Output package name (the path-derived group).
    pub package_name: String,
    /// Group identity after overrides.
    pub group: Group,
    pub versions: Vec<PackageVersion>,
}

impl GroupVersions {
    pub fn new(package_name: impl Into<String>, group: Group) -> Self {
        Self {
            package_name: package_name.into(),
            group,
            versions: Vec::new(),
        }
    }

    /// Append a version. Records only grow.
    pub fn push(&mut self, version: Version, package: impl Into<String>) {
        self.versions.push(PackageVersion {
            version,
            package: package.into(),
        });
    }
}
