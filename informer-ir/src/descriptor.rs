//! Type and package descriptors.

use serde::{Deserialize, Serialize};

/// A member (field) of a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Field name, e.g. `ObjectMeta`.
    pub name: String,
    /// Fully qualified name of the member's type.
    #[serde(rename = "type")]
    pub type_ref: String,
    /// Raw struct tag string, e.g. `json:"metadata,omitempty"`.
    #[serde(default)]
    pub tags: String,
}

impl Member {
    pub fn new(
        name: impl Into<String>,
        type_ref: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_ref: type_ref.into(),
            tags: tags.into(),
        }
    }
}

/// A resource type definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TypeDescriptor {
    /// Unqualified type name, e.g. `Deployment`.
    pub name: String,
    /// Import path of the owning package. Filled in from the enclosing
    /// package when loaded from a universe file.
    #[serde(default)]
    pub package: String,
    /// Comment lines directly attached to the type.
    #[serde(default)]
    pub comments: Vec<String>,
    /// Comment lines of the nearest enclosing comment block above the
    /// type's own block.
    #[serde(default)]
    pub second_closest_comments: Vec<String>,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl TypeDescriptor {
    /// Create a type with no comments or members.
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            comments: Vec::new(),
            second_closest_comments: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Add a comment line to the type's own block.
    pub fn with_comment(mut self, line: impl Into<String>) -> Self {
        self.comments.push(line.into());
        self
    }

    /// Add a comment line to the enclosing block.
    pub fn with_second_closest_comment(mut self, line: impl Into<String>) -> Self {
        self.second_closest_comments.push(line.into());
        self
    }

    /// Add a member.
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// The merged comment block used for tag interpretation: the enclosing
    /// block first, then the type's own lines.
    pub fn comment_block(&self) -> Vec<&str> {
        self.second_closest_comments
            .iter()
            .chain(self.comments.iter())
            .map(String::as_str)
            .collect()
    }

    /// Find a member by name.
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Package-qualified name, e.g. `example.com/api/apps/v1.Deployment`.
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }
}

/// A package of types sharing an import path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDescriptor {
    /// Import path, e.g. `example.com/api/apps/v1`.
    pub path: String,
    /// Package-level comment lines (e.g. `+groupName=apps`).
    #[serde(default)]
    pub comments: Vec<String>,
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
}

impl PackageDescriptor {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            comments: Vec::new(),
            types: Vec::new(),
        }
    }

    /// Add a package-level comment line.
    pub fn with_comment(mut self, line: impl Into<String>) -> Self {
        self.comments.push(line.into());
        self
    }

    /// Add a type, taking ownership of its package path.
    pub fn with_type(mut self, mut ty: TypeDescriptor) -> Self {
        ty.package = self.path.clone();
        self.types.push(ty);
        self
    }
}

/// The ordered set of input packages for one planning run.
///
/// Package order is traversal order and drives every ordering decision the
/// planner makes that is not an explicit sort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UniverseFile")]
pub struct Universe {
    packages: Vec<PackageDescriptor>,
}

#[derive(Deserialize)]
struct UniverseFile {
    #[serde(default)]
    packages: Vec<PackageDescriptor>,
}

impl From<UniverseFile> for Universe {
    fn from(file: UniverseFile) -> Self {
        Self::new(file.packages)
    }
}

impl Universe {
    /// Build a universe, stamping each type with its package path.
    pub fn new(mut packages: Vec<PackageDescriptor>) -> Self {
        for package in &mut packages {
            for ty in &mut package.types {
                ty.package = package.path.clone();
            }
        }
        Self { packages }
    }

    pub fn packages(&self) -> &[PackageDescriptor] {
        &self.packages
    }

    /// Look up a package by import path.
    pub fn package(&self, path: &str) -> Option<&PackageDescriptor> {
        self.packages.iter().find(|p| p.path == path)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
