//! Fatal planning errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::tags::TagError;

/// A condition that aborts planning.
///
/// Planning is all-or-nothing: every variant stops the run at the point of
/// detection.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid comment tags on {name}")]
    InvalidTags {
        /// Qualified type or package name carrying the tags.
        name: String,
        #[source]
        source: TagError,
    },

    #[error("unable to find ObjectMeta for any types in package {package}")]
    MissingObjectMeta { package: String },

    #[error("error constructing internal group version for package {package:?}")]
    InternalGroup { package: String },

    #[error(
        "error constructing external group version for package {package:?}: expected <group>/<version> path segments"
    )]
    ExternalGroupVersion { package: String },

    #[error("package {package} has the same group version as package {previous}")]
    DuplicateGroupVersion { package: String, previous: String },

    #[error("internal package {package} needs an internal clientset package, but none is configured")]
    MissingInternalClientset { package: String },

    #[error(
        "single-directory output would place internal and external informers in the same directory {}",
        .dir.display()
    )]
    SingleDirectoryCollision { dir: PathBuf },
}
