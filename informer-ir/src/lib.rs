//! Intermediate representation types for the informer target planner.
//!
//! This crate holds the descriptor model handed over by a front-end and the
//! group/version identities the planner derives from it.
//!
//! # Architecture
//!
//! ```text
//! universe file → informer-manifest (loading) → informer-ir (descriptors) → informer-codegen (targets)
//! ```
//!
//! Descriptors are immutable once loaded; the planner only reads them.

mod descriptor;
mod group_version;

pub use descriptor::{Member, PackageDescriptor, TypeDescriptor, Universe};
pub use group_version::{Group, GroupVersion, GroupVersions, PackageVersion, Version};
