//! Core utilities and types for the informer target planner.
//!
//! This crate provides the string-level building blocks used across the
//! planner: case helpers, comment tag extraction, package path joining and
//! the plural exception table.

mod comment_tags;
mod plural;
mod utils;

// Comment tags
pub use comment_tags::{CommentTags, extract_comment_tags};
// Plural exceptions
pub use plural::{DEFAULT_PLURAL_EXCEPTIONS, PluralExceptionError, PluralExceptions};
// String utilities
pub use utils::{
    first_dot_segment, join_package_path, last_path_segment, to_initial_lower,
    to_initial_upper,
};
