//! ObjectMeta lookup.
//!
//! The `ObjectMeta` member of a package's client types tells the planner
//! whether the package is the internal representation or an external,
//! wire-serialized version.

use crate::{PlanError, tags::TaggedType};

/// Member name of the standard object metadata field.
pub const OBJECT_META_MEMBER: &str = "ObjectMeta";

/// Tag substring marking wire serialization.
const WIRE_MARKER: &str = "json";

/// The ObjectMeta found for a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMetaLocation {
    /// Name of the type declaring the member.
    pub owner: String,
    /// Type of the ObjectMeta member.
    pub member_type: String,
    /// True when the member carries no wire-serialization tag.
    pub internal: bool,
}

/// Locate the ObjectMeta member used by a package.
///
/// Walks the package's tagged types in order and, for the first type with
/// `+genclient` that has an `ObjectMeta` member, reports that member.
/// Returns `Ok(None)` when no type in the package requests a client.
///
/// # Errors
///
/// Fails when some type requests a client but none of the client types has
/// an `ObjectMeta` member.
pub fn locate_object_meta(
    package: &str,
    types: &[TaggedType<'_>],
) -> Result<Option<ObjectMetaLocation>, PlanError> {
    let mut generating = false;
    for TaggedType { ty, tags } in types {
        if !tags.generate {
            continue;
        }
        generating = true;
        if let Some(member) = ty.member(OBJECT_META_MEMBER) {
            return Ok(Some(ObjectMetaLocation {
                owner: ty.name.clone(),
                member_type: member.type_ref.clone(),
                internal: !member.tags.contains(WIRE_MARKER),
            }));
        }
    }

    if generating {
        Err(PlanError::MissingObjectMeta {
            package: package.to_string(),
        })
    } else {
        Ok(None)
    }
}
