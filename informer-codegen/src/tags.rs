//! Comment tag interpretation.
//!
//! Type-level `+genclient` tags decide whether a type gets a client and
//! which verbs it supports; package-level `+groupName` / `+groupGoName`
//! tags override the group identity derived from the package path.

use std::collections::BTreeSet;

use informer_core::{CommentTags, extract_comment_tags};
use informer_ir::{PackageDescriptor, TypeDescriptor};
use serde::Serialize;
use thiserror::Error;

use crate::PlanError;

/// Verbs a generated client can support.
pub const SUPPORTED_VERBS: &[&str] = &[
    "create",
    "update",
    "updateStatus",
    "delete",
    "deleteCollection",
    "get",
    "list",
    "watch",
    "patch",
    "apply",
    "applyStatus",
];

/// Verbs kept by `+genclient:readonly`.
pub const READONLY_VERBS: &[&str] = &["get", "list", "watch"];

const TAG_MARKER: &str = "+";
const GENCLIENT: &str = "genclient";
const NON_NAMESPACED: &str = "genclient:nonNamespaced";
const NO_VERBS: &str = "genclient:noVerbs";
const NO_STATUS: &str = "genclient:noStatus";
const READONLY: &str = "genclient:readonly";
const ONLY_VERBS: &str = "genclient:onlyVerbs";
const SKIP_VERBS: &str = "genclient:skipVerbs";
const METHOD: &str = "genclient:method";

const SUPPORTED_TAGS: &[&str] = &[
    GENCLIENT,
    NON_NAMESPACED,
    NO_VERBS,
    NO_STATUS,
    READONLY,
    ONLY_VERBS,
    SKIP_VERBS,
    METHOD,
];

const GROUP_NAME: &str = "groupName";
const GROUP_GO_NAME: &str = "groupGoName";

/// Malformed tag syntax.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error(
        "+genclient={value} is invalid, use +genclient to generate a client or omit it to disable generation"
    )]
    LegacyGenclient { value: String },

    #[error("+{tag}={value} is invalid, use +genclient:{tag} instead")]
    LegacyFlag { tag: &'static str, value: String },

    #[error("verb {verb:?} used both in genclient:skipVerbs and genclient:onlyVerbs")]
    ConflictingVerb { verb: String },

    #[error("unknown verb {verb:?} in +{tag}")]
    UnknownVerb { tag: &'static str, verb: String },

    #[error("unknown tag detected: +{tag}")]
    UnknownTag { tag: String },

    #[error("invalid +genclient:method={value}: {reason}")]
    InvalidMethod { value: String, reason: String },

    #[error("+{tag} requires a value")]
    EmptyValue { tag: &'static str },
}

/// A custom client method declared with `+genclient:method`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodExtension {
    pub name: String,
    pub verb: String,
    pub subresource: Option<String>,
    pub input: Option<String>,
    pub result: Option<String>,
}

impl MethodExtension {
    /// Parse `Name,verb=v[,subresource=s][,input=T][,result=T]`.
    fn parse(value: &str) -> Result<Self, TagError> {
        let invalid = |reason: &str| TagError::InvalidMethod {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = value.split(',');
        let name = parts.next().unwrap_or_default().trim();
        if name.is_empty() || name.contains('=') {
            return Err(invalid("the method name must come first"));
        }

        let mut verb = None;
        let mut subresource = None;
        let mut input = None;
        let mut result = None;
        for part in parts {
            let Some((key, val)) = part.split_once('=') else {
                return Err(invalid(&format!("expected key=value, got {:?}", part)));
            };
            let slot = match key.trim() {
                "verb" => &mut verb,
                "subresource" => &mut subresource,
                "input" => &mut input,
                "result" => &mut result,
                other => return Err(invalid(&format!("unknown key {:?}", other))),
            };
            *slot = Some(val.trim().to_string());
        }

        let verb = verb.ok_or_else(|| invalid("missing verb"))?;
        if !SUPPORTED_VERBS.contains(&verb.as_str()) {
            return Err(invalid(&format!("unsupported verb {:?}", verb)));
        }

        Ok(Self {
            name: name.to_string(),
            verb,
            subresource,
            input,
            result,
        })
    }
}

/// Structured view of a type's `+genclient` tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientGenTags {
    /// `+genclient` is present.
    pub generate: bool,
    pub non_namespaced: bool,
    pub no_status: bool,
    /// `+genclient:noVerbs` disables every verb.
    pub no_verbs: bool,
    /// Verbs left after `readonly`, `onlyVerbs` and `skipVerbs`.
    pub verbs: BTreeSet<String>,
    pub methods: Vec<MethodExtension>,
}

impl ClientGenTags {
    /// Interpret the given comment lines.
    ///
    /// # Errors
    ///
    /// Any malformed `genclient` tag is an error; callers treat it as fatal.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Self, TagError> {
        let values = extract_comment_tags(TAG_MARKER, lines);
        let mut tags = Self::default();

        if let Some(value) = values.get(GENCLIENT) {
            tags.generate = true;
            if let Some(v) = value.first().filter(|v| !v.is_empty()) {
                return Err(TagError::LegacyGenclient { value: v.clone() });
            }
        }

        tags.non_namespaced = values.contains_key(NON_NAMESPACED);
        check_legacy_flag(&values, "nonNamespaced")?;
        tags.no_verbs = values.contains_key(NO_VERBS);
        tags.no_status = values.contains_key(NO_STATUS);
        check_legacy_flag(&values, "readonly")?;

        tags.verbs = resolve_verbs(&values)?;

        if let Some(methods) = values.get(METHOD) {
            tags.methods = methods
                .iter()
                .map(|m| MethodExtension::parse(m))
                .collect::<Result<_, _>>()?;
        }

        for key in values.keys() {
            if key.starts_with(GENCLIENT) && !SUPPORTED_TAGS.contains(&key.as_str()) {
                return Err(TagError::UnknownTag { tag: key.clone() });
            }
        }

        Ok(tags)
    }

    /// Interpret the merged comment block of a type.
    pub fn for_type(ty: &TypeDescriptor) -> Result<Self, PlanError> {
        Self::parse(&ty.comment_block()).map_err(|source| PlanError::InvalidTags {
            name: ty.qualified_name(),
            source,
        })
    }

    /// Whether the client supports `verb`. Always false under `noVerbs`.
    pub fn has_verb(&self, verb: &str) -> bool {
        !self.no_verbs && self.verbs.contains(verb)
    }

    /// Whether the type gets an informer: a generated client that can both
    /// list and watch.
    pub fn is_informable(&self) -> bool {
        self.generate && self.has_verb("list") && self.has_verb("watch")
    }
}

/// Whether a type gets an informer.
///
/// The classifier and every target filter go through this one test.
pub fn is_informable(ty: &TypeDescriptor) -> Result<bool, PlanError> {
    Ok(ClientGenTags::for_type(ty)?.is_informable())
}

/// A type together with its parsed client tags.
#[derive(Debug, Clone)]
pub struct TaggedType<'a> {
    pub ty: &'a TypeDescriptor,
    pub tags: ClientGenTags,
}

/// Parse the client tags of every type of `package`, in declaration order.
///
/// # Errors
///
/// Fails on the first type with malformed tags.
pub fn tag_types(package: &PackageDescriptor) -> Result<Vec<TaggedType<'_>>, PlanError> {
    package
        .types
        .iter()
        .map(|ty| {
            Ok(TaggedType {
                ty,
                tags: ClientGenTags::for_type(ty)?,
            })
        })
        .collect()
}

fn check_legacy_flag(values: &CommentTags, tag: &'static str) -> Result<(), TagError> {
    match values.get(tag).and_then(|v| v.first()) {
        Some(value) if !value.is_empty() => Err(TagError::LegacyFlag {
            tag,
            value: value.clone(),
        }),
        _ => Ok(()),
    }
}

fn split_verbs<'a>(
    values: &'a CommentTags,
    tag: &'static str,
) -> Result<Option<Vec<&'a str>>, TagError> {
    let Some(value) = values.get(tag).and_then(|v| v.first()) else {
        return Ok(None);
    };
    let verbs: Vec<&str> = value
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect();
    if let Some(unknown) = verbs.iter().find(|v| !SUPPORTED_VERBS.contains(*v)) {
        return Err(TagError::UnknownVerb {
            tag,
            verb: unknown.to_string(),
        });
    }
    Ok(Some(verbs))
}

fn resolve_verbs(values: &CommentTags) -> Result<BTreeSet<String>, TagError> {
    let skip = split_verbs(values, SKIP_VERBS)?.unwrap_or_default();
    let mut only = split_verbs(values, ONLY_VERBS)?;
    if values.contains_key(READONLY) {
        only.get_or_insert_with(Vec::new).extend(READONLY_VERBS);
    }

    if let Some(only) = &only {
        if let Some(verb) = skip.iter().find(|v| only.contains(*v)) {
            return Err(TagError::ConflictingVerb {
                verb: verb.to_string(),
            });
        }
    }

    Ok(SUPPORTED_VERBS
        .iter()
        .filter(|v| only.as_ref().is_none_or(|only| only.contains(*v)))
        .filter(|v| !skip.contains(*v))
        .map(|v| v.to_string())
        .collect())
}

/// Package-level group overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupTags {
    /// First `+groupName` value.
    pub group_name: Option<String>,
    /// First `+groupGoName` value.
    pub group_go_name: Option<String>,
}

impl GroupTags {
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Self, TagError> {
        let values = extract_comment_tags(TAG_MARKER, lines);
        Ok(Self {
            group_name: first_value(&values, GROUP_NAME)?,
            group_go_name: first_value(&values, GROUP_GO_NAME)?,
        })
    }

    pub fn for_package(package: &PackageDescriptor) -> Result<Self, PlanError> {
        Self::parse(&package.comments).map_err(|source| PlanError::InvalidTags {
            name: package.path.clone(),
            source,
        })
    }
}

fn first_value(values: &CommentTags, tag: &'static str) -> Result<Option<String>, TagError> {
    match values.get(tag).and_then(|v| v.first()) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Err(TagError::EmptyValue { tag }),
        Some(value) => Ok(Some(value.trim().to_string())),
    }
}
