//! Irregular singular -> plural overrides.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Exceptions applied when the configuration does not list any.
pub const DEFAULT_PLURAL_EXCEPTIONS: &[&str] = &["Endpoints=Endpoints"];

/// Error raised while parsing a plural exception list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluralExceptionError {
    #[error("invalid plural exception '{entry}': expected 'Singular=Plural'")]
    Malformed { entry: String },

    #[error("duplicate plural exception for '{singular}'")]
    Duplicate { singular: String },
}

/// Case-sensitive singular -> plural override table.
///
/// Parsed once from `"Singular=Plural"` entries and shared read-only with
/// the name systems, which consult it before automatic pluralization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct PluralExceptions {
    map: IndexMap<String, String>,
}

impl PluralExceptions {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a list of `"Singular=Plural"` entries.
    ///
    /// # Errors
    ///
    /// Fails on an entry that does not split into exactly one non-empty
    /// singular and one non-empty plural, or on a repeated singular.
    pub fn parse<S: AsRef<str>>(entries: &[S]) -> Result<Self, PluralExceptionError> {
        let mut map = IndexMap::with_capacity(entries.len());
        for entry in entries {
            let entry = entry.as_ref();
            let mut parts = entry.split('=');
            let (Some(singular), Some(plural), None) = (parts.next(), parts.next(), parts.next())
            else {
                return Err(PluralExceptionError::Malformed {
                    entry: entry.to_string(),
                });
            };
            if singular.is_empty() || plural.is_empty() {
                return Err(PluralExceptionError::Malformed {
                    entry: entry.to_string(),
                });
            }
            if map.insert(singular.to_string(), plural.to_string()).is_some() {
                return Err(PluralExceptionError::Duplicate {
                    singular: singular.to_string(),
                });
            }
        }
        Ok(Self { map })
    }

    /// The default table ([`DEFAULT_PLURAL_EXCEPTIONS`]).
    pub fn defaults() -> Self {
        // The default entries are well-formed and unique.
        Self::parse(DEFAULT_PLURAL_EXCEPTIONS).unwrap_or_default()
    }

    /// Look up the override for a singular name.
    pub fn get(&self, singular: &str) -> Option<&str> {
        self.map.get(singular).map(String::as_str)
    }

    /// Iterate over `(singular, plural)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(s, p)| (s.as_str(), p.as_str()))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl TryFrom<Vec<String>> for PluralExceptions {
    type Error = PluralExceptionError;

    fn try_from(entries: Vec<String>) -> Result<Self, Self::Error> {
        Self::parse(&entries)
    }
}

impl From<PluralExceptions> for Vec<String> {
    fn from(exceptions: PluralExceptions) -> Self {
        exceptions
            .map
            .into_iter()
            .map(|(singular, plural)| format!("{}={}", singular, plural))
            .collect()
    }
}
