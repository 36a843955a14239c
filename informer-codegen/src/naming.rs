//! Name systems.
//!
//! A name system turns a type into the string used in one slot of the
//! generated code. The planner only depends on the [`Namer`] trait; the
//! concrete strategies are enumerated by [`NameStrategy`].

use std::sync::Arc;

use informer_core::{PluralExceptions, to_initial_lower, to_initial_upper};
use informer_ir::TypeDescriptor;
use serde::Serialize;

/// Resolves the name a type takes in one naming slot.
pub trait Namer {
    fn name(&self, ty: &TypeDescriptor) -> String;
}

/// The available naming strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NameStrategy {
    /// Exported form: `Deployment`.
    Public,
    /// Unexported form: `deployment`, `replicaSet`.
    Private,
    /// Package-qualified form: `example.com/apps/v1.Deployment`.
    Raw,
    /// Exported plural: `Deployments`.
    PublicPlural,
    /// Lower-case plural, used for resource names: `deployments`.
    AllLowercasePlural,
    /// Lower-case singular, used for file names: `replicaset`.
    LowercaseSingular,
}

impl NameStrategy {
    pub const ALL: [NameStrategy; 6] = [
        NameStrategy::Public,
        NameStrategy::Private,
        NameStrategy::Raw,
        NameStrategy::PublicPlural,
        NameStrategy::AllLowercasePlural,
        NameStrategy::LowercaseSingular,
    ];

    /// The strategy used when no other is requested.
    pub const DEFAULT: NameStrategy = NameStrategy::Public;

    /// The name-system key, e.g. `publicPlural`.
    pub fn as_str(&self) -> &'static str {
        match self {
            NameStrategy::Public => "public",
            NameStrategy::Private => "private",
            NameStrategy::Raw => "raw",
            NameStrategy::PublicPlural => "publicPlural",
            NameStrategy::AllLowercasePlural => "allLowercasePlural",
            NameStrategy::LowercaseSingular => "lowercaseSingular",
        }
    }

    /// Look up a strategy by its name-system key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == key)
    }
}

/// A strategy bound to the plural exceptions it consults.
#[derive(Debug, Clone)]
pub struct NameSystem {
    strategy: NameStrategy,
    exceptions: Arc<PluralExceptions>,
}

impl NameSystem {
    /// A strategy that needs no plural exceptions.
    pub fn new(strategy: NameStrategy) -> Self {
        Self {
            strategy,
            exceptions: Arc::default(),
        }
    }

    pub fn strategy(&self) -> NameStrategy {
        self.strategy
    }
}

impl Namer for NameSystem {
    fn name(&self, ty: &TypeDescriptor) -> String {
        match self.strategy {
            NameStrategy::Public => to_initial_upper(&ty.name),
            NameStrategy::Private => to_initial_lower(&ty.name),
            NameStrategy::Raw => ty.qualified_name(),
            NameStrategy::PublicPlural => {
                to_initial_upper(&pluralize(&ty.name, &self.exceptions))
            }
            NameStrategy::AllLowercasePlural => {
                pluralize(&ty.name, &self.exceptions).to_lowercase()
            }
            NameStrategy::LowercaseSingular => ty.name.to_lowercase(),
        }
    }
}

/// The full set of name systems for one run, sharing one exception table.
#[derive(Debug, Clone, Default)]
pub struct NameSystems {
    exceptions: Arc<PluralExceptions>,
}

impl NameSystems {
    pub fn new(exceptions: Arc<PluralExceptions>) -> Self {
        Self { exceptions }
    }

    pub fn get(&self, strategy: NameStrategy) -> NameSystem {
        NameSystem {
            strategy,
            exceptions: Arc::clone(&self.exceptions),
        }
    }

    pub fn by_key(&self, key: &str) -> Option<NameSystem> {
        NameStrategy::from_key(key).map(|s| self.get(s))
    }

    pub fn default_system(&self) -> NameSystem {
        self.get(NameStrategy::DEFAULT)
    }

    pub fn exceptions(&self) -> &PluralExceptions {
        &self.exceptions
    }

    /// The exception table as handed to generators.
    pub fn shared_exceptions(&self) -> Arc<PluralExceptions> {
        Arc::clone(&self.exceptions)
    }
}

/// Pluralize a type name, consulting exceptions first.
pub fn pluralize(singular: &str, exceptions: &PluralExceptions) -> String {
    if let Some(plural) = exceptions.get(singular) {
        return plural.to_string();
    }

    let mut tail = singular.chars().rev();
    let (Some(last), Some(before_last)) = (tail.next(), tail.next()) else {
        return singular.to_string();
    };
    let stem = &singular[..singular.len() - last.len_utf8()];

    match last {
        's' | 'x' | 'z' => format!("{}es", singular),
        'y' if is_consonant(before_last) => format!("{}ies", stem),
        'h' if before_last == 'c' || before_last == 's' => format!("{}es", singular),
        'e' if before_last == 'f' => {
            let f_stem = &stem[..stem.len() - before_last.len_utf8()];
            format!("{}ves", f_stem)
        }
        'f' => format!("{}ves", stem),
        _ => format!("{}s", singular),
    }
}

fn is_consonant(c: char) -> bool {
    "bcdfghjklmnpqrstvwxyz".contains(c)
}
