// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Configuration and input loading for the informer target planner.
//!
//! - [`InformerConfig`] - the statically-typed `informer-gen.toml` configuration
//! - [`load_universe`] - descriptor (universe) files in TOML or JSON
//! - [`Error`] - miette diagnostics pointing into the offending file

mod config;
mod error;
mod universe;

pub use config::{InformerConfig, NamingConfig, OutputConfig, PackagesConfig};
pub use error::{Error, Result, SourceContext};
pub use universe::{UniverseFormat, load_universe, parse_universe};
