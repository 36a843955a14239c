//! Built-in pipeline phases.
//!
//! - [`CollectPhase`] - classifies every package into group/version tables
//! - [`VersionsPhase`] - plans one version target per classified package
//! - [`GlobalsPhase`] - plans factory, factory-interfaces and group targets

mod collect;
mod globals;
mod versions;

pub use collect::CollectPhase;
pub use globals::GlobalsPhase;
pub use versions::VersionsPhase;
