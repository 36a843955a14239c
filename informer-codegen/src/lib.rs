//! Informer target planning.
//!
//! Given a [`Universe`](informer_ir::Universe) of annotated package
//! descriptors, this crate decides which informer artifacts must be
//! generated and where they go: factory interfaces, factories, per-group
//! interfaces, per-version interfaces and one informer per watchable type.
//!
//! # Module Organization
//!
//! - [`tags`] - `+genclient` tag interpretation and package group overrides
//! - [`object_meta`] - ObjectMeta lookup and internal/external classification
//! - [`classify`] - group/version derivation and aggregation tables
//! - [`naming`] - name systems (public, private, plural, ...)
//! - [`order`] - deterministic type ordering
//! - [`target`] - target and generator records, output layout, plan summary
//! - [`pipeline`] - the planning pipeline (collect → versions → globals)
//!
//! # Example
//!
//! ```ignore
//! let config = InformerConfig::from_file("informer-gen.toml")?;
//! let universe = load_universe("universe.toml")?;
//! let header = config.load_header()?;
//!
//! let targets = informer_codegen::plan(universe, config, header)?;
//! println!("{}", informer_codegen::target::render_summary(&targets));
//! ```

pub mod classify;
mod error;
pub mod naming;
pub mod object_meta;
pub mod order;
pub mod pipeline;
pub mod tags;
pub mod target;

use std::sync::Arc;

pub use error::PlanError;
use informer_ir::Universe;
use informer_manifest::InformerConfig;

/// Plan all targets for a universe with the built-in pipeline.
///
/// # Errors
///
/// Returns an error on malformed tags or structural problems in the input
/// (see [`PlanError`]). There is no partial result.
pub fn plan(
    universe: Universe,
    config: InformerConfig,
    header: impl Into<Arc<[u8]>>,
) -> eyre::Result<Vec<target::Target>> {
    let ctx = pipeline::Pipeline::new().run(universe, config, header)?;
    Ok(ctx.targets)
}
