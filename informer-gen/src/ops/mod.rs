//! Core operations.
//!
//! This module contains the business logic for informer-gen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod plan;

use std::path::Path;

pub use check::check;
use informer_codegen::pipeline::Pipeline;
use informer_ir::Universe;
use informer_manifest::{InformerConfig, load_universe};
pub use plan::plan;

use crate::trace::TracePlugin;

/// Everything a planning run reads from disk.
#[derive(Debug)]
pub struct Inputs {
    pub config: InformerConfig,
    pub universe: Universe,
    pub header: Vec<u8>,
}

impl Inputs {
    /// Load the configuration, its header file and the universe.
    pub fn load(config: &Path, universe: &Path) -> informer_manifest::Result<Self> {
        let config = InformerConfig::from_file(config)?;
        let header = config.load_header()?;
        let universe = load_universe(universe)?;
        tracing::debug!(
            "loaded {} package(s), header of {} byte(s)",
            universe.len(),
            header.len()
        );
        Ok(Self {
            config,
            universe,
            header,
        })
    }
}

fn pipeline() -> Pipeline {
    Pipeline::new().plugin(TracePlugin)
}
