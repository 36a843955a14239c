//! Planning pipeline.
//!
//! This module provides a [`Pipeline`] orchestrator that runs the planning
//! phases over a universe of package descriptors:
//!
//! - Explicit phase boundaries (collect → versions → globals)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//! - Shared state via [`PlanContext`]
//!
//! # Example
//!
//! ```ignore
//! use informer_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(universe, config, header)?;
//!
//! for diag in &ctx.diagnostics {
//!     eprintln!("{}", diag);
//! }
//! emit(&ctx.targets);
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::PlanContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
