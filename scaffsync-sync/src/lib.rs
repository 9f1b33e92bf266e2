//! # scaffsync-sync
//!
//! Artifact synchronizers and the fail-fast pipeline runner.
//!
//! Call [`pipeline::run`] with a plan built by
//! `scaffsync_core::plan::canonical_plan` to synchronize a scaffold project
//! with its template. Each synchronizer is also usable on its own.

pub mod error;
pub mod gradle;
pub mod lines;
pub mod manifest;
pub mod markup;
pub mod pipeline;
pub mod replace;
pub mod tree;

pub use error::SyncError;
pub use pipeline::{run, StepOutcome, StepReport};
