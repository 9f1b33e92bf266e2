//! Scaffsync core library — sync plan descriptors, pipeline configuration,
//! errors.
//!
//! Public API surface:
//! - [`plan`] — [`SyncStep`] descriptors and the canonical plan builder
//! - [`config`] — [`SyncConfig`] pipeline constants + JSON loading
//! - [`error`] — [`ConfigError`]

pub mod config;
pub mod error;
pub mod plan;

pub use config::SyncConfig;
pub use error::ConfigError;
pub use plan::SyncStep;
