//! Command implementations.
//!
//! # Modules
//! - `save` - Stage, check and commit the data directory.
//! - `options` - Command option structs.

/// Save workflow.
pub mod save;
/// Shared command option structs.
pub mod options;

pub use options::SaveOptions;
pub use save::{SaveOutcome, SaveRunner};
