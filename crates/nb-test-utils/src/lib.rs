//! Shared test utilities for the notebook store workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`repo`]: [`TestNotebookDir`] builder for a scratch notebook root
//! - [`fixtures`]: sample notebook documents in the canonical and legacy formats

pub mod fixtures;
pub mod repo;

pub use repo::TestNotebookDir;
