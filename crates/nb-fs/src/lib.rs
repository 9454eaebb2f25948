//! Filesystem layer for the notebook store
//!
//! Provides root-relative path resolution, text I/O, bounded directory
//! walking and format-agnostic config loading.

pub mod config;
pub mod error;
pub mod io;
pub mod path;
pub mod walk;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use io::WriteMode;
pub use path::{NormalizedPath, RepositoryRoot};
pub use walk::find_files_with_extension;
