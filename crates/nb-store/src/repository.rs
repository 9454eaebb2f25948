//! The notebook repository contract

use std::path::PathBuf;

use async_trait::async_trait;
use nb_model::Notebook;

use crate::Result;
use crate::ingest::Ingestion;

/// Storage for notebooks addressed by root-relative paths.
///
/// Implementations hold no document state between calls: loaded notebooks
/// belong to the caller. No operation is serialized against another, so two
/// concurrent writers to one path race and the last write wins.
#[async_trait]
pub trait NotebookRepository: Send + Sync {
    /// Create the storage root if it does not exist yet.
    async fn init_storage(&self) -> Result<()>;

    /// Whether anything exists at `path`. No content or extension check.
    async fn notebook_exists(&self, path: &str) -> bool;

    /// Absolute location `path` maps to. Pure path arithmetic.
    fn notebook_location(&self, path: &str) -> PathBuf;

    /// Whether `path` names a notebook under the extension policy.
    fn validate_notebook_path(&self, path: &str) -> bool;

    async fn load_notebook(&self, path: &str) -> Result<Notebook>;

    async fn save_notebook(&self, path: &str, notebook: &Notebook) -> Result<()>;

    /// Every notebook under the root, as root-relative paths in traversal order.
    async fn list_notebooks(&self) -> Result<Vec<String>>;

    /// Create a notebook at `path` from `ingestion`.
    ///
    /// Returns the stored path, which always carries the notebook extension
    /// exactly once.
    async fn create_notebook(&self, path: &str, ingestion: Ingestion) -> Result<String>;

    /// Move a notebook; returns the normalized destination path.
    async fn rename_notebook(&self, from: &str, to: &str) -> Result<String>;

    /// Duplicate a notebook; returns the normalized destination path.
    async fn copy_notebook(&self, from: &str, to: &str) -> Result<String>;

    async fn delete_notebook(&self, path: &str) -> Result<()>;
}
