//! Directory-backed notebook store
//!
//! [`FileSystemNotebookRepository`] keeps notebooks as files below one root
//! directory and implements the [`NotebookRepository`] contract: existence
//! checks, listing, load/save, and creation from a URI, from raw content
//! (converting legacy Zeppelin exports) or as a blank notebook.
//!
//! # Example
//!
//! ```rust,no_run
//! use nb_store::{FileSystemNotebookRepository, Ingestion, NotebookRepository, StoreConfig};
//!
//! # async fn run() -> nb_store::Result<()> {
//! let config = StoreConfig::default().with_dir("/srv/notebooks");
//! let repo = FileSystemNotebookRepository::from_config(&config)?;
//! repo.init_storage().await?;
//!
//! let path = repo.create_notebook("team/weekly-report", Ingestion::Blank).await?;
//! assert_eq!(path, "team/weekly-report.ipynb");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod factory;
pub mod fetch;
pub mod filesystem;
pub mod ingest;
pub mod repository;

pub use config::{FetchConfig, NotebookDefaults, StorageConfig, StoreConfig};
pub use error::{Error, ErrorKind, Result};
pub use factory::empty_notebook;
pub use fetch::{Fetcher, HttpFetcher};
pub use filesystem::FileSystemNotebookRepository;
pub use ingest::Ingestion;
pub use repository::NotebookRepository;
