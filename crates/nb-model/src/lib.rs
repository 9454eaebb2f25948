//! Notebook document model and codecs
//!
//! - [`document`]: the in-memory [`Notebook`]
//! - [`ipynb`]: the canonical Jupyter format ([`IpynbFormat`])
//! - [`zeppelin`]: import of legacy Zeppelin notes ([`ZeppelinConverter`])

pub mod document;
pub mod error;
pub mod ipynb;
pub mod zeppelin;

pub use document::{
    CellMetadata, DependencyRepository, Notebook, NotebookCell, NotebookConfig, TEXT_LANGUAGE,
};
pub use error::{Error, Result};
pub use ipynb::{IpynbFormat, NotebookFormat};
pub use zeppelin::{LegacyConverter, ZeppelinConverter};
