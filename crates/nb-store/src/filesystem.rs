//! Directory-backed [`NotebookRepository`]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use nb_fs::{RepositoryRoot, WriteMode, io};
use nb_model::{IpynbFormat, LegacyConverter, Notebook, NotebookFormat, ZeppelinConverter};
use tracing::{debug, info};

use crate::config::{NotebookDefaults, StoreConfig};
use crate::factory::empty_notebook;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::ingest::{self, Ingestion};
use crate::repository::NotebookRepository;
use crate::{Error, Result};

/// Notebooks stored as files below a single root directory.
pub struct FileSystemNotebookRepository {
    root: RepositoryRoot,
    extension: String,
    max_depth: usize,
    write_mode: WriteMode,
    defaults: NotebookDefaults,
    format: Arc<dyn NotebookFormat>,
    converter: Arc<dyn LegacyConverter>,
    fetcher: Arc<dyn Fetcher>,
}

impl FileSystemNotebookRepository {
    /// Repository with the Jupyter format, Zeppelin import and the given fetcher.
    pub fn new(config: &StoreConfig, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            root: RepositoryRoot::new(&config.storage.dir),
            extension: config.storage.default_extension.clone(),
            max_depth: config.storage.max_depth,
            write_mode: config.storage.write_mode,
            defaults: config.notebook.clone(),
            format: Arc::new(IpynbFormat),
            converter: Arc::new(ZeppelinConverter),
            fetcher,
        }
    }

    /// Repository fetching remote notebooks over HTTP.
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config.fetch)?;
        Ok(Self::new(config, Arc::new(fetcher)))
    }

    pub fn root(&self) -> &RepositoryRoot {
        &self.root
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Normalize and validate a destination path without touching the disk.
    ///
    /// Returns the extension-normalized path and its absolute location.
    fn prepare_target(&self, requested: &str) -> Result<(String, PathBuf)> {
        let stripped = ingest::strip_extension(requested, &self.extension);
        if stripped.is_empty() || stripped.ends_with('/') {
            return Err(Error::EmptyName {
                path: requested.to_string(),
            });
        }
        let ext_path = ingest::with_extension(requested, &self.extension);

        let depth = self.root.depth_of(requested);
        if depth > self.max_depth {
            return Err(Error::PathTooDeep {
                path: requested.to_string(),
                depth,
                max_depth: self.max_depth,
            });
        }

        let location = self.root.resolve(&ext_path)?;
        Ok((ext_path, location))
    }

    /// Fails with `AlreadyExists` if the target exists, or with the stat
    /// error if its presence cannot be determined.
    async fn ensure_absent(&self, ext_path: &str, location: &Path) -> Result<()> {
        if exists(location).await? {
            return Err(Error::AlreadyExists {
                path: ext_path.to_string(),
            });
        }
        Ok(())
    }

    async fn write(&self, location: PathBuf, text: String) -> Result<()> {
        let mode = self.write_mode;
        blocking(move || Ok(io::write_text(&location, &text, mode)?)).await
    }

    async fn read(&self, path: &str, location: PathBuf) -> Result<String> {
        let path = path.to_string();
        blocking(move || io::read_text(&location).map_err(|e| Error::fs(&path, e))).await
    }

    fn encode(&self, path: &str, notebook: &Notebook) -> Result<String> {
        self.format.encode(notebook).map_err(|source| Error::Encode {
            path: path.to_string(),
            source,
        })
    }
}

#[async_trait]
impl NotebookRepository for FileSystemNotebookRepository {
    async fn init_storage(&self) -> Result<()> {
        let root = self.root.as_path().to_path_buf();
        debug!(root = %root.display(), "initializing notebook storage");
        blocking(move || Ok(io::create_dir_all(&root)?)).await
    }

    async fn notebook_exists(&self, path: &str) -> bool {
        match self.root.resolve(path) {
            Ok(location) => exists(&location).await.unwrap_or(false),
            Err(_) => false,
        }
    }

    fn notebook_location(&self, path: &str) -> PathBuf {
        self.root.path_of(path)
    }

    fn validate_notebook_path(&self, path: &str) -> bool {
        nb_fs::NormalizedPath::new(path).has_extension(&self.extension)
    }

    async fn load_notebook(&self, path: &str) -> Result<Notebook> {
        let location = self.root.resolve(path)?;
        let text = self.read(path, location).await?;
        self.format
            .decode(path, &text)
            .map_err(|source| Error::Decode {
                path: path.to_string(),
                source,
            })
    }

    async fn save_notebook(&self, path: &str, notebook: &Notebook) -> Result<()> {
        let location = self.root.resolve(path)?;
        let text = self.encode(path, notebook)?;
        self.write(location, text).await?;
        debug!(path, cells = notebook.cells.len(), "saved notebook");
        Ok(())
    }

    async fn list_notebooks(&self) -> Result<Vec<String>> {
        let root = self.root.as_path().to_path_buf();
        let max_depth = self.max_depth;
        let extension = self.extension.clone();

        let found = blocking(move || {
            Ok(nb_fs::find_files_with_extension(&root, max_depth, &extension)?)
        })
        .await?;
        Ok(found.into_iter().map(|p| p.into_string()).collect())
    }

    async fn create_notebook(&self, path: &str, ingestion: Ingestion) -> Result<String> {
        let (ext_path, location) = self.prepare_target(path)?;
        self.ensure_absent(&ext_path, &location).await?;

        match ingestion {
            Ingestion::Remote(uri) => {
                let text = self.fetcher.fetch(&uri).await?;
                self.write(location, text).await?;
            }
            Ingestion::Content(content) if ingest::is_legacy(path) => {
                let notebook = self
                    .converter
                    .convert(&ext_path, &content)
                    .map_err(|source| Error::Conversion {
                        path: path.to_string(),
                        source,
                    })?;
                let text = self.encode(&ext_path, &notebook)?;
                self.write(location, text).await?;
            }
            Ingestion::Content(content) => {
                self.write(location, content).await?;
            }
            Ingestion::Blank => {
                let stripped = ingest::strip_extension(path, &self.extension);
                let title = ingest::title_from_path(stripped);
                let notebook = empty_notebook(&ext_path, &title, &self.defaults);
                self.save_notebook(&ext_path, &notebook).await?;
            }
        }

        info!(path = %ext_path, "created notebook");
        Ok(ext_path)
    }

    async fn rename_notebook(&self, from: &str, to: &str) -> Result<String> {
        let source = self.root.resolve(from)?;
        if !exists(&source).await? {
            return Err(Error::NotFound {
                path: from.to_string(),
            });
        }
        let (ext_path, location) = self.prepare_target(to)?;
        self.ensure_absent(&ext_path, &location).await?;

        blocking(move || Ok(io::rename(&source, &location)?)).await?;
        info!(from, to = %ext_path, "renamed notebook");
        Ok(ext_path)
    }

    async fn copy_notebook(&self, from: &str, to: &str) -> Result<String> {
        let (ext_path, location) = self.prepare_target(to)?;
        self.ensure_absent(&ext_path, &location).await?;

        let notebook = self.load_notebook(from).await?.relocated(ext_path.as_str());
        self.save_notebook(&ext_path, &notebook).await?;
        info!(from, to = %ext_path, "copied notebook");
        Ok(ext_path)
    }

    async fn delete_notebook(&self, path: &str) -> Result<()> {
        let location = self.root.resolve(path)?;
        let owned = path.to_string();
        blocking(move || io::remove_file(&location).map_err(|e| Error::fs(&owned, e))).await?;
        info!(path, "deleted notebook");
        Ok(())
    }
}

async fn exists(location: &Path) -> Result<bool> {
    tokio::fs::try_exists(location)
        .await
        .map_err(|e| nb_fs::Error::io(location, e).into())
}

/// Run filesystem work on tokio's blocking pool.
async fn blocking<T, F>(work: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| Error::Task {
            message: e.to_string(),
        })?
}
