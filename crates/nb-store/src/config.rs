//! Store configuration
//!
//! Loaded from `nbstore.toml` (or `.json` / `.yaml`) through
//! [`nb_fs::ConfigStore`]. Every field has a default, so an empty file or no
//! file at all yields a working configuration.
//!
//! ```toml
//! [storage]
//! dir = "notebooks"
//! default_extension = "ipynb"
//! max_depth = 4
//! write_mode = "direct"
//!
//! [fetch]
//! timeout_secs = 30
//!
//! [notebook]
//! exclusions = ["org.slf4j:slf4j-log4j12"]
//!
//! [notebook.dependencies]
//! python = ["pandas==2.2"]
//!
//! [[notebook.repositories]]
//! kind = "maven"
//! base = "https://repo1.maven.org/maven2"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use nb_fs::{ConfigStore, WriteMode};
use nb_model::{DependencyRepository, NotebookConfig};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Default config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "nbstore.toml";

/// Top-level store configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub storage: StorageConfig,
    pub fetch: FetchConfig,
    pub notebook: NotebookDefaults,
}

impl StoreConfig {
    /// Load configuration from a TOML, JSON or YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match ConfigStore::new().load(path) {
            Ok(config) => Ok(config),
            Err(e) if e.is_not_found() => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Defaults with the storage directory replaced.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage.dir = dir.into();
        self
    }
}

/// Where and how notebooks are stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Repository root directory
    pub dir: PathBuf,
    /// Extension (without the dot) that marks a file as a notebook
    pub default_extension: String,
    /// Deepest a created notebook may sit below the root, also the listing depth
    pub max_depth: usize,
    pub write_mode: WriteMode,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("notebooks"),
            default_extension: "ipynb".to_string(),
            max_depth: 4,
            write_mode: WriteMode::Direct,
        }
    }
}

/// Remote fetch settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: concat!("nbstore/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Settings copied into every blank notebook
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NotebookDefaults {
    /// Dependency coordinates keyed by language
    pub dependencies: BTreeMap<String, Vec<String>>,
    pub exclusions: Vec<String>,
    pub repositories: Vec<DependencyRepository>,
    /// Interpreter/runtime properties
    pub runtime: BTreeMap<String, String>,
    pub env: BTreeMap<String, String>,
}

impl NotebookDefaults {
    /// The configuration block for a new notebook. Empty settings are left out.
    pub fn to_notebook_config(&self) -> NotebookConfig {
        NotebookConfig {
            dependencies: (!self.dependencies.is_empty()).then(|| self.dependencies.clone()),
            exclusions: (!self.exclusions.is_empty()).then(|| self.exclusions.clone()),
            repositories: (!self.repositories.is_empty()).then(|| self.repositories.clone()),
            runtime: (!self.runtime.is_empty()).then(|| self.runtime.clone()),
            env: (!self.env.is_empty()).then(|| self.env.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn empty_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "").unwrap();

        assert_eq!(StoreConfig::load(&path).unwrap(), StoreConfig::default());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = StoreConfig::load_or_default(&temp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config.storage.max_depth, 4);
        assert_eq!(config.storage.default_extension, "ipynb");
    }

    #[test]
    fn parses_full_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"
[storage]
dir = "/srv/notebooks"
max_depth = 2
write_mode = "atomic"

[notebook]
exclusions = ["org.slf4j:slf4j-log4j12"]

[notebook.dependencies]
scala = ["org.typelevel::cats-core:2.10.0"]

[notebook.runtime]
"spark.master" = "local[*]"

[[notebook.repositories]]
kind = "maven"
base = "https://repo1.maven.org/maven2"
"#,
        )
        .unwrap();

        let config = StoreConfig::load(&path).unwrap();
        assert_eq!(config.storage.dir, PathBuf::from("/srv/notebooks"));
        assert_eq!(config.storage.max_depth, 2);
        assert_eq!(config.storage.default_extension, "ipynb");
        assert_eq!(config.storage.write_mode, WriteMode::Atomic);
        assert_eq!(config.notebook.repositories.len(), 1);
        assert_eq!(config.notebook.runtime["spark.master"], "local[*]");
    }

    #[test]
    fn notebook_config_skips_empty_settings() {
        let defaults = NotebookDefaults {
            exclusions: vec!["a:b".into()],
            ..NotebookDefaults::default()
        };
        let config = defaults.to_notebook_config();
        assert_eq!(config.exclusions, Some(vec!["a:b".to_string()]));
        assert_eq!(config.dependencies, None);
        assert_eq!(config.runtime, None);
    }
}
