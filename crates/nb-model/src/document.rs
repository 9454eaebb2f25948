//! In-memory notebook document
//!
//! A [`Notebook`] is an ordered list of cells plus an optional configuration
//! block. The configuration values are carried through untouched; nothing in
//! this workspace interprets them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Language tag of prose cells.
pub const TEXT_LANGUAGE: &str = "text";

/// A notebook document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    /// Root-relative path the notebook was loaded from or will be saved to
    pub path: String,
    pub cells: Vec<NotebookCell>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<NotebookConfig>,
}

impl Notebook {
    pub fn new(path: impl Into<String>, cells: Vec<NotebookCell>) -> Self {
        Self {
            path: path.into(),
            cells,
            config: None,
        }
    }

    pub fn with_config(mut self, config: NotebookConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// The same document under another path.
    pub fn relocated(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }
}

/// A single notebook cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookCell {
    pub id: u32,
    pub language: String,
    pub content: String,
    #[serde(default)]
    pub metadata: CellMetadata,
    /// Rendered results, kept opaque
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<serde_json::Value>,
}

impl NotebookCell {
    pub fn new(id: u32, language: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            language: language.into(),
            content: content.into(),
            metadata: CellMetadata::default(),
            outputs: Vec::new(),
        }
    }

    /// A prose (markdown) cell.
    pub fn text(id: u32, content: impl Into<String>) -> Self {
        Self::new(id, TEXT_LANGUAGE, content)
    }

    pub fn is_text(&self) -> bool {
        self.language == TEXT_LANGUAGE
    }
}

/// Per-cell display flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellMetadata {
    #[serde(default, skip_serializing_if = "is_false")]
    pub disable_run: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub hide_source: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub hide_output: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Notebook-level configuration block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotebookConfig {
    /// Dependency coordinates keyed by language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<BTreeMap<String, Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repositories: Option<Vec<DependencyRepository>>,
    /// Interpreter/runtime settings, e.g. cluster properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<BTreeMap<String, String>>,
}

/// A place dependencies are resolved from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DependencyRepository {
    Ivy {
        base: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        artifact_pattern: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata_pattern: Option<String>,
    },
    Maven {
        base: String,
    },
    Pip {
        url: String,
    },
}
