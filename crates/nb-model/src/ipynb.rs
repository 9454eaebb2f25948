//! Canonical on-disk format: Jupyter `nbformat` 4 JSON
//!
//! Encoding is pretty-printed and omits absent optional fields. The cell
//! language is kept in `metadata.language`, the cell id in `metadata.cell_id`
//! and the notebook configuration in the top-level `metadata.config`.

use serde::{Deserialize, Serialize};

use crate::document::{CellMetadata, Notebook, NotebookCell, NotebookConfig, TEXT_LANGUAGE};
use crate::{Error, Result};

const FORMAT: &str = "ipynb";
const NBFORMAT: u32 = 4;
const FALLBACK_LANGUAGE: &str = "python";

/// A notebook file codec.
///
/// The store persists every document through one of these, so new formats
/// only need to implement this trait.
pub trait NotebookFormat: Send + Sync {
    fn encode(&self, notebook: &Notebook) -> Result<String>;

    fn decode(&self, path: &str, text: &str) -> Result<Notebook>;
}

/// The Jupyter notebook format.
#[derive(Debug, Clone, Copy, Default)]
pub struct IpynbFormat;

impl NotebookFormat for IpynbFormat {
    fn encode(&self, notebook: &Notebook) -> Result<String> {
        serde_json::to_string_pretty(&JupyterNotebook::from(notebook)).map_err(Error::Encode)
    }

    fn decode(&self, path: &str, text: &str) -> Result<Notebook> {
        let parsed: JupyterNotebook =
            serde_json::from_str(text).map_err(|e| Error::malformed(FORMAT, e))?;
        parsed.into_notebook(path)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JupyterNotebook {
    #[serde(default)]
    metadata: JupyterMetadata,
    nbformat: u32,
    #[serde(default)]
    nbformat_minor: u32,
    #[serde(default)]
    cells: Vec<JupyterCell>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct JupyterMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    config: Option<NotebookConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language_info: Option<LanguageInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LanguageInfo {
    name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum CellType {
    Markdown,
    Code,
    Raw,
}

#[derive(Debug, Serialize, Deserialize)]
struct JupyterCell {
    cell_type: CellType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    execution_count: Option<u32>,
    #[serde(default)]
    metadata: JupyterCellMetadata,
    source: Source,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    outputs: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct JupyterCellMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cell_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(flatten)]
    flags: CellMetadata,
}

/// Cell source: nbformat allows either a list of lines or one string.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum Source {
    Lines(Vec<String>),
    Text(String),
}

impl Source {
    fn from_content(content: &str) -> Self {
        Self::Lines(content.split_inclusive('\n').map(str::to_owned).collect())
    }

    fn into_content(self) -> String {
        match self {
            Self::Lines(lines) => lines.concat(),
            Self::Text(text) => text,
        }
    }
}

impl From<&Notebook> for JupyterNotebook {
    fn from(notebook: &Notebook) -> Self {
        let language_info = notebook
            .cells
            .iter()
            .find(|cell| !cell.is_text())
            .map(|cell| LanguageInfo {
                name: cell.language.clone(),
            });

        Self {
            metadata: JupyterMetadata {
                config: notebook.config.clone(),
                language_info,
            },
            nbformat: NBFORMAT,
            nbformat_minor: 0,
            cells: notebook.cells.iter().map(JupyterCell::from).collect(),
        }
    }
}

impl From<&NotebookCell> for JupyterCell {
    fn from(cell: &NotebookCell) -> Self {
        let cell_type = if cell.is_text() {
            CellType::Markdown
        } else {
            CellType::Code
        };
        // nbformat requires an outputs array on code cells only
        let outputs = (cell_type == CellType::Code).then(|| cell.outputs.clone());

        Self {
            cell_type,
            execution_count: None,
            metadata: JupyterCellMetadata {
                cell_id: Some(cell.id),
                language: Some(cell.language.clone()),
                flags: cell.metadata,
            },
            source: Source::from_content(&cell.content),
            outputs,
        }
    }
}

impl JupyterNotebook {
    fn into_notebook(self, path: &str) -> Result<Notebook> {
        if self.nbformat < NBFORMAT {
            return Err(Error::invalid(
                FORMAT,
                format!(
                    "nbformat {} is not supported (need {NBFORMAT})",
                    self.nbformat
                ),
            ));
        }

        let default_language = self
            .metadata
            .language_info
            .map(|info| info.name)
            .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string());

        let cells = self
            .cells
            .into_iter()
            .enumerate()
            .map(|(index, cell)| {
                let language = match cell.cell_type {
                    CellType::Markdown | CellType::Raw => TEXT_LANGUAGE.to_string(),
                    CellType::Code => cell
                        .metadata
                        .language
                        .unwrap_or_else(|| default_language.clone()),
                };
                NotebookCell {
                    id: cell.metadata.cell_id.unwrap_or(index as u32),
                    language,
                    content: cell.source.into_content(),
                    metadata: cell.metadata.flags,
                    outputs: cell.outputs.unwrap_or_default(),
                }
            })
            .collect();

        Ok(Notebook {
            path: path.to_string(),
            cells,
            config: self.metadata.config,
        })
    }
}
