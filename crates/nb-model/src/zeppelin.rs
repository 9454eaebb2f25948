//! Legacy Apache Zeppelin note import
//!
//! A Zeppelin note is a JSON object with a `paragraphs` array. Each paragraph
//! may start with an interpreter directive line (`%pyspark`, `%md`, ...)
//! that selects the cell language.

use serde::Deserialize;

use crate::document::{Notebook, NotebookCell, TEXT_LANGUAGE};
use crate::{Error, Result};

const FORMAT: &str = "zeppelin";
const DEFAULT_LANGUAGE: &str = "scala";

/// Converts a legacy note into a [`Notebook`].
pub trait LegacyConverter: Send + Sync {
    fn convert(&self, path: &str, raw: &str) -> Result<Notebook>;
}

/// Zeppelin note (`note.json`) converter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeppelinConverter;

impl LegacyConverter for ZeppelinConverter {
    fn convert(&self, path: &str, raw: &str) -> Result<Notebook> {
        let note: ZeppelinNote =
            serde_json::from_str(raw).map_err(|e| Error::malformed(FORMAT, e))?;
        let paragraphs = note
            .paragraphs
            .ok_or_else(|| Error::invalid(FORMAT, "note has no `paragraphs` array"))?;

        let cells: Vec<NotebookCell> = paragraphs
            .into_iter()
            .filter_map(|paragraph| {
                let text = paragraph.text.filter(|t| !t.trim().is_empty())?;
                let editor_language = paragraph
                    .config
                    .and_then(|c| c.editor_setting)
                    .and_then(|s| s.language);
                Some(split_directive(&text, editor_language))
            })
            .enumerate()
            .map(|(id, (language, content))| NotebookCell::new(id as u32, language, content))
            .collect();

        tracing::debug!(
            path,
            name = note.name.as_deref().unwrap_or(""),
            cells = cells.len(),
            "converted zeppelin note"
        );
        Ok(Notebook::new(path, cells))
    }
}

#[derive(Debug, Deserialize)]
struct ZeppelinNote {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    paragraphs: Option<Vec<ZeppelinParagraph>>,
}

#[derive(Debug, Deserialize)]
struct ZeppelinParagraph {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    config: Option<ParagraphConfig>,
}

#[derive(Debug, Deserialize)]
struct ParagraphConfig {
    #[serde(default, rename = "editorSetting")]
    editor_setting: Option<EditorSetting>,
}

#[derive(Debug, Deserialize)]
struct EditorSetting {
    #[serde(default)]
    language: Option<String>,
}

/// Split a paragraph into (language, content).
fn split_directive(text: &str, editor_language: Option<String>) -> (String, String) {
    let (first_line, rest) = match text.split_once('\n') {
        Some((first, rest)) => (first, rest),
        None => (text, ""),
    };

    match first_line.trim().strip_prefix('%') {
        Some(directive) if !directive.is_empty() => {
            (language_for(directive).to_string(), rest.to_string())
        }
        _ => (
            editor_language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            text.to_string(),
        ),
    }
}

fn language_for(directive: &str) -> &str {
    let interpreter = directive.split_whitespace().next().unwrap_or(directive);
    match interpreter {
        "md" | "markdown" => TEXT_LANGUAGE,
        "pyspark" | "python" | "spark.pyspark" | "ipython" => "python",
        "sql" | "spark.sql" => "sql",
        "spark" | "scala" | "spark.spark" => "scala",
        "sh" | "shell" => "shell",
        other => other.strip_prefix("spark.").unwrap_or(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("%md\n# Title", "text", "# Title")]
    #[case("%pyspark\nprint(1)", "python", "print(1)")]
    #[case("%spark.sql\nselect 1", "sql", "select 1")]
    #[case("%sh\nls", "shell", "ls")]
    #[case("%spark.r\nx <- 1", "r", "x <- 1")]
    #[case("%md", "text", "")]
    #[case("val x = 1", "scala", "val x = 1")]
    fn directive_selects_language(
        #[case] text: &str,
        #[case] language: &str,
        #[case] content: &str,
    ) {
        assert_eq!(
            split_directive(text, None),
            (language.to_string(), content.to_string())
        );
    }

    #[test]
    fn editor_language_used_without_directive() {
        let (language, _) = split_directive("print(1)", Some("python".into()));
        assert_eq!(language, "python");
    }

    #[test]
    fn paragraphs_without_text_are_skipped() {
        let raw = r#"{"name": "n", "paragraphs": [{"text": "%md\nhi"}, {}, {"text": ""}, {"text": "  \n"}, {"text": "1"}]}"#;
        let notebook = ZeppelinConverter.convert("n.ipynb", raw).unwrap();
        let ids: Vec<u32> = notebook.cells.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert!(notebook.config.is_none());
    }

    #[test]
    fn missing_paragraphs_is_invalid() {
        let err = ZeppelinConverter.convert("n.ipynb", r#"{"name": "n"}"#).unwrap_err();
        assert!(err.to_string().contains("paragraphs"));
    }
}
