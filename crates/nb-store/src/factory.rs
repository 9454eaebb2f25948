//! Blank notebook construction

use nb_model::{Notebook, NotebookCell};

use crate::config::NotebookDefaults;

/// Instruction line placed under the heading of every blank notebook
pub const PLACEHOLDER_TEXT: &str = "This is a text cell. Start editing!";

/// A one-cell notebook headed by `title`, configured from `defaults`.
pub fn empty_notebook(path: &str, title: &str, defaults: &NotebookDefaults) -> Notebook {
    let heading = NotebookCell::text(0, format!("# {title}\n\n{PLACEHOLDER_TEXT}"));
    Notebook::new(path, vec![heading]).with_config(defaults.to_notebook_config())
}
