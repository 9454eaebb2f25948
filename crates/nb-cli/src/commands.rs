//! Command implementations

use std::path::{Path, PathBuf};

use colored::Colorize;
use nb_store::{Ingestion, NotebookRepository};

use crate::error::{CliError, Result};

pub async fn run_list(repo: &dyn NotebookRepository) -> Result<()> {
    let mut notebooks = repo.list_notebooks().await?;
    notebooks.sort();
    for path in notebooks {
        println!("{path}");
    }
    Ok(())
}

pub async fn run_new(
    repo: &dyn NotebookRepository,
    path: &str,
    from_uri: Option<String>,
    from_file: Option<PathBuf>,
) -> Result<()> {
    let content = from_file.as_deref().map(read_input).transpose()?;
    let ingestion = Ingestion::from_parts(from_uri, content);

    let created = repo.create_notebook(path, ingestion).await?;
    println!("{} {}", "Created".green().bold(), created);
    Ok(())
}

pub async fn run_show(repo: &dyn NotebookRepository, path: &str) -> Result<()> {
    let notebook = repo.load_notebook(path).await?;
    println!("{} ({} cells)", notebook.path.bold(), notebook.cells.len());
    for cell in &notebook.cells {
        let first_line = cell.content.lines().next().unwrap_or("");
        println!("  [{}] {:<8} {}", cell.id, cell.language.cyan(), first_line);
    }
    Ok(())
}

pub async fn run_mv(repo: &dyn NotebookRepository, from: &str, to: &str) -> Result<()> {
    let renamed = repo.rename_notebook(from, to).await?;
    println!("{} {} -> {}", "Moved".green().bold(), from, renamed);
    Ok(())
}

pub async fn run_cp(repo: &dyn NotebookRepository, from: &str, to: &str) -> Result<()> {
    let copied = repo.copy_notebook(from, to).await?;
    println!("{} {} -> {}", "Copied".green().bold(), from, copied);
    Ok(())
}

pub async fn run_rm(repo: &dyn NotebookRepository, path: &str) -> Result<()> {
    repo.delete_notebook(path).await?;
    println!("{} {}", "Deleted".green().bold(), path);
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::Input {
        path: path.display().to_string(),
        source,
    })
}
