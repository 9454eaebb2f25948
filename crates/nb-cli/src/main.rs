//! nbstore CLI
//!
//! Lists, creates, inspects and moves notebooks in a notebook directory.

mod cli;
mod commands;
mod error;

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use nb_store::config::CONFIG_FILE_NAME;
use nb_store::{FileSystemNotebookRepository, NotebookRepository, StoreConfig};
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => StoreConfig::load(path)?,
        None => StoreConfig::load_or_default(Path::new(CONFIG_FILE_NAME))?,
    };
    if let Some(root) = cli.root {
        config = config.with_dir(root);
    }
    tracing::debug!(root = %config.storage.dir.display(), "using notebook root");

    let repo = FileSystemNotebookRepository::from_config(&config)?;
    execute_command(&repo, cli.command).await
}

fn init_tracing(verbose: bool) {
    let builder = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_target(verbose);
    let result = if verbose {
        tracing::subscriber::set_global_default(builder.with_max_level(Level::DEBUG).finish())
    } else {
        tracing::subscriber::set_global_default(
            builder.with_env_filter(EnvFilter::from_default_env()).finish(),
        )
    };
    if result.is_err() {
        eprintln!("warning: tracing subscriber already installed");
    }
}

async fn execute_command(repo: &dyn NotebookRepository, command: Commands) -> Result<()> {
    match command {
        Commands::List => commands::run_list(repo).await,
        Commands::New {
            path,
            from_uri,
            from_file,
        } => {
            repo.init_storage().await?;
            commands::run_new(repo, &path, from_uri, from_file).await
        }
        Commands::Show { path } => commands::run_show(repo, &path).await,
        Commands::Mv { from, to } => commands::run_mv(repo, &from, &to).await,
        Commands::Cp { from, to } => commands::run_cp(repo, &from, &to).await,
        Commands::Rm { path } => commands::run_rm(repo, &path).await,
    }
}
