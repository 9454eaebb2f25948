//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// nbstore - manage a directory of notebooks
#[derive(Parser, Debug)]
#[command(name = "nbstore")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (TOML, JSON or YAML); defaults to ./nbstore.toml when present
    #[arg(short, long, global = true, env = "NBSTORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Notebook root directory, overriding the config file
    #[arg(short, long, global = true, env = "NBSTORE_ROOT")]
    pub root: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List every notebook below the root
    List,

    /// Create a notebook
    ///
    /// Examples:
    ///   nbstore new reports/weekly                      # blank notebook
    ///   nbstore new imported --from-uri https://host/x  # download
    ///   nbstore new sales.json --from-file note.json    # convert a Zeppelin export
    New {
        /// Notebook path relative to the root; the extension is optional
        path: String,

        /// Download the notebook from this URI
        #[arg(long, conflicts_with = "from_file")]
        from_uri: Option<String>,

        /// Use the contents of this local file
        #[arg(long)]
        from_file: Option<PathBuf>,
    },

    /// Print a summary of a notebook's cells
    Show {
        path: String,
    },

    /// Rename a notebook
    Mv {
        from: String,
        to: String,
    },

    /// Copy a notebook
    Cp {
        from: String,
        to: String,
    },

    /// Delete a notebook
    Rm {
        path: String,
    },
}
