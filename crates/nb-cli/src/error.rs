//! Error types for nb-cli

use nb_store::ErrorKind;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from nb-store
    #[error(transparent)]
    Store(#[from] nb_store::Error),

    /// Reading a local input file failed
    #[error("Cannot read {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// Process exit code, one per failure class.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Store(e) => match e.kind() {
                ErrorKind::InvalidArgument => 2,
                ErrorKind::AlreadyExists => 3,
                ErrorKind::NotFound => 4,
                ErrorKind::Transport => 5,
                ErrorKind::Conversion | ErrorKind::Corrupt => 6,
                ErrorKind::Io => 1,
            },
            Self::Input { .. } => 1,
        }
    }
}
