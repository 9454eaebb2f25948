//! Error types for nb-store

/// Result type for nb-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Stable classification of store failures.
///
/// Callers translate these into protocol responses (HTTP status codes,
/// exit codes); the variants of [`Error`] may grow, these do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    AlreadyExists,
    NotFound,
    Transport,
    Conversion,
    /// Stored notebook content could not be decoded
    Corrupt,
    Io,
}

/// Errors that can occur in nb-store operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Notebook path {path} is {depth} levels deep; the maximum is {max_depth}")]
    PathTooDeep {
        path: String,
        depth: usize,
        max_depth: usize,
    },

    #[error("Notebook path {path} has no file name")]
    EmptyName { path: String },

    #[error("Notebook already exists: {path}")]
    AlreadyExists { path: String },

    #[error("Notebook not found: {path}")]
    NotFound { path: String },

    #[error("Failed to fetch {uri}: {message}")]
    Fetch { uri: String, message: String },

    #[error("Failed to set up HTTP client: {message}")]
    HttpClient { message: String },

    #[error("Failed to convert legacy notebook {path}: {source}")]
    Conversion {
        path: String,
        #[source]
        source: nb_model::Error,
    },

    #[error("Failed to read notebook {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: nb_model::Error,
    },

    #[error("Failed to write notebook {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: nb_model::Error,
    },

    #[error("Background filesystem task failed: {message}")]
    Task { message: String },

    /// Filesystem error from nb-fs
    #[error(transparent)]
    Fs(#[from] nb_fs::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PathTooDeep { .. } | Self::EmptyName { .. } => ErrorKind::InvalidArgument,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Fetch { .. } | Self::HttpClient { .. } => ErrorKind::Transport,
            Self::Conversion { .. } => ErrorKind::Conversion,
            Self::Decode { .. } => ErrorKind::Corrupt,
            Self::Encode { .. } | Self::Task { .. } => ErrorKind::Io,
            Self::Fs(fs) => match fs {
                nb_fs::Error::OutsideRoot { .. } => ErrorKind::InvalidArgument,
                nb_fs::Error::NotFound { .. } => ErrorKind::NotFound,
                _ => ErrorKind::Io,
            },
        }
    }

    /// Map a filesystem error for `path`, naming the notebook rather than
    /// the absolute location when the file is missing.
    pub(crate) fn fs(path: &str, error: nb_fs::Error) -> Self {
        if error.is_not_found() {
            Self::NotFound {
                path: path.to_string(),
            }
        } else {
            Self::Fs(error)
        }
    }
}
