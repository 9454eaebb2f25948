//! Error types for nb-model

/// Result type for nb-model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while encoding, decoding or converting notebooks
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Text was not valid JSON for the expected structure
    #[error("Malformed {format} document: {source}")]
    Malformed {
        format: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// JSON parsed but does not describe a notebook
    #[error("Invalid {format} document: {message}")]
    Invalid {
        format: &'static str,
        message: String,
    },

    /// Encoding a notebook failed
    #[error("Failed to encode notebook: {0}")]
    Encode(#[source] serde_json::Error),
}

impl Error {
    pub fn malformed(format: &'static str, source: serde_json::Error) -> Self {
        Self::Malformed { format, source }
    }

    pub fn invalid(format: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            format,
            message: message.into(),
        }
    }
}
