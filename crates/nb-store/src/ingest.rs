//! Notebook creation inputs and path/title helpers

use std::sync::LazyLock;

use regex::Regex;

/// Suffix of legacy Zeppelin exports
pub const LEGACY_EXTENSION: &str = "json";

/// Where a new notebook's content comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Ingestion {
    /// Download the notebook text from a URI and store it verbatim
    Remote(String),
    /// Store the given text; legacy JSON is converted first
    Content(String),
    /// Generate a blank notebook
    #[default]
    Blank,
}

impl Ingestion {
    /// Build from the optional URI / content pair a request carries.
    ///
    /// A URI takes precedence over content.
    pub fn from_parts(uri: Option<String>, content: Option<String>) -> Self {
        match (uri, content) {
            (Some(uri), _) => Self::Remote(uri),
            (None, Some(content)) => Self::Content(content),
            (None, None) => Self::Blank,
        }
    }
}

/// Normalize a requested notebook path to end in `.{extension}`.
///
/// Leading slashes are dropped, then one trailing `.{extension}` (or,
/// failing that, one legacy `.json`) suffix is removed before the extension
/// is appended once.
pub fn with_extension(path: &str, extension: &str) -> String {
    format!("{}.{extension}", strip_extension(path, extension))
}

/// The path without leading slashes and without its last notebook or
/// legacy suffix. Only one suffix is removed.
pub fn strip_extension<'a>(path: &'a str, extension: &str) -> &'a str {
    let trimmed = path.trim_start_matches('/');
    trimmed
        .strip_suffix(&format!(".{extension}"))
        .or_else(|| trimmed.strip_suffix(&format!(".{LEGACY_EXTENSION}")))
        .unwrap_or(trimmed)
}

/// Whether the file name of `path` marks it as a legacy export.
pub fn is_legacy(path: &str) -> bool {
    path.ends_with(&format!(".{LEGACY_EXTENSION}"))
}

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-_]+").unwrap());

/// Human-readable title from the last segment of an extension-stripped path.
pub fn title_from_path(stripped: &str) -> String {
    let last = stripped.rsplit('/').next().unwrap_or(stripped);
    SEPARATORS.replace_all(last, " ").trim().to_string()
}
