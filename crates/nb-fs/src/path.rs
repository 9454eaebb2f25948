//! Path handling for the notebook repository
//!
//! Notebook identifiers are relative, forward-slash paths ([`NormalizedPath`]).
//! [`RepositoryRoot`] maps them onto the filesystem and measures how deep
//! they reach below the root.

use std::path::{Component, Path, PathBuf};

use crate::{Error, Result};

/// A path normalized to use forward slashes internally.
///
/// Relative notebook paths are stored in this form and converted to
/// platform-native paths only at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: path_str.replace('\\', "/"),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Consume the path and return its string form.
    pub fn into_string(self) -> String {
        self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Drop any leading `/` characters, making the path root-relative.
    pub fn trim_leading_slashes(&self) -> Self {
        Self {
            inner: self.inner.trim_start_matches('/').to_string(),
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Whether the file name ends in `.{extension}`.
    pub fn has_extension(&self, extension: &str) -> bool {
        self.file_name()
            .is_some_and(|name| name.ends_with(&format!(".{extension}")))
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

/// The directory every notebook path is resolved against.
///
/// Fixed at construction; never changes for the lifetime of a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRoot {
    root: PathBuf,
}

impl RepositoryRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn as_path(&self) -> &Path {
        &self.root
    }

    /// Join a relative notebook path onto the root.
    ///
    /// Pure path arithmetic: leading slashes are dropped so the result stays
    /// under the root, but no existence or traversal check is made.
    pub fn path_of(&self, relative: &str) -> PathBuf {
        let relative = NormalizedPath::new(relative).trim_leading_slashes();
        if relative.as_str().is_empty() {
            self.root.clone()
        } else {
            self.root.join(relative.to_native())
        }
    }

    /// Like [`path_of`](Self::path_of), but rejects paths that could leave the root.
    ///
    /// Any `..` segment (or a drive prefix on Windows) fails with
    /// [`Error::OutsideRoot`].
    pub fn resolve(&self, relative: &str) -> Result<PathBuf> {
        let normalized = NormalizedPath::new(relative).trim_leading_slashes();
        let escapes = Path::new(normalized.as_str()).components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::Prefix(_) | Component::RootDir
            )
        });
        if escapes {
            return Err(Error::OutsideRoot {
                path: relative.to_string(),
            });
        }
        Ok(self.path_of(relative))
    }

    /// Number of path segments `relative` adds beyond the root.
    ///
    /// The relative path is resolved against the root, the leading components
    /// shared with the root are dropped, and the remainder is counted.
    /// `.` segments are not counted; `..` segments are.
    pub fn depth_of(&self, relative: &str) -> usize {
        let resolved = self.path_of(relative);
        let mut root_components = self.root.components().filter(|c| *c != Component::CurDir);
        let mut resolved_components = resolved
            .components()
            .filter(|c| *c != Component::CurDir)
            .peekable();

        loop {
            match (root_components.next(), resolved_components.peek()) {
                (Some(a), Some(b)) if a == *b => {
                    resolved_components.next();
                }
                _ => break,
            }
        }
        resolved_components.count()
    }
}
