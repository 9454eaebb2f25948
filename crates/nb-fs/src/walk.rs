//! Bounded directory walking

use std::path::Path;

use walkdir::WalkDir;

use crate::{Error, NormalizedPath, Result};

/// Collect every file below `root` whose name ends in `.{extension}`.
///
/// Symbolic links are followed and the walk descends at most `max_depth`
/// levels. The root itself is never returned. Paths come back relative to
/// `root`, in traversal order. The first traversal error (permission,
/// link cycle) aborts the walk.
pub fn find_files_with_extension(
    root: &Path,
    max_depth: usize,
    extension: &str,
) -> Result<Vec<NormalizedPath>> {
    let suffix = format!(".{extension}");
    let mut found = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .min_depth(1)
        .max_depth(max_depth)
    {
        let entry = entry.map_err(|e| Error::Walk {
            path: e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            message: e.to_string(),
        })?;

        if !entry.file_name().to_string_lossy().ends_with(&suffix) {
            continue;
        }

        if let Ok(relative) = entry.path().strip_prefix(root) {
            found.push(NormalizedPath::from(relative));
        }
    }

    tracing::debug!(root = %root.display(), count = found.len(), "walked notebook directory");
    Ok(found)
}
