//! Delete a file or recursively delete a directory.

use std::fs;
use std::io;
use tracing::info;

use crate::entry::PathEntry;
use crate::errors::FilesmithError;

/// Remove the entry from disk. An absent path is `NotFound`: callers are
/// expected to have resolved the entry from an existing listing, so a miss is
/// a logic error rather than something to retry.
pub fn remove(entry: &PathEntry) -> Result<PathEntry, FilesmithError> {
    let path = &entry.absolute_path;

    let meta = fs::symlink_metadata(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            FilesmithError::NotFound(path.clone())
        } else {
            FilesmithError::Create {
                path: path.clone(),
                source: e,
            }
        }
    })?;

    let result = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    result.map_err(|e| FilesmithError::Create {
        path: path.clone(),
        source: e,
    })?;

    info!(path = %path.display(), dir = meta.is_dir(), "removed");
    Ok(entry.clone())
}
