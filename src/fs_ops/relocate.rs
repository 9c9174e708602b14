//! Move/rename: atomic rename first, copy+remove fallback across filesystems.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

use crate::entry::PathEntry;
use crate::errors::FilesmithError;

use super::duplicate::copy_tree;

/// Move `source` to `target`, creating missing ancestors of the target first.
/// A confirmed-overwrite existing target is replaced. Rename is tried first
/// (atomic on the same filesystem); across filesystems the entry is copied
/// and the source removed afterwards.
pub fn relocate(source: &PathEntry, target: &PathEntry) -> Result<PathEntry, FilesmithError> {
    let src = &source.absolute_path;
    let dst = &target.absolute_path;

    let meta = fs::symlink_metadata(src)
        .map_err(|_| FilesmithError::NotFound(src.clone()))?;

    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent).map_err(|e| create_err(parent, e))?;
    }

    // Rename onto an existing directory fails; clear a confirmed target out
    // of the way so both shapes behave the same.
    if dst.exists() {
        clear_target(dst)?;
    }

    match fs::rename(src, dst) {
        Ok(()) => {
            info!(src = %src.display(), dest = %dst.display(), "renamed atomically");
        }
        Err(e) => {
            warn!(error = %e, "rename failed, falling back to copy+remove");
            if meta.is_dir() {
                copy_tree(src, dst)?;
                fs::remove_dir_all(src).map_err(|e| create_err(src, e))?;
            } else {
                fs::copy(src, dst).map_err(|e| create_err(dst, e))?;
                fs::remove_file(src).map_err(|e| create_err(src, e))?;
            }
            info!(src = %src.display(), dest = %dst.display(), "moved via copy+remove");
        }
    }

    Ok(PathEntry::new(
        source.source_path.clone(),
        dst.clone(),
        meta.is_dir(),
    ))
}

fn clear_target(dst: &Path) -> Result<(), FilesmithError> {
    let result = if dst.is_dir() {
        fs::remove_dir_all(dst)
    } else {
        fs::remove_file(dst)
    };
    result.map_err(|e| create_err(dst, e))
}

fn create_err(path: &Path, source: io::Error) -> FilesmithError {
    FilesmithError::Create {
        path: path.to_path_buf(),
        source,
    }
}
