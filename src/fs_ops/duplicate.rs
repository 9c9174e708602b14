//! Copy a file, or recursively copy a directory tree, to a new target.

use std::fs;
use std::io;
use std::path::Path;

use rayon::prelude::*;
use tracing::info;
use walkdir::WalkDir;

use crate::entry::PathEntry;
use crate::errors::FilesmithError;

/// Copy `source` to `target`, creating missing ancestors of the target first.
/// Overwrite confirmation is the engine's job; by the time this runs the
/// caller has already obtained a "proceed".
pub fn duplicate(source: &PathEntry, target: &PathEntry) -> Result<PathEntry, FilesmithError> {
    let src = &source.absolute_path;
    let dst = &target.absolute_path;

    let meta = fs::symlink_metadata(src)
        .map_err(|_| FilesmithError::NotFound(src.clone()))?;

    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent).map_err(|e| create_err(parent, e))?;
    }

    if meta.is_dir() {
        copy_tree(src, dst)?;
    } else {
        fs::copy(src, dst).map_err(|e| create_err(dst, e))?;
    }

    info!(src = %src.display(), dest = %dst.display(), "duplicated");
    Ok(PathEntry::new(
        source.source_path.clone(),
        dst.clone(),
        meta.is_dir(),
    ))
}

/// Replicate the directory skeleton first, then copy the files in parallel.
pub(crate) fn copy_tree(src: &Path, dst: &Path) -> Result<(), FilesmithError> {
    WalkDir::new(src)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_dir())
        .try_for_each(|d| -> Result<(), FilesmithError> {
            if let Ok(rel) = d.path().strip_prefix(src) {
                let new_dir = dst.join(rel);
                fs::create_dir_all(&new_dir).map_err(|e| create_err(&new_dir, e))?;
            }
            Ok(())
        })?;

    let files: Vec<_> = WalkDir::new(src)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();

    files.par_iter().try_for_each(|path| {
        let rel = match path.strip_prefix(src) {
            Ok(rel) => rel,
            // Walkdir only yields children of src; skip anything odd.
            Err(_) => return Ok(()),
        };
        let to = dst.join(rel);
        fs::copy(path, &to)
            .map(|_| ())
            .map_err(|e| create_err(&to, e))
    })
}

fn create_err(path: &Path, source: io::Error) -> FilesmithError {
    FilesmithError::Create {
        path: path.to_path_buf(),
        source,
    }
}
