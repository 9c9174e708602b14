//! Create a file or directory, building missing ancestors first.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

use crate::entry::PathEntry;
use crate::errors::FilesmithError;

/// Create the target described by `entry`.
///
/// Directory intent: recursively create all missing ancestors and the final
/// directory; an existing *file* at the path is `AlreadyExists`. File intent:
/// create missing ancestors, then an empty file only if nothing is there yet.
/// An existing file is left untouched (idempotent create, never a truncating
/// overwrite); an existing *directory* at a file path is `AlreadyExists`.
pub fn create(entry: &PathEntry) -> Result<PathEntry, FilesmithError> {
    let path = &entry.absolute_path;

    if entry.is_directory {
        if path.is_file() {
            return Err(FilesmithError::AlreadyExists(path.clone()));
        }
        fs::create_dir_all(path).map_err(|e| create_err(path, e))?;
        info!(path = %path.display(), "created directory");
    } else {
        if path.is_dir() {
            return Err(FilesmithError::AlreadyExists(path.clone()));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| create_err(parent, e))?;
        }
        // create_new keeps this race-free: either we made the empty file, or
        // somebody else's file survives untouched.
        match fs::OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => info!(path = %path.display(), "created file"),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                debug!(path = %path.display(), "file already exists; left untouched");
            }
            Err(e) => return Err(create_err(path, e)),
        }
    }

    Ok(entry.clone())
}

fn create_err(path: &Path, source: io::Error) -> FilesmithError {
    FilesmithError::Create {
        path: path.to_path_buf(),
        source,
    }
}
