//! Resolved filesystem targets.

use std::path::{Path, PathBuf};

use crate::paths;

/// A resolved, absolute filesystem target plus its presumed kind.
///
/// `absolute_path` is always fully normalized (no `.`/`..` segments, no
/// trailing separator). Entries are built by the root/path resolution layer,
/// consumed by the operation engine and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    /// The root the target was resolved against.
    pub source_path: PathBuf,
    /// Fully resolved absolute target path.
    pub absolute_path: PathBuf,
    /// Whether the target denotes a directory.
    pub is_directory: bool,
}

impl PathEntry {
    pub fn new(
        source: impl Into<PathBuf>,
        absolute: impl Into<PathBuf>,
        is_directory: bool,
    ) -> Self {
        Self {
            source_path: source.into(),
            absolute_path: paths::normalize(&absolute.into()),
            is_directory,
        }
    }

    /// Build an entry from free-text input resolved against `root`.
    /// A trailing separator on the typed value marks directory intent.
    pub fn from_typed(root: &Path, typed: &str) -> Self {
        Self {
            source_path: root.to_path_buf(),
            absolute_path: paths::resolve(root, typed),
            is_directory: paths::is_directory_intent(typed),
        }
    }

    pub fn exists(&self) -> bool {
        self.absolute_path.exists()
    }
}
