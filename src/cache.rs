//! Process-wide cache of directory listings keyed by root path.
//!
//! One listing per distinct root key, alive for the process lifetime; entries
//! are only replaced when the same key is re-requested after invalidation.
//! Listings are stored behind `Arc` and swapped whole — never mutated in
//! place — so a reentrant reader can keep using the listing it already holds
//! while a writer replaces the table slot.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, trace};

use crate::paths;

const KEY_PREFIX: &str = "workspace:";

/// Cache key for a directory's listing.
pub fn root_key(dir: &Path) -> String {
    format!("{KEY_PREFIX}{}", dir.display())
}

/// One row of a quick-pick listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Display label, `/` for the synthetic self entry, `/name` for children.
    pub label: String,
    pub absolute_path: PathBuf,
    /// Marks the synthetic "stop here" entry that is always listed first.
    pub is_current_marker: bool,
}

/// The most recently enumerated immediate subdirectories of one root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    pub root_key: String,
    /// Self entry first, then children in lexical label order.
    pub entries: Vec<DirectoryEntry>,
}

#[derive(Debug, Default)]
pub struct DirectoryCache {
    table: Mutex<HashMap<String, Arc<DirectoryListing>>>,
}

impl DirectoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, root_key: &str) -> Option<Arc<DirectoryListing>> {
        let table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        let hit = table.get(root_key).cloned();
        trace!(root_key, hit = hit.is_some(), "cache lookup");
        hit
    }

    /// Store or replace the listing for its key and hand back the shared copy.
    pub fn put(&self, listing: DirectoryListing) -> Arc<DirectoryListing> {
        let shared = Arc::new(listing);
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        table.insert(shared.root_key.clone(), Arc::clone(&shared));
        shared
    }

    /// Drop one key so the next `get` forces a fresh enumeration.
    pub fn invalidate(&self, root_key: &str) {
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        if table.remove(root_key).is_some() {
            debug!(root_key, "cache invalidated");
        }
    }

    /// Drop every cached listing whose directory is an ancestor or descendant
    /// of `path`. Called after a mutation added or removed a directory entry;
    /// over-invalidation is acceptable, stale listings are not.
    pub fn invalidate_affected(&self, path: &Path) {
        let path = paths::normalize(path);
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        table.retain(|key, _| {
            let dir = match key.strip_prefix(KEY_PREFIX) {
                Some(d) => PathBuf::from(d),
                None => return true,
            };
            let affected =
                paths::is_contained_in(&dir, &path) || paths::is_contained_in(&path, &dir);
            if affected {
                debug!(root_key = %key, changed = %path.display(), "cache invalidated");
            }
            !affected
        });
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.table
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
