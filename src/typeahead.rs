//! Incremental directory-by-directory destination picker.
//!
//! Starting at a root, each step shows the cached listing of the current
//! directory (self entry first, then children in lexical order) through the
//! external single-choice prompt. Picking a child descends one level; picking
//! the self entry or cancelling resolves to the current directory. Depth is
//! bounded only by the tree on disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::cache::{DirectoryCache, DirectoryEntry, DirectoryListing, root_key};
use crate::errors::FilesmithError;
use crate::paths;
use crate::prompt::{Choice, Interaction};

const PLACEHOLDER: &str =
    "First, select an existing path to create relative to (larger projects may take a moment to load)";

pub struct TypeAheadResolver<'a> {
    cache: &'a DirectoryCache,
    /// Chooses the self entry's description: workspace root vs current file.
    relative_to_root: bool,
}

impl<'a> TypeAheadResolver<'a> {
    pub fn new(cache: &'a DirectoryCache, relative_to_root: bool) -> Self {
        Self {
            cache,
            relative_to_root,
        }
    }

    /// Walk the user down from `root` until they stop; returns the directory
    /// the final free-text segment should be resolved against.
    pub fn resolve(
        &self,
        root: &Path,
        ui: &mut dyn Interaction,
    ) -> Result<PathBuf, FilesmithError> {
        let mut current = paths::normalize(root);
        loop {
            let listing = self.listing_for(&current)?;
            let choices: Vec<Choice> = listing
                .entries
                .iter()
                .map(|entry| Choice::new(entry.label.clone(), self.description_for(entry)))
                .collect();

            let picked = match ui.pick_one(&choices, PLACEHOLDER) {
                Some(label) => label,
                // Cancelling the picker means "stop here".
                None => return Ok(current),
            };

            match listing.entries.iter().find(|e| e.label == picked) {
                Some(entry) if entry.is_current_marker => return Ok(current),
                Some(entry) => {
                    debug!(dir = %entry.absolute_path.display(), "type-ahead descends");
                    current = entry.absolute_path.clone();
                }
                None => {
                    warn!(label = %picked, "picked label not in listing; stopping here");
                    return Ok(current);
                }
            }
        }
    }

    fn description_for(&self, entry: &DirectoryEntry) -> Option<String> {
        if !entry.is_current_marker {
            return None;
        }
        Some(if self.relative_to_root {
            "- workspace root".to_string()
        } else {
            "- current file".to_string()
        })
    }

    fn listing_for(&self, dir: &Path) -> Result<Arc<DirectoryListing>, FilesmithError> {
        let key = root_key(dir);
        if let Some(listing) = self.cache.get(&key) {
            return Ok(listing);
        }
        let listing = enumerate(dir, key)?;
        Ok(self.cache.put(listing))
    }
}

/// Enumerate the immediate subdirectories of `dir` into a fresh listing.
/// Fails with `Listing` on any enumeration error (permissions, removal
/// mid-session) without leaving partial state behind.
fn enumerate(dir: &Path, key: String) -> Result<DirectoryListing, FilesmithError> {
    let listing_err = |source| FilesmithError::Listing {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for item in fs::read_dir(dir).map_err(listing_err)? {
        let item = item.map_err(listing_err)?;
        if item.file_type().map_err(listing_err)?.is_dir() {
            let path = item.path();
            entries.push(DirectoryEntry {
                label: paths::relative_label(dir, &path),
                absolute_path: path,
                is_current_marker: false,
            });
        }
    }
    entries.sort_by(|a, b| a.label.cmp(&b.label));
    entries.insert(
        0,
        DirectoryEntry {
            label: "/".to_string(),
            absolute_path: dir.to_path_buf(),
            is_current_marker: true,
        },
    );

    Ok(DirectoryListing {
        root_key: key,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Selection;
    use std::collections::VecDeque;

    struct ScriptedPicks {
        answers: VecDeque<Option<String>>,
        seen: Vec<Vec<String>>,
    }

    impl ScriptedPicks {
        fn new(answers: &[Option<&str>]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.map(str::to_string)).collect(),
                seen: Vec::new(),
            }
        }
    }

    impl Interaction for ScriptedPicks {
        fn input_text(&mut self, _: &str, _: &str, _: Selection) -> Option<String> {
            None
        }
        fn pick_one(&mut self, choices: &[Choice], _: &str) -> Option<String> {
            self.seen
                .push(choices.iter().map(|c| c.label.clone()).collect());
            self.answers.pop_front().flatten()
        }
        fn confirm(&mut self, _: &str) -> bool {
            false
        }
    }

    #[test]
    fn listing_shows_self_first_then_lexical_children() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("dir-2")).unwrap();
        fs::create_dir(tmp.path().join("dir-1")).unwrap();
        fs::write(tmp.path().join("plain.txt"), b"not a dir").unwrap();

        let cache = DirectoryCache::new();
        let mut ui = ScriptedPicks::new(&[Some("/")]);
        let resolver = TypeAheadResolver::new(&cache, true);
        let resolved = resolver.resolve(tmp.path(), &mut ui).unwrap();

        assert_eq!(resolved, paths::normalize(tmp.path()));
        assert_eq!(ui.seen, vec![vec!["/", "/dir-1", "/dir-2"]]);
    }

    #[test]
    fn descending_then_self_resolves_to_the_subdirectory() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("dir-1")).unwrap();
        fs::create_dir(tmp.path().join("dir-2")).unwrap();

        let cache = DirectoryCache::new();
        let mut ui = ScriptedPicks::new(&[Some("/dir-1"), Some("/")]);
        let resolver = TypeAheadResolver::new(&cache, true);
        let resolved = resolver.resolve(tmp.path(), &mut ui).unwrap();

        assert_eq!(resolved, paths::normalize(&tmp.path().join("dir-1")));
        // Both the root and dir-1 listings are now cached.
        assert!(cache.get(&root_key(&paths::normalize(tmp.path()))).is_some());
    }

    #[test]
    fn cancelling_the_picker_stops_at_the_current_directory() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();

        let cache = DirectoryCache::new();
        let mut ui = ScriptedPicks::new(&[Some("/sub"), None]);
        let resolver = TypeAheadResolver::new(&cache, false);
        let resolved = resolver.resolve(tmp.path(), &mut ui).unwrap();
        assert_eq!(resolved, paths::normalize(&tmp.path().join("sub")));
    }

    #[test]
    fn self_entry_description_names_the_context() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = DirectoryCache::new();

        struct Capture(Vec<Option<String>>);
        impl Interaction for Capture {
            fn input_text(&mut self, _: &str, _: &str, _: Selection) -> Option<String> {
                None
            }
            fn pick_one(&mut self, choices: &[Choice], _: &str) -> Option<String> {
                self.0 = choices.iter().map(|c| c.description.clone()).collect();
                Some("/".into())
            }
            fn confirm(&mut self, _: &str) -> bool {
                false
            }
        }

        let mut ui = Capture(Vec::new());
        TypeAheadResolver::new(&cache, true)
            .resolve(tmp.path(), &mut ui)
            .unwrap();
        assert_eq!(ui.0[0].as_deref(), Some("- workspace root"));

        cache.invalidate(&root_key(&paths::normalize(tmp.path())));
        let mut ui = Capture(Vec::new());
        TypeAheadResolver::new(&cache, false)
            .resolve(tmp.path(), &mut ui)
            .unwrap();
        assert_eq!(ui.0[0].as_deref(), Some("- current file"));
    }

    #[test]
    fn enumeration_failure_is_a_listing_error() {
        let cache = DirectoryCache::new();
        let mut ui = ScriptedPicks::new(&[]);
        let resolver = TypeAheadResolver::new(&cache, true);
        let err = resolver
            .resolve(Path::new("/definitely/not/a/real/dir"), &mut ui)
            .unwrap_err();
        assert_eq!(err.code(), "listing");
        // Nothing was cached for the failing key.
        assert_eq!(cache.len(), 0);
    }
}
