//! Interactive flows: glue root selection, type-ahead, the free-text prompt
//! and the operation engine into the four user-facing operations.
//!
//! Every flow is a linear resume-with-result sequence. Cancelling any prompt
//! yields `Outcome::Cancelled` with filesystem and cache untouched; mutations
//! only run once all resolution and confirmation steps have succeeded.

use std::path::Path;

use crate::cache::DirectoryCache;
use crate::config::Config;
use crate::entry::PathEntry;
use crate::errors::FilesmithError;
use crate::fs_ops::{FileOperationEngine, OperationRequest};
use crate::prompt::{Interaction, PostOperation, Selection};
use crate::roots;
use crate::typeahead::TypeAheadResolver;

/// Result of one interactive request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Done(PathEntry),
    Cancelled,
}

pub struct Workflow<'a> {
    config: &'a Config,
    cache: &'a DirectoryCache,
}

impl<'a> Workflow<'a> {
    pub fn new(config: &'a Config, cache: &'a DirectoryCache) -> Self {
        Self { config, cache }
    }

    /// Create a new file or directory. The free-text prompt is pre-seeded
    /// with the chosen source directory plus a separator and the caret parked
    /// at the end; a trailing separator on the final value means directory.
    pub fn new_path(
        &self,
        reference: Option<&Path>,
        relative_to_root: bool,
        ui: &mut dyn Interaction,
        hook: &mut dyn PostOperation,
    ) -> Result<Outcome, FilesmithError> {
        let root = if relative_to_root {
            roots::from_candidate_roots(&self.config.root_candidates(), reference, ui)?
        } else {
            roots::from_reference_path(reference)?
        };

        let source_dir = if self.config.typeahead_enabled {
            TypeAheadResolver::new(self.cache, relative_to_root).resolve(&root, ui)?
        } else {
            root
        };

        let initial = format!("{}{}", source_dir.display(), std::path::MAIN_SEPARATOR);
        let caret = (initial.len(), initial.len());
        let Some(typed) = ui.input_text("File Name", &initial, caret) else {
            return Ok(Outcome::Cancelled);
        };

        let entry = PathEntry::from_typed(&source_dir, &typed);
        self.finish(OperationRequest::Create { entry }, ui, Some(hook))
    }

    /// Duplicate the reference file or directory to a prompted destination.
    pub fn duplicate(
        &self,
        reference: Option<&Path>,
        ui: &mut dyn Interaction,
        hook: &mut dyn PostOperation,
    ) -> Result<Outcome, FilesmithError> {
        let Some((source, target)) = self.prompt_target(reference, "Duplicate As", ui)? else {
            return Ok(Outcome::Cancelled);
        };
        self.finish(OperationRequest::Duplicate { source, target }, ui, Some(hook))
    }

    /// Move/rename the reference file or directory.
    pub fn move_path(
        &self,
        reference: Option<&Path>,
        ui: &mut dyn Interaction,
        hook: &mut dyn PostOperation,
    ) -> Result<Outcome, FilesmithError> {
        let Some((source, target)) = self.prompt_target(reference, "New Location", ui)? else {
            return Ok(Outcome::Cancelled);
        };
        self.finish(OperationRequest::Move { source, target }, ui, Some(hook))
    }

    /// Remove the reference file or directory after confirmation.
    pub fn remove(
        &self,
        reference: Option<&Path>,
        ui: &mut dyn Interaction,
    ) -> Result<Outcome, FilesmithError> {
        let reference = reference.ok_or(FilesmithError::NoReferencePath)?;
        let root = roots::from_reference_path(Some(reference))?;
        let entry = PathEntry::new(root, reference, reference.is_dir());

        if !ui.confirm(&format!("Delete '{}'?", entry.absolute_path.display())) {
            return Ok(Outcome::Cancelled);
        }
        self.finish(OperationRequest::Remove { entry }, ui, None)
    }

    /// Shared source/target prompt for duplicate and move: the initial value
    /// is the full source path with the caret selection spanning the file
    /// stem, so typing replaces just the name.
    fn prompt_target(
        &self,
        reference: Option<&Path>,
        prompt: &str,
        ui: &mut dyn Interaction,
    ) -> Result<Option<(PathEntry, PathEntry)>, FilesmithError> {
        let reference = reference.ok_or(FilesmithError::NoReferencePath)?;
        let root = roots::from_reference_path(Some(reference))?;

        let initial = reference.display().to_string();
        let Some(typed) = ui.input_text(prompt, &initial, stem_selection(&initial)) else {
            return Ok(None);
        };

        let source = PathEntry::new(root.clone(), reference, reference.is_dir());
        let target = PathEntry::from_typed(&root, &typed);
        Ok(Some((source, target)))
    }

    /// Run the engine, map a declined overwrite to a plain cancellation and
    /// notify the post-operation hook on success.
    fn finish(
        &self,
        request: OperationRequest,
        ui: &mut dyn Interaction,
        hook: Option<&mut dyn PostOperation>,
    ) -> Result<Outcome, FilesmithError> {
        let engine = FileOperationEngine::new(self.cache);
        match engine.execute(request, ui) {
            Ok(entry) => {
                if let Some(hook) = hook {
                    hook.completed(&entry.absolute_path);
                }
                Ok(Outcome::Done(entry))
            }
            Err(e) if e.is_cancellation() => Ok(Outcome::Cancelled),
            Err(e) => Err(e),
        }
    }
}

/// Byte range of the file stem within a rendered path, for caret selection.
fn stem_selection(value: &str) -> Selection {
    let path = Path::new(value);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.clone());
    let start = value.len().saturating_sub(name.len());
    (start, start + stem.len())
}
