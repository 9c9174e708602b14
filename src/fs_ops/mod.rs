//! Conflict-safe filesystem mutations.
//!
//! A single engine consumes tagged [`OperationRequest`]s so the shared
//! overwrite-confirmation and cache-invalidation logic lives in one place.
//! No mutation happens until every resolution and confirmation step has
//! succeeded; a failure or cancellation during resolution can never leave a
//! half-written target behind.

mod create;
mod duplicate;
mod relocate;
mod remove;

pub use create::create;
pub use duplicate::duplicate;
pub use relocate::relocate;
pub use remove::remove;

use crate::cache::DirectoryCache;
use crate::entry::PathEntry;
use crate::errors::FilesmithError;
use crate::prompt::Interaction;

/// Tagged operation over resolved path entries.
///
/// Move and Duplicate always carry both a source and a target; Create and
/// Remove carry exactly one entry.
#[derive(Debug, Clone)]
pub enum OperationRequest {
    Create {
        entry: PathEntry,
    },
    Duplicate {
        source: PathEntry,
        target: PathEntry,
    },
    Move {
        source: PathEntry,
        target: PathEntry,
    },
    Remove {
        entry: PathEntry,
    },
}

pub struct FileOperationEngine<'a> {
    cache: &'a DirectoryCache,
}

impl<'a> FileOperationEngine<'a> {
    pub fn new(cache: &'a DirectoryCache) -> Self {
        Self { cache }
    }

    /// Execute one request and return the resulting entry (the removed one
    /// for Remove). Listings covering any touched directory are invalidated
    /// afterwards so the next type-ahead session sees fresh children.
    pub fn execute(
        &self,
        request: OperationRequest,
        ui: &mut dyn Interaction,
    ) -> Result<PathEntry, FilesmithError> {
        match request {
            OperationRequest::Create { entry } => {
                let done = create(&entry)?;
                self.cache.invalidate_affected(&done.absolute_path);
                Ok(done)
            }
            OperationRequest::Duplicate { source, target } => {
                self.confirm_overwrite(&target, ui)?;
                let done = duplicate(&source, &target)?;
                self.cache.invalidate_affected(&done.absolute_path);
                Ok(done)
            }
            OperationRequest::Move { source, target } => {
                self.confirm_overwrite(&target, ui)?;
                let done = relocate(&source, &target)?;
                self.cache.invalidate_affected(&source.absolute_path);
                self.cache.invalidate_affected(&done.absolute_path);
                Ok(done)
            }
            OperationRequest::Remove { entry } => {
                let done = remove(&entry)?;
                self.cache.invalidate_affected(&done.absolute_path);
                Ok(done)
            }
        }
    }

    /// Overwrite contract: an existing target requires an explicit "proceed"
    /// from the confirmation collaborator before anything is touched.
    fn confirm_overwrite(
        &self,
        target: &PathEntry,
        ui: &mut dyn Interaction,
    ) -> Result<(), FilesmithError> {
        if !target.exists() {
            return Ok(());
        }
        let question = format!("Overwrite '{}'?", target.absolute_path.display());
        if ui.confirm(&question) {
            Ok(())
        } else {
            Err(FilesmithError::Cancelled(target.absolute_path.clone()))
        }
    }
}
