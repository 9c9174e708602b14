//! Root selection: decide which directory a new path is resolved against.
//!
//! Tie-break order for candidate roots keeps prompting to a minimum: a single
//! candidate wins outright, then a containment match against the reference
//! path, and only then the interactive picker.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::FilesmithError;
use crate::paths;
use crate::prompt::{Choice, Interaction};

/// One known project/workspace root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootCandidate {
    /// Short display name, typically the directory's final segment.
    pub name: String,
    pub path: PathBuf,
}

impl RootCandidate {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = paths::normalize(&path.into());
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, path }
    }
}

/// The parent directory of the reference path (the "current file").
pub fn from_reference_path(reference: Option<&Path>) -> Result<PathBuf, FilesmithError> {
    let reference = reference.ok_or(FilesmithError::NoReferencePath)?;
    reference
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| paths::normalize(p))
        .ok_or(FilesmithError::NoReferencePath)
}

/// Pick one of the candidate roots.
///
/// Exactly one candidate returns directly without prompting. A reference path
/// contained in one candidate selects it without prompting. Anything else
/// goes to the external single-choice prompt; cancelling it (or having no
/// candidates at all) is `NoSelection`.
pub fn from_candidate_roots(
    candidates: &[RootCandidate],
    reference: Option<&Path>,
    ui: &mut dyn Interaction,
) -> Result<PathBuf, FilesmithError> {
    match candidates {
        [] => return Err(FilesmithError::NoSelection),
        [only] => return Ok(only.path.clone()),
        _ => {}
    }

    if let Some(reference) = reference
        && let Some(owner) = candidates
            .iter()
            .find(|c| paths::is_contained_in(&c.path, reference))
    {
        debug!(root = %owner.path.display(), reference = %reference.display(), "root chosen by containment");
        return Ok(owner.path.clone());
    }

    let choices: Vec<Choice> = candidates
        .iter()
        .map(|c| Choice::new(c.path.display().to_string(), Some(c.name.clone())))
        .collect();
    let picked = ui
        .pick_one(&choices, "Select the workspace root to create relative to")
        .ok_or(FilesmithError::NoSelection)?;

    candidates
        .iter()
        .find(|c| c.path.display().to_string() == picked)
        .map(|c| c.path.clone())
        .ok_or(FilesmithError::NoSelection)
}
