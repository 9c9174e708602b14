//! Typed error definitions for filesmith.
//! One variant per well-known failure mode so logs and tests can match on them.
//!
//! Every variant is terminal for the request in progress: nothing is retried,
//! the caller surfaces the error with the offending path. User cancellation is
//! carried as `Cancelled` internally but workflows convert it into a normal
//! no-op outcome before it reaches the user.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilesmithError {
    #[error("No reference path available; open a file or pass one with --at")]
    NoReferencePath,

    #[error("No root selected")]
    NoSelection,

    #[error("Failed to list directory '{path}': {source}")]
    Listing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("An entry of the opposite kind already exists at '{0}'")]
    AlreadyExists(PathBuf),

    #[error("Error creating '{path}': {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Operation cancelled for '{0}'")]
    Cancelled(PathBuf),

    #[error("Path not found: {0}")]
    NotFound(PathBuf),
}

impl FilesmithError {
    /// Stable machine-readable code for structured log fields.
    pub fn code(&self) -> &'static str {
        match self {
            FilesmithError::NoReferencePath => "no_reference_path",
            FilesmithError::NoSelection => "no_selection",
            FilesmithError::Listing { .. } => "listing",
            FilesmithError::AlreadyExists(_) => "already_exists",
            FilesmithError::Create { .. } => "create",
            FilesmithError::Cancelled(_) => "cancelled",
            FilesmithError::NotFound(_) => "not_found",
        }
    }

    /// True for the variants that represent the user backing out rather than
    /// something going wrong.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, FilesmithError::Cancelled(_))
    }
}
