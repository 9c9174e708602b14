//! Core library for `filesmith`.
//!
//! Interactive path resolution and conflict-safe file operations: pick a root
//! (the directory of a reference file or one of several workspace roots),
//! optionally narrow it directory-by-directory through the type-ahead picker,
//! resolve the typed path against that root and perform the mutation
//! (create, duplicate, move, remove) with overwrite confirmation.
//!
//! Prompt widgets are external collaborators behind the [`prompt::Interaction`]
//! trait; a terminal implementation ships in [`prompt::terminal`] and tests use
//! scripted doubles.

pub mod cache;
pub mod cli;
pub mod config;
pub mod entry;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod paths;
pub mod prompt;
pub mod roots;
pub mod typeahead;
pub mod workflow;

pub use cache::{DirectoryCache, DirectoryEntry, DirectoryListing};
pub use config::{Config, LogLevel};
pub use entry::PathEntry;
pub use errors::FilesmithError;
pub use fs_ops::{FileOperationEngine, OperationRequest};
pub use workflow::{Outcome, Workflow};
