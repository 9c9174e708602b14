//! Prompt collaborator contracts.
//!
//! The core never draws widgets itself; it hands these narrow contracts the
//! data to show and resumes with the user's answer. Cancellation is modelled
//! as `None`/`false`, never as an error, and the whole resolve → confirm →
//! mutate sequence is a linear flow suspending at each prompt boundary.

pub mod terminal;

use std::path::Path;

/// One row of a single-choice prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub description: Option<String>,
}

impl Choice {
    pub fn new(label: impl Into<String>, description: Option<String>) -> Self {
        Self {
            label: label.into(),
            description,
        }
    }
}

/// Caret selection inside the initial value of a free-text prompt,
/// as a half-open byte range `[start, end)`.
pub type Selection = (usize, usize);

/// The three prompt primitives the surrounding layer must supply.
pub trait Interaction {
    /// Free-text input pre-seeded with `initial` and the caret placed over
    /// `selection`. Returns the full edited value, or `None` on cancel.
    fn input_text(&mut self, prompt: &str, initial: &str, selection: Selection) -> Option<String>;

    /// Single choice over ordered entries. Returns the chosen label, or
    /// `None` on cancel.
    fn pick_one(&mut self, choices: &[Choice], placeholder: &str) -> Option<String>;

    /// Yes/no confirmation (overwrite, delete). `false` means declined.
    fn confirm(&mut self, question: &str) -> bool;
}

/// Post-operation hook: notified with the resulting absolute path after a
/// successful create/duplicate/move so the host can present it.
pub trait PostOperation {
    fn completed(&mut self, path: &Path);
}

/// Hook that does nothing; for callers without a presentation layer.
#[derive(Debug, Default)]
pub struct NoPresentation;

impl PostOperation for NoPresentation {
    fn completed(&mut self, _path: &Path) {}
}
