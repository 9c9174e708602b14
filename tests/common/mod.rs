//! Shared test doubles: a scripted prompt collaborator that records every
//! call, and a post-operation hook that collects notified paths.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use filesmith::prompt::{Choice, Interaction, PostOperation, Selection};

pub enum TextAnswer {
    /// Splice this text over the caret selection of the initial value, the
    /// way an input box edit would.
    Type(String),
    /// Accept the initial value unchanged.
    Keep,
    Cancel,
}

/// Prompt double driven by queued answers; every call is recorded so tests
/// can assert on what was shown.
#[derive(Default)]
pub struct ScriptedUi {
    text_answers: VecDeque<TextAnswer>,
    pick_answers: VecDeque<Option<String>>,
    confirm_answers: VecDeque<bool>,
    pub seen_prompts: Vec<String>,
    pub seen_initials: Vec<String>,
    pub seen_selections: Vec<Selection>,
    pub seen_picks: Vec<Vec<String>>,
    pub seen_descriptions: Vec<Vec<Option<String>>>,
    pub seen_confirms: Vec<String>,
}

impl ScriptedUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn type_text(mut self, text: &str) -> Self {
        self.text_answers.push_back(TextAnswer::Type(text.into()));
        self
    }

    pub fn keep_text(mut self) -> Self {
        self.text_answers.push_back(TextAnswer::Keep);
        self
    }

    pub fn cancel_text(mut self) -> Self {
        self.text_answers.push_back(TextAnswer::Cancel);
        self
    }

    pub fn pick(mut self, label: &str) -> Self {
        self.pick_answers.push_back(Some(label.into()));
        self
    }

    pub fn cancel_pick(mut self) -> Self {
        self.pick_answers.push_back(None);
        self
    }

    pub fn answer_confirm(mut self, proceed: bool) -> Self {
        self.confirm_answers.push_back(proceed);
        self
    }
}

impl Interaction for ScriptedUi {
    fn input_text(&mut self, prompt: &str, initial: &str, selection: Selection) -> Option<String> {
        self.seen_prompts.push(prompt.to_string());
        self.seen_initials.push(initial.to_string());
        self.seen_selections.push(selection);
        match self.text_answers.pop_front() {
            Some(TextAnswer::Type(text)) => {
                let (start, end) = selection;
                let start = start.min(initial.len());
                let end = end.clamp(start, initial.len());
                let mut value = String::new();
                value.push_str(&initial[..start]);
                value.push_str(&text);
                value.push_str(&initial[end..]);
                Some(value)
            }
            Some(TextAnswer::Keep) => Some(initial.to_string()),
            Some(TextAnswer::Cancel) | None => None,
        }
    }

    fn pick_one(&mut self, choices: &[Choice], _placeholder: &str) -> Option<String> {
        self.seen_picks
            .push(choices.iter().map(|c| c.label.clone()).collect());
        self.seen_descriptions
            .push(choices.iter().map(|c| c.description.clone()).collect());
        self.pick_answers.pop_front().flatten()
    }

    fn confirm(&mut self, question: &str) -> bool {
        self.seen_confirms.push(question.to_string());
        self.confirm_answers.pop_front().unwrap_or(false)
    }
}

/// Post-operation hook collecting every notified path.
#[derive(Default)]
pub struct RecordingHook {
    pub completed: Vec<PathBuf>,
}

impl PostOperation for RecordingHook {
    fn completed(&mut self, path: &Path) {
        self.completed.push(path.to_path_buf());
    }
}
