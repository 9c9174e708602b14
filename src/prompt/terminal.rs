//! Terminal implementation of the prompt contracts.
//!
//! Reads answers line-by-line from any `BufRead` (stdin in the binary, a
//! scripted buffer in tests). Free-text editing is approximated the way a
//! line-based UI can: the typed line replaces the selected span of the initial
//! value, so with the caret parked at the end the line is appended, and with
//! the selection over a file stem the line substitutes it. A blank line keeps
//! the initial value; end-of-input cancels.

use std::io::{self, BufRead};
use std::path::Path;

use crate::output as out;
use crate::prompt::{Choice, Interaction, PostOperation, Selection};

pub struct TerminalInteraction<R> {
    input: R,
}

impl TerminalInteraction<io::BufReader<io::Stdin>> {
    pub fn stdin() -> Self {
        Self {
            input: io::BufReader::new(io::stdin()),
        }
    }
}

impl<R: BufRead> TerminalInteraction<R> {
    pub fn from_reader(input: R) -> Self {
        Self { input }
    }

    /// Read one line, trimming the newline. `None` on EOF or read failure.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_string()),
        }
    }
}

impl<R: BufRead> Interaction for TerminalInteraction<R> {
    fn input_text(&mut self, prompt: &str, initial: &str, selection: Selection) -> Option<String> {
        out::print_user(&format!("{prompt}: {initial}"));
        let line = self.read_line()?;
        if line.is_empty() {
            return Some(initial.to_string());
        }
        let (start, end) = clamp(selection, initial.len());
        let mut value = String::with_capacity(initial.len() + line.len());
        value.push_str(&initial[..start]);
        value.push_str(&line);
        value.push_str(&initial[end..]);
        Some(value)
    }

    fn pick_one(&mut self, choices: &[Choice], placeholder: &str) -> Option<String> {
        out::print_user(placeholder);
        for (i, choice) in choices.iter().enumerate() {
            match &choice.description {
                Some(desc) => out::print_user(&format!("  {}) {} {desc}", i + 1, choice.label)),
                None => out::print_user(&format!("  {}) {}", i + 1, choice.label)),
            }
        }
        let line = self.read_line()?;
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        // Accept an index or a verbatim label.
        if let Ok(n) = line.parse::<usize>() {
            if n >= 1 && n <= choices.len() {
                return Some(choices[n - 1].label.clone());
            }
        }
        choices
            .iter()
            .find(|c| c.label == line)
            .map(|c| c.label.clone())
    }

    fn confirm(&mut self, question: &str) -> bool {
        out::print_user(&format!("{question} [y/N]"));
        match self.read_line() {
            Some(line) => matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            None => false,
        }
    }
}

fn clamp(selection: Selection, len: usize) -> (usize, usize) {
    let (start, end) = selection;
    let end = end.min(len);
    (start.min(end), end)
}

/// Default presentation: print the resulting path so shells can capture it.
#[derive(Debug, Default)]
pub struct PrintResult;

impl PostOperation for PrintResult {
    fn completed(&mut self, path: &Path) {
        out::print_user(&path.display().to_string());
    }
}
