//! Core configuration types.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::roots::RootCandidate;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for the interactive flows.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Known workspace roots, in declaration order.
    pub roots: Vec<PathBuf>,
    /// Enable the incremental directory picker before the free-text prompt.
    pub typeahead_enabled: bool,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// The configured roots as ordered candidates for root selection.
    pub fn root_candidates(&self) -> Vec<RootCandidate> {
        self.roots
            .iter()
            .map(RootCandidate::from_path)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parses_aliases() {
        assert_eq!(LogLevel::parse("ERROR"), Some(LogLevel::Quiet));
        assert_eq!(LogLevel::parse("verbose"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("trace"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("nope"), None);
        assert_eq!("normal".parse::<LogLevel>().unwrap(), LogLevel::Normal);
    }

    #[test]
    fn root_candidates_preserve_order_and_name_by_final_segment() {
        let cfg = Config {
            roots: vec![PathBuf::from("/ws-a"), PathBuf::from("/ws-b")],
            ..Default::default()
        };
        let candidates = cfg.root_candidates();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].name, "ws-a");
        assert_eq!(candidates[1].path, PathBuf::from("/ws-b"));
    }
}
