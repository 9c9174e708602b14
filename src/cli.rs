//! CLI definition and parsing.
//!
//! Subcommands map one-to-one onto the interactive workflows; global flags
//! supply the external collaborators the core cannot know about (the
//! reference path, the workspace roots) and override config values.

use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::config::{Config, LogLevel};

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Interactively create, duplicate, move or remove files and directories"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Reference path the operation is relative to (the "current file").
    #[arg(long = "at", global = true, value_name = "PATH", value_hint = ValueHint::AnyPath)]
    pub reference: Option<PathBuf>,

    /// Workspace root candidate; repeat for multiple roots. Overrides config.
    #[arg(long = "root", global = true, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub roots: Vec<PathBuf>,

    /// Enable the incremental directory picker before the path prompt.
    #[arg(long, global = true, overrides_with = "no_typeahead")]
    pub typeahead: bool,

    /// Disable the incremental directory picker.
    #[arg(long, global = true, overrides_with = "typeahead")]
    pub no_typeahead: bool,

    /// Enable debug logging (shorthand for --log-level debug).
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,

    /// Set log level: quiet, normal, info, debug.
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Print the config file location used by filesmith and exit.
    #[arg(long)]
    pub print_config: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create a new file, or a directory when the typed path ends with a
    /// separator.
    New {
        /// Resolve relative to a workspace root instead of the reference path.
        #[arg(long)]
        relative_to_root: bool,
    },
    /// Copy the reference file or directory to a prompted destination.
    Duplicate,
    /// Move/rename the reference file or directory.
    #[command(name = "move")]
    Move,
    /// Delete the reference file or directory after confirmation.
    Remove,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset
    /// flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if !self.roots.is_empty() {
            cfg.roots = self.roots.clone();
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if self.typeahead {
            cfg.typeahead_enabled = true;
        }
        if self.no_typeahead {
            cfg.typeahead_enabled = false;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_roots_and_flip_typeahead() {
        let args = Args::parse_from([
            "filesmith",
            "new",
            "--root",
            "/ws-a",
            "--root",
            "/ws-b",
            "--typeahead",
        ]);
        let mut cfg = Config::default();
        args.apply_overrides(&mut cfg);
        assert_eq!(cfg.roots, vec![PathBuf::from("/ws-a"), PathBuf::from("/ws-b")]);
        assert!(cfg.typeahead_enabled);
    }

    #[test]
    fn no_typeahead_wins_over_config() {
        let args = Args::parse_from(["filesmith", "new", "--no-typeahead"]);
        let mut cfg = Config {
            typeahead_enabled: true,
            ..Default::default()
        };
        args.apply_overrides(&mut cfg);
        assert!(!cfg.typeahead_enabled);
    }

    #[test]
    fn debug_beats_log_level() {
        let args = Args::parse_from(["filesmith", "new", "-d", "--log-level", "quiet"]);
        assert_eq!(args.effective_log_level(), Some(LogLevel::Debug));
    }
}
