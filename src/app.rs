//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the interrupt handler,
//! wires the terminal prompts into the workflows and reports the outcome.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use tracing::{debug, error, info};

use filesmith::cli::{Args, Command};
use filesmith::config::{self, CONFIG_ENV};
use filesmith::output as out;
use filesmith::prompt::terminal::{PrintResult, TerminalInteraction};
use filesmith::{DirectoryCache, FilesmithError, Outcome, Workflow};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init.
    if args.print_config {
        if let Ok(explicit) = std::env::var(CONFIG_ENV) {
            out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {explicit}\n"));
            out::print_info("To override, unset it or point it at another file.");
            return Ok(());
        }
        match config::default_config_path() {
            Ok(p) => {
                out::print_info(&format!("Default filesmith config path:\n  {}\n", p.display()));
                if p.exists() {
                    out::print_info("A config file already exists at that location.");
                } else {
                    out::print_info("No config file exists there yet. Run a subcommand to create a template.");
                }
            }
            Err(e) => out::print_error(&format!("Could not determine a default config path: {e}")),
        }
        return Ok(());
    }

    // Create the template config on first run (before logging init).
    if let Some(path) = config::ensure_default_config_exists() {
        out::print_success(&format!(
            "A template filesmith config was written to: {}",
            path.display()
        ));
        out::print_info(
            "Edit it to set workspace <root> entries, <typeahead_enabled>, <log_level> and <log_file>.",
        );
    }

    // Config file values first, CLI flags win.
    let mut cfg = config::load_config()?;
    args.apply_overrides(&mut cfg);

    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json)
        .inspect_err(|e| out::print_error(&format!("Failed to initialize logging: {e}")))?;

    // Guard is dropped on SIGINT so buffered file logs are flushed.
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        let handler = move || {
            out::print_warn("Interrupted; nothing was modified.");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
            std::process::exit(130);
        };
        if let Err(e) = ctrlc::set_handler(handler) {
            debug!(error = %e, "could not install interrupt handler");
        }
    }

    let Some(command) = args.command.clone() else {
        out::print_error("No operation given; try `filesmith new`, `duplicate`, `move` or `remove`.");
        std::process::exit(2);
    };

    debug!(?command, roots = cfg.roots.len(), typeahead = cfg.typeahead_enabled, "starting filesmith");

    let cache = DirectoryCache::new();
    let workflow = Workflow::new(&cfg, &cache);
    let mut ui = TerminalInteraction::stdin();
    let mut hook = PrintResult;
    let reference = args.reference.as_deref();

    let result = match command {
        Command::New { relative_to_root } => {
            workflow.new_path(reference, relative_to_root, &mut ui, &mut hook)
        }
        Command::Duplicate => workflow.duplicate(reference, &mut ui, &mut hook),
        Command::Move => workflow.move_path(reference, &mut ui, &mut hook),
        Command::Remove => workflow.remove(reference, &mut ui),
    };

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            report_error(&e);
            // Flush file logs before bubbling up.
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
            return Err(e.into());
        }
    };

    match outcome {
        Outcome::Done(entry) => {
            info!(path = %entry.absolute_path.display(), dir = entry.is_directory, "operation completed");
            out::print_success(&entry.absolute_path.display().to_string());
        }
        Outcome::Cancelled => {
            info!("operation cancelled by user");
            out::print_info("Cancelled; nothing was modified.");
        }
    }

    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }
    Ok(())
}

fn report_error(e: &FilesmithError) {
    let code = e.code();
    match e {
        FilesmithError::NoReferencePath => {
            error!(code, kind = "no_reference_path", "no reference path available")
        }
        FilesmithError::NoSelection => {
            error!(code, kind = "no_selection", "root selection cancelled")
        }
        FilesmithError::Listing { path, source } => {
            error!(code, kind = "listing", path = %path.display(), error = %source, "directory listing failed")
        }
        FilesmithError::AlreadyExists(path) => {
            error!(code, kind = "already_exists", path = %path.display(), "target already exists")
        }
        FilesmithError::Create { path, source } => {
            error!(code, kind = "create", path = %path.display(), error = %source, "operation failed")
        }
        FilesmithError::Cancelled(path) => {
            error!(code, kind = "cancelled", path = %path.display(), "operation cancelled")
        }
        FilesmithError::NotFound(path) => {
            error!(code, kind = "not_found", path = %path.display(), "path not found")
        }
    }
    out::print_error(&e.to_string());
}
