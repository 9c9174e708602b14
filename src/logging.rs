//! Tracing initialization.
//! Builds a subscriber with EnvFilter, compact or JSON stdout formatting and
//! an optional non-blocking file layer.
//!
//! File logging is refused when any ancestor of the log path is a symlink;
//! the tool keeps running with stdout logging only.

use std::fmt as stdfmt;
use std::path::Path;

use anyhow::Result;
use chrono::Local;
use filesmith::LogLevel;
use filesmith::config::path_has_symlink_ancestor;
use filesmith::output as out;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::util::SubscriberInitExt;

/// Human-friendly timestamp formatter (DD/MM/YY HH:MM:SS)
struct LocalHumanTime;
impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().format("%d/%m/%y %H:%M:%S"))
    }
}

fn env_filter_for(lvl: &LogLevel) -> EnvFilter {
    let level = match lvl {
        LogLevel::Quiet => LevelFilter::ERROR,
        LogLevel::Normal => LevelFilter::INFO,
        LogLevel::Info => LevelFilter::DEBUG,
        LogLevel::Debug => LevelFilter::TRACE,
    };
    EnvFilter::new(level.to_string())
}

/// Open a non-blocking append writer for the log file, or None with a printed
/// reason (symlinked ancestor, unwritable parent).
fn maybe_open_non_blocking_writer(path: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    match path_has_symlink_ancestor(path) {
        Ok(false) => {}
        Ok(true) => {
            out::print_warn(&format!(
                "Refusing file logging: an ancestor of {} is a symlink; continuing on stdout only.",
                path.display()
            ));
            return None;
        }
        Err(e) => {
            out::print_warn(&format!(
                "Could not check log path {} for symlinks: {e}; continuing on stdout only.",
                path.display()
            ));
            return None;
        }
    }

    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    match std::fs::OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(tracing_appender::non_blocking(file)),
        Err(e) => {
            out::print_warn(&format!(
                "Failed to open log file {}: {e}; continuing on stdout only.",
                path.display()
            ));
            None
        }
    }
}

/// Initialize tracing. Returns the worker guard when a file appender was
/// attached; it must be held until shutdown so buffered events get flushed.
pub fn init_tracing(
    lvl: &LogLevel,
    log_file: Option<&Path>,
    json: bool,
) -> Result<Option<WorkerGuard>> {
    let env_filter = env_filter_for(lvl);

    let mut guard = None;
    let file_writer = log_file.and_then(maybe_open_non_blocking_writer).map(|(writer, g)| {
        guard = Some(g);
        writer
    });

    if json {
        let stdout_layer = tsfmt::layer().json().with_timer(LocalHumanTime);
        let file_layer = file_writer.map(|w| {
            tsfmt::layer()
                .json()
                .with_timer(LocalHumanTime)
                .with_writer(w)
        });
        registry()
            .with(env_filter)
            .with(stdout_layer)
            .with(file_layer)
            .init();
    } else {
        let stdout_layer = tsfmt::layer().with_timer(LocalHumanTime).compact();
        let file_layer = file_writer.map(|w| {
            tsfmt::layer()
                .with_timer(LocalHumanTime)
                .compact()
                .with_writer(w)
        });
        registry()
            .with(env_filter)
            .with(stdout_layer)
            .with(file_layer)
            .init();
    }

    Ok(guard)
}
