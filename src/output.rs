//! User-facing console output.
//! Prefixed, colored status lines plus plain lines for prompts and results.
//! Colors are enabled only when stdout is a TTY.

use owo_colors::OwoColorize;

enum Level {
    Info,
    Warn,
    Error,
    Success,
}

fn emit(level: Level, msg: &str) {
    let tty = atty::is(atty::Stream::Stdout);
    match level {
        Level::Info if tty => println!("{} {msg}", "info:".cyan().bold()),
        Level::Info => println!("info: {msg}"),
        Level::Success if tty => println!("{} {msg}", "ok:".green().bold()),
        Level::Success => println!("ok: {msg}"),
        Level::Warn if tty => eprintln!("{} {msg}", "warn:".yellow().bold()),
        Level::Warn => eprintln!("warn: {msg}"),
        Level::Error if tty => eprintln!("{} {msg}", "error:".red().bold()),
        Level::Error => eprintln!("error: {msg}"),
    }
}

pub fn print_info(msg: &str) {
    emit(Level::Info, msg);
}

pub fn print_warn(msg: &str) {
    emit(Level::Warn, msg);
}

pub fn print_error(msg: &str) {
    emit(Level::Error, msg);
}

pub fn print_success(msg: &str) {
    emit(Level::Success, msg);
}

/// Plain line with no prefix: prompt text and primary outputs such as the
/// resulting path, which users may script against.
pub fn print_user(msg: &str) {
    println!("{msg}");
}
