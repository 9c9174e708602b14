//! End-to-end `new` flow with a single workspace root and no type-ahead.

mod common;

use std::fs;
use std::path::MAIN_SEPARATOR;

use common::{RecordingHook, ScriptedUi};
use filesmith::{Config, DirectoryCache, Outcome, Workflow};

fn config_with_root(root: &std::path::Path) -> Config {
    Config {
        roots: vec![root.to_path_buf()],
        ..Default::default()
    }
}

#[test]
fn typed_relative_path_creates_file_and_ancestors_under_the_root() {
    let ws = tempfile::tempdir().unwrap();
    let cfg = config_with_root(ws.path());
    let cache = DirectoryCache::new();

    let mut ui = ScriptedUi::new().type_text("notes/todo.txt");
    let mut hook = RecordingHook::default();
    let outcome = Workflow::new(&cfg, &cache)
        .new_path(None, true, &mut ui, &mut hook)
        .unwrap();

    let expected = ws.path().join("notes").join("todo.txt");
    match outcome {
        Outcome::Done(entry) => assert_eq!(entry.absolute_path, expected),
        other => panic!("expected Done, got {other:?}"),
    }
    assert!(expected.is_file());
    assert!(ws.path().join("notes").is_dir());

    // Single candidate root: the single-choice prompt is never shown.
    assert!(ui.seen_picks.is_empty());
    // The free-text prompt was pre-seeded with the root plus a separator.
    assert_eq!(
        ui.seen_initials,
        vec![format!("{}{}", ws.path().display(), MAIN_SEPARATOR)]
    );
    assert_eq!(ui.seen_prompts, vec!["File Name"]);
    // Post-operation hook was notified with the resulting path.
    assert_eq!(hook.completed, vec![expected]);
}

#[test]
fn trailing_separator_creates_a_directory() {
    let ws = tempfile::tempdir().unwrap();
    let cfg = config_with_root(ws.path());
    let cache = DirectoryCache::new();

    let mut ui = ScriptedUi::new().type_text(&format!("assets{MAIN_SEPARATOR}icons{MAIN_SEPARATOR}"));
    let mut hook = RecordingHook::default();
    let outcome = Workflow::new(&cfg, &cache)
        .new_path(None, true, &mut ui, &mut hook)
        .unwrap();

    let expected = ws.path().join("assets").join("icons");
    assert!(matches!(outcome, Outcome::Done(ref e) if e.is_directory));
    assert!(expected.is_dir());
}

#[test]
fn new_relative_to_the_reference_file_uses_its_parent() {
    let ws = tempfile::tempdir().unwrap();
    let src_dir = ws.path().join("src");
    fs::create_dir(&src_dir).unwrap();
    let reference = src_dir.join("main.rs");
    fs::write(&reference, b"fn main() {}").unwrap();

    let cfg = Config::default();
    let cache = DirectoryCache::new();

    let mut ui = ScriptedUi::new().type_text("sibling.rs");
    let mut hook = RecordingHook::default();
    let outcome = Workflow::new(&cfg, &cache)
        .new_path(Some(&reference), false, &mut ui, &mut hook)
        .unwrap();

    assert!(matches!(outcome, Outcome::Done(_)));
    assert!(src_dir.join("sibling.rs").is_file());
}

#[test]
fn missing_reference_path_is_surfaced_not_retried() {
    let cfg = Config::default();
    let cache = DirectoryCache::new();
    let mut ui = ScriptedUi::new();
    let mut hook = RecordingHook::default();

    let err = Workflow::new(&cfg, &cache)
        .new_path(None, false, &mut ui, &mut hook)
        .unwrap_err();
    assert_eq!(err.code(), "no_reference_path");
    assert!(hook.completed.is_empty());
}

#[test]
fn cancelling_the_text_prompt_leaves_the_filesystem_untouched() {
    let ws = tempfile::tempdir().unwrap();
    let cfg = config_with_root(ws.path());
    let cache = DirectoryCache::new();

    let mut ui = ScriptedUi::new().cancel_text();
    let mut hook = RecordingHook::default();
    let outcome = Workflow::new(&cfg, &cache)
        .new_path(None, true, &mut ui, &mut hook)
        .unwrap();

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(fs::read_dir(ws.path()).unwrap().count(), 0);
    assert!(hook.completed.is_empty());
}
