//! End-to-end remove flow with its confirmation gate.

mod common;

use std::fs;

use common::ScriptedUi;
use filesmith::{Config, DirectoryCache, Outcome, Workflow};

#[test]
fn confirmed_remove_deletes_the_file() {
    let ws = tempfile::tempdir().unwrap();
    let doomed = ws.path().join("old.log");
    fs::write(&doomed, b"bye").unwrap();

    let cfg = Config::default();
    let cache = DirectoryCache::new();

    let mut ui = ScriptedUi::new().answer_confirm(true);
    let outcome = Workflow::new(&cfg, &cache)
        .remove(Some(&doomed), &mut ui)
        .unwrap();

    assert!(matches!(outcome, Outcome::Done(_)));
    assert!(!doomed.exists());
    assert!(ui.seen_confirms[0].contains("old.log"));
}

#[test]
fn declined_remove_is_a_cancellation() {
    let ws = tempfile::tempdir().unwrap();
    let survivor = ws.path().join("keep.txt");
    fs::write(&survivor, b"still here").unwrap();

    let cfg = Config::default();
    let cache = DirectoryCache::new();

    let mut ui = ScriptedUi::new().answer_confirm(false);
    let outcome = Workflow::new(&cfg, &cache)
        .remove(Some(&survivor), &mut ui)
        .unwrap();

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(fs::read(&survivor).unwrap(), b"still here");
}

#[test]
fn removing_a_directory_is_recursive() {
    let ws = tempfile::tempdir().unwrap();
    let dir = ws.path().join("scratch");
    fs::create_dir_all(dir.join("deep")).unwrap();
    fs::write(dir.join("deep").join("f.txt"), b"x").unwrap();

    let cfg = Config::default();
    let cache = DirectoryCache::new();

    let mut ui = ScriptedUi::new().answer_confirm(true);
    let outcome = Workflow::new(&cfg, &cache)
        .remove(Some(&dir), &mut ui)
        .unwrap();

    assert!(matches!(outcome, Outcome::Done(_)));
    assert!(!dir.exists());
}

#[test]
fn removing_an_absent_path_is_not_found() {
    let ws = tempfile::tempdir().unwrap();
    let ghost = ws.path().join("ghost.txt");

    let cfg = Config::default();
    let cache = DirectoryCache::new();

    let mut ui = ScriptedUi::new().answer_confirm(true);
    let err = Workflow::new(&cfg, &cache)
        .remove(Some(&ghost), &mut ui)
        .unwrap_err();
    assert_eq!(err.code(), "not_found");
}
