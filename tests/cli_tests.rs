//! # CLI Integration Tests / Tests de Integración de la CLI
//!
//! Runs the built binary end to end: scaffolding a content document with
//! `init --non-interactive`, rendering the HTML snapshot from it, locale
//! overrides and argument errors.
//!
//! Ejecuta el binario compilado de extremo a extremo: generación del
//! documento de contenido con `init --non-interactive`, renderizado de la
//! instantánea HTML, anulación del idioma y errores de argumentos.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn enlace() -> Command {
    Command::cargo_bin("enlace").unwrap()
}

/// Scaffolds a starter content document into the given directory and
/// returns its path.
fn scaffold_content(dir: &TempDir) -> std::path::PathBuf {
    let content = dir.path().join("data").join("content.json");
    enlace()
        .arg("--lang")
        .arg("es")
        .arg("init")
        .arg("--non-interactive")
        .arg("--out")
        .arg(&content)
        .assert()
        .success();
    content
}

#[test]
fn test_help_lists_every_subcommand() {
    enlace()
        .arg("--lang")
        .arg("en")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("countdown"))
        .stdout(predicate::str::contains("rsvp"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_init_non_interactive_writes_starter_document() {
    let dir = TempDir::new().unwrap();
    let content = scaffold_content(&dir);

    assert!(content.exists());
    let raw = fs::read_to_string(&content).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).expect("valid JSON");
    assert_eq!(doc["hero"]["names"], "Ana & Bence");
    assert_eq!(doc["countdown"]["targetDateTime"], "2026-06-20T17:00:00");
    // Values the author still has to fill in are sentinels.
    assert!(doc["sections"]["venue"]["mapUrl"]
        .as_str()
        .unwrap()
        .starts_with("TODO:"));
}

#[test]
fn test_render_produces_bound_html_snapshot() {
    let dir = TempDir::new().unwrap();
    let content = scaffold_content(&dir);
    let out = dir.path().join("page.html");
    let prefs = dir.path().join("prefs.toml");

    enlace()
        .arg("--lang")
        .arg("en")
        .arg("render")
        .arg("--content")
        .arg(&content)
        .arg("--out")
        .arg(&out)
        .arg("--prefs")
        .arg(&prefs)
        .arg("--locale")
        .arg("en")
        .assert()
        .success()
        .stdout(predicate::str::contains("✔"));

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains(r#"<html lang="en">"#));
    assert!(html.contains("We're getting married!"));
    assert!(html.contains(r#"name="form-name" value="rsvp""#));
    // The starter map URL is a sentinel, so no frame is embedded.
    assert!(!html.contains("<iframe"));
}

#[test]
fn test_render_locale_override_persists_for_the_next_run() {
    let dir = TempDir::new().unwrap();
    let content = scaffold_content(&dir);
    let prefs = dir.path().join("prefs.toml");

    let first = dir.path().join("first.html");
    enlace()
        .arg("render")
        .arg("--content")
        .arg(&content)
        .arg("--out")
        .arg(&first)
        .arg("--prefs")
        .arg(&prefs)
        .arg("--locale")
        .arg("hu")
        .assert()
        .success();
    assert!(fs::read_to_string(&first).unwrap().contains(r#"<html lang="hu">"#));

    // No override this time: the persisted preference applies.
    let second = dir.path().join("second.html");
    enlace()
        .arg("render")
        .arg("--content")
        .arg(&content)
        .arg("--out")
        .arg(&second)
        .arg("--prefs")
        .arg(&prefs)
        .assert()
        .success();
    assert!(fs::read_to_string(&second).unwrap().contains(r#"<html lang="hu">"#));
}

#[test]
fn test_render_invalid_locale_override_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let content = scaffold_content(&dir);
    let out = dir.path().join("page.html");
    let prefs = dir.path().join("prefs.toml");

    enlace()
        .arg("--lang")
        .arg("es")
        .arg("render")
        .arg("--content")
        .arg(&content)
        .arg("--out")
        .arg(&out)
        .arg("--prefs")
        .arg(&prefs)
        .arg("--locale")
        .arg("klingon")
        .env("LANG", "es_ES.UTF-8")
        .assert()
        .success();

    // Falls back to the resolved startup locale instead of failing.
    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("<html lang="));
}

#[test]
fn test_render_missing_content_degrades_to_defaults() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("page.html");
    let prefs = dir.path().join("prefs.toml");

    enlace()
        .arg("render")
        .arg("--content")
        .arg(dir.path().join("nope.json"))
        .arg("--out")
        .arg(&out)
        .arg("--prefs")
        .arg(&prefs)
        .assert()
        .success();

    // The snapshot still carries the page skeleton.
    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains(r#"id="rsvp-form""#));
}

#[test]
fn test_rsvp_requires_an_endpoint() {
    enlace()
        .arg("rsvp")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--endpoint"));
}
