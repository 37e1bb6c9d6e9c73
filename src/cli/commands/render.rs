//! # Render Command / Comando Render
//!
//! Loads a content document, builds and binds the page at the resolved
//! locale, runs one countdown tick so the digit slots are populated, and
//! writes a standalone HTML snapshot.

use anyhow::{Context, Result};
use chrono::Local;
use colored::*;
use std::fs;
use std::path::PathBuf;

use crate::cli::commands::start_app;
use crate::infra::t;
use crate::render;

pub fn execute(
    content: PathBuf,
    out: PathBuf,
    locale: Option<String>,
    prefs: PathBuf,
    language: &str,
) -> Result<()> {
    let mut app = start_app(&content, &prefs, locale.as_deref());

    // One tick so the snapshot carries digits (or the terminal message).
    app.tick_countdown(Local::now());

    let html = render::page_html(&app.page, &app.form);

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&out, html).with_context(|| format!("failed to write {}", out.display()))?;

    println!(
        "{} {}",
        "✔".green(),
        t!(
            "render_success",
            locale = language,
            path = out.display().to_string(),
            lang = app.locale.as_str()
        )
        .bold()
    );
    Ok(())
}
