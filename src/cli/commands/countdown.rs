//! # Countdown Command / Comando Countdown
//!
//! Drives the countdown engine live in the console at one-second ticks
//! until the target instant is reached. The engine cancels itself on the
//! terminal tick; this loop just mirrors its state.

use anyhow::Result;
use chrono::Local;
use colored::*;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::commands::start_app;
use crate::core::countdown::Tick;
use crate::infra::t;
use crate::render::console;

pub async fn execute(
    content: PathBuf,
    locale: Option<String>,
    prefs: PathBuf,
    language: &str,
) -> Result<()> {
    let mut app = start_app(&content, &prefs, locale.as_deref());

    if app.countdown.is_none() {
        eprintln!("{}", t!("countdown_missing", locale = language).yellow());
        return Ok(());
    }

    let mut interval = tokio::time::interval(Duration::from_secs(1));
    loop {
        interval.tick().await;

        match app.tick_countdown(Local::now()) {
            Some(Tick::Counting(_)) => console::print_countdown_line(&app.page),
            Some(Tick::Terminal(_)) => {
                console::print_countdown_line(&app.page);
                break;
            }
            Some(Tick::Stopped) | None => break,
        }
    }
    Ok(())
}
