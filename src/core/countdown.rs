//! # Countdown Engine Module / Módulo del Motor de Cuenta Atrás
//!
//! This module implements the countdown to the target instant as a small
//! state machine with two states: Counting (initial) and Terminal
//! (absorbing). While counting, each tick decomposes the remaining duration
//! into zero-padded day/hour/minute/second slots; the tick where the
//! remaining duration first becomes non-positive switches to Terminal and
//! stops the engine for good.
//!
//! Este módulo implementa la cuenta atrás hasta el instante objetivo como
//! una pequeña máquina de estados con dos estados: Contando (inicial) y
//! Terminal (absorbente).

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use rust_i18n::t;

use crate::core::content::ContentStore;
use crate::core::locale::Locale;
use crate::core::page::PageModel;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// How the countdown ended: the target date is today (local calendar day),
/// or it already passed on an earlier day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    /// The target instant falls on today's date / El objetivo es hoy
    Today,
    /// The target instant lies in the past / El objetivo ya pasó
    Passed,
}

/// The remaining duration decomposed into whole days, hours within the day,
/// minutes within the hour and seconds within the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CountdownParts {
    /// Decomposes a remaining duration in milliseconds by integer floor
    /// division. 90_061_000 ms comes out as 1 day, 1 hour, 1 minute,
    /// 1 second.
    pub fn from_millis(remaining_ms: i64) -> Self {
        Self {
            days: remaining_ms / MS_PER_DAY,
            hours: (remaining_ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (remaining_ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (remaining_ms % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    /// Zero-pads a single field to two digits for the display slots.
    pub fn pad(value: i64) -> String {
        format!("{value:02}")
    }
}

/// The outcome of a single tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// Still counting; carries the decomposed remaining duration.
    Counting(CountdownParts),
    /// The target instant has been reached or passed on this tick. The
    /// engine cancels itself; this is reported exactly once.
    Terminal(Terminal),
    /// The engine already reached Terminal on an earlier tick. The display
    /// must not change.
    Stopped,
}

/// The countdown state machine. The target instant is parsed once from the
/// content document and is immutable; the engine owns only its own stopped
/// flag, so a locale switch re-binds the four captions without touching
/// engine state.
#[derive(Debug)]
pub struct CountdownEngine {
    target: DateTime<Local>,
    stopped: bool,
}

impl CountdownEngine {
    pub fn new(target: DateTime<Local>) -> Self {
        Self {
            target,
            stopped: false,
        }
    }

    /// Builds the engine from the `countdown.targetDateTime` entry of the
    /// content document. Returns `None` when the entry is absent or not a
    /// parsable instant; the page simply renders without a countdown.
    pub fn from_store(store: &ContentStore, locale: Locale) -> Option<Self> {
        let raw = store.text("countdown.targetDateTime", locale)?;
        parse_target(&raw).map(Self::new)
    }

    pub fn target(&self) -> DateTime<Local> {
        self.target
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Advances the state machine to `now`.
    ///
    /// A non-positive remaining duration (including on the very first
    /// tick) switches to Terminal and stops the engine. Every later call
    /// reports `Stopped` and must leave any display untouched.
    pub fn tick(&mut self, now: DateTime<Local>) -> Tick {
        if self.stopped {
            return Tick::Stopped;
        }

        let remaining_ms = (self.target - now).num_milliseconds();
        if remaining_ms <= 0 {
            self.stopped = true;
            let terminal = if self.target.date_naive() == now.date_naive() {
                Terminal::Today
            } else {
                Terminal::Passed
            };
            return Tick::Terminal(terminal);
        }

        Tick::Counting(CountdownParts::from_millis(remaining_ms))
    }

    /// Ticks the engine and writes the outcome into the page's countdown
    /// display: four zero-padded digit slots while counting, a localized
    /// terminal message once the target has been reached, nothing at all
    /// once stopped.
    pub fn apply(
        &mut self,
        page: &mut PageModel,
        store: &ContentStore,
        locale: Locale,
        now: DateTime<Local>,
    ) -> Tick {
        let tick = self.tick(now);
        match &tick {
            Tick::Counting(parts) => {
                page.countdown.days = CountdownParts::pad(parts.days);
                page.countdown.hours = CountdownParts::pad(parts.hours);
                page.countdown.minutes = CountdownParts::pad(parts.minutes);
                page.countdown.seconds = CountdownParts::pad(parts.seconds);
            }
            Tick::Terminal(terminal) => {
                page.countdown.terminal = Some(terminal_message(store, locale, *terminal));
            }
            Tick::Stopped => {}
        }
        tick
    }
}

/// Parses the authored target instant: RFC 3339 first, then a naive local
/// `YYYY-MM-DDTHH:MM:SS` stamp.
pub fn parse_target(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .and_then(|naive| Local.from_local_datetime(&naive).single())
}

/// The localized terminal message: the content document's
/// `countdown.labels.today` / `countdown.labels.passed` entries when
/// present, else the catalog fallback.
pub fn terminal_message(store: &ContentStore, locale: Locale, terminal: Terminal) -> String {
    let (path, fallback_key) = match terminal {
        Terminal::Today => ("countdown.labels.today", "countdown_today"),
        Terminal::Passed => ("countdown.labels.passed", "countdown_passed"),
    };

    store
        .text(path, locale)
        .unwrap_or_else(|| t!(fallback_key, locale = locale.as_str()).to_string())
}
