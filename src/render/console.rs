//! # Console Rendering Module / Módulo de Renderizado en Consola
//!
//! Colored console views of the running page, used by the CLI commands: a
//! one-line countdown display and the form outcome/validation messages.
//!
//! Vistas de consola en color de la página en ejecución, usadas por los
//! comandos de la CLI.

use colored::*;

use crate::core::form::{ALL_FIELDS, FormMessage, MessageKind, RsvpForm};
use crate::core::page::PageModel;

/// Prints the countdown state on a single line: either the four digit slots
/// with their localized captions, or the terminal message.
pub fn print_countdown_line(page: &PageModel) {
    if let Some(message) = &page.countdown.terminal {
        println!("\r{}", message.magenta().bold());
        return;
    }

    let caption = |key: &str| {
        page.node(key)
            .map(|n| n.text.clone())
            .unwrap_or_default()
    };
    let display = &page.countdown;

    print!(
        "\r{} {}  {} {}  {} {}  {} {}   ",
        display.days.cyan().bold(),
        caption("countdown-label-days"),
        display.hours.cyan().bold(),
        caption("countdown-label-hours"),
        display.minutes.cyan().bold(),
        caption("countdown-label-minutes"),
        display.seconds.cyan().bold(),
        caption("countdown-label-seconds"),
    );
    use std::io::Write;
    let _ = std::io::stdout().flush();
}

/// Prints a submission outcome message in its severity color.
pub fn print_form_message(message: &FormMessage) {
    match message.kind {
        MessageKind::Success => println!("\n{}", message.text.green().bold()),
        MessageKind::Error => eprintln!("\n{}", message.text.red().bold()),
    }
}

/// Prints every current field error, one per line, prefixed by the field's
/// wire name.
pub fn print_field_errors(form: &RsvpForm) {
    for id in ALL_FIELDS {
        let field = form.field(id);
        if field.is_invalid() {
            eprintln!("  {} {}", format!("{}:", id.wire_name()).yellow(), field.error);
        }
    }
}
