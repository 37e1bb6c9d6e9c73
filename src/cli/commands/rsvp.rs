//! # RSVP Command / Comando RSVP
//!
//! Interactive RSVP entry: prompts for each field in the page's language,
//! runs the form controller's validation, and submits the URL-encoded
//! payload to the given endpoint.

use anyhow::{Context, Result, bail};
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::path::PathBuf;

use crate::cli::commands::start_app;
use crate::core::app::App;
use crate::core::form::{Attendance, FieldId};
use crate::core::page::NodeKind;
use crate::infra::http::SiteClient;
use crate::infra::t;
use crate::render::console;

/// The localized prompt for a form field: the content document's label when
/// present, else the catalog fallback.
fn prompt_label(app: &App, path: &str, fallback_key: &str) -> String {
    app.store
        .text(path, app.locale)
        .unwrap_or_else(|| t!(fallback_key, locale = app.locale.as_str()).to_string())
}

pub async fn execute(
    content: PathBuf,
    endpoint: String,
    locale: Option<String>,
    prefs: PathBuf,
    language: &str,
) -> Result<()> {
    let mut app = start_app(&content, &prefs, locale.as_deref());
    let theme = ColorfulTheme::default();

    let name: String = Input::with_theme(&theme)
        .with_prompt(prompt_label(&app, "rsvp.form.nameLabel", "prompt_name"))
        .allow_empty(true)
        .interact_text()
        .context(t!("prompt_failed", locale = language).to_string())?;
    app.form_input(FieldId::Name, &name);

    let email: String = Input::with_theme(&theme)
        .with_prompt(prompt_label(&app, "rsvp.form.emailLabel", "prompt_email"))
        .allow_empty(true)
        .interact_text()
        .context(t!("prompt_failed", locale = language).to_string())?;
    app.form_input(FieldId::Email, &email);

    let choices = [
        (
            Attendance::Yes,
            prompt_label(&app, "rsvp.form.attendanceYes", "prompt_attendance_yes"),
        ),
        (
            Attendance::No,
            prompt_label(&app, "rsvp.form.attendanceNo", "prompt_attendance_no"),
        ),
    ];
    let picked = Select::with_theme(&theme)
        .with_prompt(prompt_label(&app, "rsvp.form.attendanceLabel", "prompt_attendance"))
        .items(&choices.iter().map(|c| c.1.clone()).collect::<Vec<_>>())
        .default(0)
        .interact()
        .context(t!("prompt_failed", locale = language).to_string())?;
    app.set_attendance(choices[picked].0);

    if app.form.attendance() == Some(Attendance::Yes) {
        let courses: Vec<(String, String)> = app
            .page
            .nodes()
            .iter()
            .filter(|n| n.kind == NodeKind::SelectOption)
            .map(|n| {
                (
                    n.key.trim_start_matches("option-course-").to_string(),
                    n.text.clone(),
                )
            })
            .collect();
        let picked = Select::with_theme(&theme)
            .with_prompt(prompt_label(&app, "rsvp.form.mainCourseLabel", "prompt_main_course"))
            .items(&courses.iter().map(|c| c.1.clone()).collect::<Vec<_>>())
            .default(0)
            .interact()
            .context(t!("prompt_failed", locale = language).to_string())?;
        app.form_input(FieldId::MainCourse, &courses[picked].0);

        let allergies: String = Input::with_theme(&theme)
            .with_prompt(prompt_label(&app, "rsvp.form.allergiesLabel", "prompt_allergies"))
            .allow_empty(true)
            .interact_text()
            .context(t!("prompt_failed", locale = language).to_string())?;
        app.form_input(FieldId::Allergies, &allergies);
    }

    let client = SiteClient::new(&endpoint)?;
    let sent = app.submit_rsvp(&client).await;

    if let Some(message) = &app.form.message {
        console::print_form_message(message);
    } else if !sent {
        console::print_field_errors(&app.form);
    }

    if !sent {
        bail!(t!("rsvp_not_sent", locale = language).to_string());
    }
    Ok(())
}
