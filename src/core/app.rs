//! # Application Context Module / Módulo del Contexto de Aplicación
//!
//! This module ties the pieces together in one explicit context object:
//! content store, active locale, page registry, countdown engine, form
//! controller and preference store. Everything mutable lives here instead
//! of in module-level globals.
//!
//! Este módulo une las piezas en un único objeto de contexto explícito: el
//! almacén de contenido, el idioma activo, el registro de página, el motor
//! de cuenta atrás, el controlador del formulario y el almacén de
//! preferencias. Todo lo mutable vive aquí, no en variables globales.

use chrono::{DateTime, Local};
use rust_i18n::t;

use crate::core::binder;
use crate::core::content::ContentStore;
use crate::core::countdown::{CountdownEngine, Tick};
use crate::core::form::{Attendance, FieldId, RsvpForm};
use crate::core::locale::{self, Locale};
use crate::core::page::PageModel;
use crate::core::sections;
use crate::infra::http::SiteClient;
use crate::infra::prefs::PrefStore;

/// One running page: everything mutable lives here and is only mutated on
/// the main sequential event stream.
pub struct App {
    pub store: ContentStore,
    pub locale: Locale,
    pub page: PageModel,
    pub countdown: Option<CountdownEngine>,
    pub form: RsvpForm,
    prefs: Box<dyn PrefStore>,
}

impl App {
    /// Startup sequence: resolve the active locale (persisted preference →
    /// language hint → default), build the authored page, expand the dynamic
    /// sections, bind everything, and set up the countdown. The content
    /// store is passed in already loaded (or empty, on load failure).
    pub fn start(store: ContentStore, mut prefs: Box<dyn PrefStore>, hint: Option<&str>) -> Self {
        let locale = locale::resolve_initial(prefs.as_mut(), hint);

        let mut page = PageModel::standard();
        sections::render_dynamic(&mut page, &store, locale);
        let countdown = CountdownEngine::from_store(&store, locale);

        Self {
            store,
            locale,
            page,
            countdown,
            form: RsvpForm::new(),
            prefs,
        }
    }

    /// Switches the active locale. Invalid codes are a no-op. A valid switch
    /// persists the choice and re-binds all content, countdown captions and
    /// form placeholders; it does not re-expand the dynamic sections (lists
    /// are structural, not locale-dependent).
    pub fn set_locale(&mut self, code: &str) {
        let Some(locale) = Locale::from_code(code) else {
            return;
        };

        self.locale = locale;
        self.prefs.set(locale::PREF_KEY, locale.as_str());
        binder::bind_all(&mut self.page, &self.store, locale);
    }

    /// Re-runs the binder against the current locale.
    pub fn bind(&mut self) {
        binder::bind_all(&mut self.page, &self.store, self.locale);
    }

    /// Advances the countdown engine to `now` and writes its display slots.
    /// Returns `None` when the content document configured no countdown.
    pub fn tick_countdown(&mut self, now: DateTime<Local>) -> Option<Tick> {
        let engine = self.countdown.as_mut()?;
        Some(engine.apply(&mut self.page, &self.store, self.locale, now))
    }

    /// Records user input on a form field, mirroring the value into the
    /// field's page node so re-binding keeps its hands off it.
    pub fn form_input(&mut self, id: FieldId, value: &str) {
        self.form.input(id, value);

        if let Some(node) = field_node_key(id).and_then(|key| self.page.node_mut(key)) {
            node.text = value.to_string();
            node.initialized = true;
        }
    }

    /// Applies an attendance choice (conditional visibility and clearing).
    pub fn set_attendance(&mut self, choice: Attendance) {
        self.form.set_attendance(choice);
    }

    /// Validates and submits the RSVP form.
    ///
    /// Submission is blocked while another one is in flight and unless every
    /// applicable validation passes. While in flight the submit caption
    /// shows the localized "sending" string; the caption is restored
    /// afterwards regardless of outcome. Returns `true` on a successful
    /// submission.
    pub async fn submit_rsvp(&mut self, client: &SiteClient) -> bool {
        if self.form.submitting {
            return false;
        }
        if !self.form.validate_all(&self.store, self.locale) {
            return false;
        }

        self.form.submitting = true;
        self.form.message = None;
        let sending = self
            .store
            .text("rsvp.sending", self.locale)
            .unwrap_or_else(|| t!("rsvp_sending", locale = self.locale.as_str()).to_string());
        self.set_submit_caption(&sending);

        let result = client.submit_rsvp(&self.form.serialize()).await;

        // Restored on every path before the outcome is inspected.
        self.form.submitting = false;
        let default_caption = self
            .store
            .text("rsvp.submit", self.locale)
            .unwrap_or_else(|| t!("rsvp_submit", locale = self.locale.as_str()).to_string());
        self.set_submit_caption(&default_caption);

        match result {
            Ok(()) => {
                self.form.succeed(&self.store, self.locale);
                self.clear_input_nodes();
                true
            }
            Err(e) => {
                self.form.fail(&self.store, self.locale, &e.to_string());
                false
            }
        }
    }

    fn set_submit_caption(&mut self, caption: &str) {
        if let Some(node) = self.page.node_mut("btn-submit") {
            node.text = caption.to_string();
        }
    }

    /// After a successful submission the input nodes go back to their
    /// pristine state: values cleared and initialized flags dropped, so the
    /// next bind may fill defaults again.
    fn clear_input_nodes(&mut self) {
        for id in crate::core::form::ALL_FIELDS {
            if let Some(node) = field_node_key(id).and_then(|key| self.page.node_mut(key)) {
                node.text.clear();
                node.initialized = false;
            }
        }
    }
}

/// The page node mirroring a form field's free-text value, when one exists.
fn field_node_key(id: FieldId) -> Option<&'static str> {
    match id {
        FieldId::Name => Some("input-name"),
        FieldId::Email => Some("input-email"),
        FieldId::Allergies => Some("textarea-allergies"),
        FieldId::Attendance | FieldId::MainCourse => None,
    }
}
