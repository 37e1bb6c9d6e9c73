//! # RSVP Form Module / Módulo del Formulario RSVP
//!
//! This module manages the RSVP form: conditional visibility of the
//! attendance-dependent groups, per-field and whole-form validation, payload
//! serialization and the submission outcome state. Field state is explicit
//! (`FieldState`), decoupled from the rendering layer.
//!
//! Este módulo gestiona el formulario RSVP: visibilidad condicional de los
//! grupos dependientes de la asistencia, validación por campo y de todo el
//! formulario, serialización del envío y el estado del resultado.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_i18n::t;

use crate::core::content::ContentStore;
use crate::core::locale::Locale;

/// The fixed form identifier the receiving service keys on.
pub const FORM_NAME: &str = "rsvp";

/// local-part@domain.tld: one or more non-space/non-@ characters, an `@`,
/// one or more, a literal dot, one or more.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// The form's fields, in submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Email,
    Attendance,
    MainCourse,
    Allergies,
}

/// Every field, in submission order.
pub const ALL_FIELDS: [FieldId; 5] = [
    FieldId::Name,
    FieldId::Email,
    FieldId::Attendance,
    FieldId::MainCourse,
    FieldId::Allergies,
];

impl FieldId {
    /// The wire name of the field in the submitted payload.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Attendance => "attendance",
            Self::MainCourse => "mainCourse",
            Self::Allergies => "allergies",
        }
    }
}

/// The attendance choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attendance {
    Yes,
    No,
}

impl Attendance {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            _ => None,
        }
    }
}

/// Explicit per-field state: the current value, whether the user has
/// touched/blurred the field, the current error message (empty = valid) and
/// the initialized marker that keeps re-binding from overwriting
/// user-entered data.
///
/// Invariant: a non-empty `error` is what marks the field invalid; clearing
/// the error clears the invalid state.
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    pub value: String,
    pub touched: bool,
    pub error: String,
    pub required: bool,
    pub initialized: bool,
}

impl FieldState {
    fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    /// A field is invalid exactly while it carries an error message.
    pub fn is_invalid(&self) -> bool {
        !self.error.is_empty()
    }
}

/// The submission outcome surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// A user-visible form message. `scroll_into_view` asks the renderer to
/// bring the message on screen once.
#[derive(Debug, Clone)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
    pub scroll_into_view: bool,
}

/// The RSVP form controller state.
#[derive(Debug)]
pub struct RsvpForm {
    name: FieldState,
    email: FieldState,
    attendance: FieldState,
    main_course: FieldState,
    allergies: FieldState,
    /// Whether the attendance-dependent field groups are visible.
    pub show_attendance_groups: bool,
    /// A submission is in flight; the submit control is disabled.
    pub submitting: bool,
    /// The currently displayed outcome message, if any.
    pub message: Option<FormMessage>,
}

impl RsvpForm {
    pub fn new() -> Self {
        Self {
            name: FieldState::required(),
            email: FieldState::required(),
            attendance: FieldState::required(),
            main_course: FieldState::default(),
            allergies: FieldState::default(),
            show_attendance_groups: false,
            submitting: false,
            message: None,
        }
    }

    pub fn field(&self, id: FieldId) -> &FieldState {
        match id {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Attendance => &self.attendance,
            FieldId::MainCourse => &self.main_course,
            FieldId::Allergies => &self.allergies,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FieldState {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Attendance => &mut self.attendance,
            FieldId::MainCourse => &mut self.main_course,
            FieldId::Allergies => &mut self.allergies,
        }
    }

    /// The current attendance choice, if one has been made.
    pub fn attendance(&self) -> Option<Attendance> {
        Attendance::from_value(&self.attendance.value)
    }

    /// Applies an attendance choice: toggles the dependent groups, makes the
    /// main course required only when attending, and clears the main-course
    /// and allergy values when not attending (they must not be submitted).
    pub fn set_attendance(&mut self, choice: Attendance) {
        self.attendance.value = choice.as_str().to_string();
        self.attendance.error.clear();

        match choice {
            Attendance::Yes => {
                self.show_attendance_groups = true;
                self.main_course.required = true;
            }
            Attendance::No => {
                self.show_attendance_groups = false;
                self.main_course.required = false;
                self.main_course.value.clear();
                self.allergies.value.clear();
            }
        }
    }

    /// Records user input: updates the value, marks the field initialized so
    /// re-binding leaves it alone, and clears any error (the invalid state
    /// lasts only until the next input event).
    pub fn input(&mut self, id: FieldId, value: &str) {
        let field = self.field_mut(id);
        field.value = value.to_string();
        field.initialized = true;
        field.error.clear();
    }

    /// Runs field validation on blur. Returns `true` when the field is
    /// valid.
    pub fn blur(&mut self, id: FieldId, store: &ContentStore, locale: Locale) -> bool {
        self.field_mut(id).touched = true;
        self.validate_field(id, store, locale)
    }

    /// Validates one field: required fields must be non-blank after
    /// trimming; a non-blank email must additionally match the
    /// local-part@domain.tld pattern.
    pub fn validate_field(&mut self, id: FieldId, store: &ContentStore, locale: Locale) -> bool {
        let value = self.field(id).value.clone();

        if self.field(id).required && value.trim().is_empty() {
            self.field_mut(id).error = validation_message(store, locale, Rule::Required);
            return false;
        }

        if id == FieldId::Email && !value.is_empty() && !EMAIL_PATTERN.is_match(&value) {
            self.field_mut(id).error = validation_message(store, locale, Rule::Email);
            return false;
        }

        self.field_mut(id).error.clear();
        true
    }

    /// Validates the whole form before submission: every required field,
    /// the email format, and, when attending, the main course even though
    /// it is not marked required while hidden.
    pub fn validate_all(&mut self, store: &ContentStore, locale: Locale) -> bool {
        let mut valid = true;

        for id in ALL_FIELDS {
            if self.field(id).required && !self.validate_field(id, store, locale) {
                valid = false;
            }
        }

        if !self.email.value.is_empty() && !self.validate_field(FieldId::Email, store, locale) {
            valid = false;
        }

        if self.attendance() == Some(Attendance::Yes) && self.main_course.value.trim().is_empty() {
            self.main_course.error = validation_message(store, locale, Rule::Required);
            valid = false;
        }

        valid
    }

    /// Serializes the form as ordered key/value pairs ready for URL-encoded
    /// submission. The fixed form identifier comes first; empty-valued
    /// fields are omitted; when not attending, the main-course and allergy
    /// fields are excluded entirely even if they hold stale values.
    pub fn serialize(&self) -> Vec<(String, String)> {
        let not_attending = self.attendance() == Some(Attendance::No);

        let mut pairs = vec![("form-name".to_string(), FORM_NAME.to_string())];
        for id in ALL_FIELDS {
            if not_attending && matches!(id, FieldId::MainCourse | FieldId::Allergies) {
                continue;
            }
            let value = &self.field(id).value;
            if value.is_empty() {
                continue;
            }
            pairs.push((id.wire_name().to_string(), value.clone()));
        }
        pairs
    }

    /// Records a successful submission: localized success message flagged
    /// for scroll-into-view, full field reset (values, errors, touched and
    /// initialized flags), dependent groups back to the not-attending
    /// layout.
    pub fn succeed(&mut self, store: &ContentStore, locale: Locale) {
        self.message = Some(FormMessage {
            kind: MessageKind::Success,
            text: store
                .text("rsvp.success", locale)
                .unwrap_or_else(|| t!("rsvp_success", locale = locale.as_str()).to_string()),
            scroll_into_view: true,
        });
        self.reset();
    }

    /// Records a failed submission: the localized error message with the
    /// raw diagnostic appended. The diagnostic is not localized; it exists
    /// for the retrying user to report.
    pub fn fail(&mut self, store: &ContentStore, locale: Locale, detail: &str) {
        let base = store
            .text("rsvp.error", locale)
            .unwrap_or_else(|| t!("rsvp_error", locale = locale.as_str()).to_string());
        self.message = Some(FormMessage {
            kind: MessageKind::Error,
            text: format!("{base} (Error: {detail})"),
            scroll_into_view: false,
        });
    }

    /// Clears every field back to its pristine state. The outcome message is
    /// kept; it describes the submission that caused the reset.
    pub fn reset(&mut self) {
        let message = self.message.take();
        *self = Self::new();
        self.message = message;
    }
}

impl Default for RsvpForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Which validation rule produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Email,
}

/// The localized validation message for a rule: the content document's
/// `rsvp.validation.*` entry when present, else the catalog fallback.
pub fn validation_message(store: &ContentStore, locale: Locale, rule: Rule) -> String {
    let (path, fallback_key) = match rule {
        Rule::Required => ("rsvp.validation.required", "validation_required"),
        Rule::Email => ("rsvp.validation.email", "validation_email"),
    };

    store
        .text(path, locale)
        .unwrap_or_else(|| t!(fallback_key, locale = locale.as_str()).to_string())
}
