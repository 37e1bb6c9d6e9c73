//! # HTML Snapshot Module / Módulo de Instantánea HTML
//!
//! Renders the bound page registry to a standalone HTML document. Nodes are
//! emitted in registry order within their sections; maud escapes all bound
//! text, so untrusted content cannot break the markup. The map frame is the
//! one deliberate exception where an authored URL is embedded directly (the
//! content document is authored by a trusted party).

use maud::{DOCTYPE, Markup, html};

use crate::core::form::{FieldId, MessageKind, RsvpForm};
use crate::core::locale::ALL_LOCALES;
use crate::core::page::{BoundNode, NodeKind, PageModel, Section};

/// Renders the whole page to an HTML string.
pub fn page_html(page: &PageModel, form: &RsvpForm) -> String {
    html! {
        (DOCTYPE)
        html lang=(page.active_locale.as_str()) {
            head {
                meta charset="utf-8";
                title { (page.title) }
                meta name="description" content=(page.meta_description);
            }
            body {
                (lang_switcher(page))
                (hero(page))
                (countdown(page))
                (timeline(page))
                (venue(page))
                (accommodation(page))
                (rsvp(page, form))
            }
        }
    }
    .into_string()
}

/// One registry node as markup. The kind decides the element; a link wraps
/// the text in an anchor; a frame becomes a lazily-loaded iframe.
fn node(n: &BoundNode) -> Markup {
    match n.kind {
        NodeKind::Text => html! {
            @if let Some(href) = &n.link {
                span id=(n.key) class=(n.class) {
                    a href=(href) target="_blank" rel="noopener noreferrer" { (n.text) }
                }
            } @else {
                span id=(n.key) class=(n.class) { (n.text) }
            }
        },
        NodeKind::Frame => html! {
            iframe
                id=(n.key)
                class=(n.class)
                src=(n.link.as_deref().unwrap_or(""))
                title=(n.text)
                loading="lazy"
                allowfullscreen {}
        },
        // Input kinds are rendered inside the form with their field state.
        NodeKind::TextInput | NodeKind::EmailInput | NodeKind::TextArea
        | NodeKind::SelectOption => html! {},
    }
}

fn node_by_key(page: &PageModel, key: &str) -> Markup {
    match page.node(key) {
        Some(n) => node(n),
        None => html! {},
    }
}

fn lang_switcher(page: &PageModel) -> Markup {
    html! {
        nav class="lang-switcher" {
            @for locale in ALL_LOCALES {
                button.lang-btn.active[locale == page.active_locale]
                    data-lang=(locale.as_str()) {
                    (locale.display_name())
                }
            }
        }
    }
}

fn hero(page: &PageModel) -> Markup {
    html! {
        header class="hero" {
            (node_by_key(page, "hero-names"))
            (node_by_key(page, "hero-date"))
            (node_by_key(page, "hero-tagline"))
        }
    }
}

fn countdown(page: &PageModel) -> Markup {
    let display = &page.countdown;
    html! {
        section id="countdown" {
            (node_by_key(page, "countdown-title"))
            div id="countdown-display" {
                @if let Some(message) = &display.terminal {
                    p class="countdown-terminal" { (message) }
                } @else {
                    @for (slot, value) in [
                        ("days", &display.days),
                        ("hours", &display.hours),
                        ("minutes", &display.minutes),
                        ("seconds", &display.seconds),
                    ] {
                        div class="countdown-unit" {
                            span id=(slot) class="countdown-value" { (value) }
                            (node_by_key(page, &format!("countdown-label-{slot}")))
                        }
                    }
                }
            }
        }
    }
}

fn timeline(page: &PageModel) -> Markup {
    html! {
        section id="the-day" {
            (node_by_key(page, "theday-title"))
            div id="timeline" {
                @for n in page.section_nodes(Section::Timeline) {
                    (node(n))
                }
            }
        }
    }
}

fn venue(page: &PageModel) -> Markup {
    html! {
        section id="venue" {
            (node_by_key(page, "venue-title"))
            (node_by_key(page, "venue-name"))
            (node_by_key(page, "venue-address"))
            @for n in page.section_nodes(Section::Map) {
                (node(n))
            }
        }
    }
}

fn accommodation(page: &PageModel) -> Markup {
    html! {
        section id="accommodation" {
            (node_by_key(page, "accommodation-title"))
            div id="hotels-list" {
                @for n in page.section_nodes(Section::Hotels) {
                    (node(n))
                }
            }
        }
    }
}

fn text_input(page: &PageModel, form: &RsvpForm, node_key: &str, id: FieldId) -> Markup {
    let field = form.field(id);
    let (value, placeholder) = page
        .node(node_key)
        .map(|n| (n.text.clone(), n.placeholder.clone()))
        .unwrap_or_default();
    let input_type = match id {
        FieldId::Email => "email",
        _ => "text",
    };

    html! {
        @if id == FieldId::Allergies {
            textarea
                id=(id.wire_name())
                name=(id.wire_name())
                placeholder=(placeholder)
                aria-invalid=[field.is_invalid().then_some("true")] {
                (value)
            }
        } @else {
            input
                type=(input_type)
                id=(id.wire_name())
                name=(id.wire_name())
                value=(value)
                placeholder=(placeholder)
                required[field.required]
                aria-invalid=[field.is_invalid().then_some("true")];
        }
        span id={ (id.wire_name()) "-error" } class="field-error" { (field.error) }
    }
}

fn rsvp(page: &PageModel, form: &RsvpForm) -> Markup {
    let attendance = form.field(FieldId::Attendance);
    let main_course = form.field(FieldId::MainCourse);
    let group_style = if form.show_attendance_groups {
        "display: block"
    } else {
        "display: none"
    };

    html! {
        section id="rsvp" {
            (node_by_key(page, "rsvp-title"))
            (node_by_key(page, "rsvp-intro"))
            form id="rsvp-form" method="POST" {
                input type="hidden" name="form-name" value="rsvp";

                div class="form-group" {
                    (node_by_key(page, "label-name"))
                    (text_input(page, form, "input-name", FieldId::Name))
                }
                div class="form-group" {
                    (node_by_key(page, "label-email"))
                    (text_input(page, form, "input-email", FieldId::Email))
                }
                div class="form-group" {
                    (node_by_key(page, "label-attendance"))
                    @for (value, label_key) in [("yes", "label-attendance-yes"), ("no", "label-attendance-no")] {
                        label class="radio" {
                            input
                                type="radio"
                                name="attendance"
                                value=(value)
                                checked[attendance.value == value];
                            (node_by_key(page, label_key))
                        }
                    }
                    span id="attendance-error" class="field-error" { (attendance.error) }
                }
                div id="attendance-yes-group" class="form-group" style=(group_style) {
                    (node_by_key(page, "label-main-course"))
                    select id="mainCourse" name="mainCourse" required[main_course.required] {
                        @for n in page.nodes().iter().filter(|n| n.kind == NodeKind::SelectOption) {
                            option value=(n.key.trim_start_matches("option-course-")) { (n.text) }
                        }
                    }
                    span id="mainCourse-error" class="field-error" { (main_course.error) }
                }
                div id="attendance-yes-group-2" class="form-group" style=(group_style) {
                    (node_by_key(page, "label-allergies"))
                    (text_input(page, form, "textarea-allergies", FieldId::Allergies))
                }

                button
                    type="submit"
                    class="btn-submit"
                    disabled[form.submitting] {
                    (page.node("btn-submit").map(|n| n.text.as_str()).unwrap_or(""))
                }
                @if let Some(message) = &form.message {
                    p #form-message
                        .form-message
                        .success[message.kind == MessageKind::Success]
                        .error[message.kind == MessageKind::Error] {
                        (message.text)
                    }
                }
            }
        }
    }
}
