//! # Dynamic Sections Module / Módulo de Secciones Dinámicas
//!
//! This module expands list-shaped content (timeline entries, hotel entries,
//! the venue map embed) into registry nodes carrying index-qualified binding
//! paths; the actual localized text is filled in by a subsequent binder
//! pass. Expansion happens once at startup, independent of locale; a locale
//! switch only re-binds the text.
//!
//! Este módulo expande el contenido en forma de lista (cronograma, hoteles,
//! mapa embebido) en nodos del registro con rutas de enlace indexadas; el
//! texto localizado lo rellena una pasada posterior del enlazado.

use rust_i18n::t;

use crate::core::binder;
use crate::core::content::ContentStore;
use crate::core::locale::Locale;
use crate::core::page::{BoundNode, NodeKind, PageModel, Section};

/// Content authored as a `TODO:` note is a placeholder sentinel, not real
/// data, and must not be rendered.
pub fn is_placeholder(value: &str) -> bool {
    value.trim_start().starts_with("TODO:")
}

/// Expands all three dynamic sections and re-binds the page so the new
/// nodes pick up their localized text. Idempotent: each section clears its
/// own nodes before expanding.
pub fn render_dynamic(page: &mut PageModel, store: &ContentStore, locale: Locale) {
    render_timeline(page, store, locale);
    render_hotels(page, store, locale);
    render_map(page, store, locale);

    // Re-bind so the freshly registered nodes receive their text.
    binder::bind_all(page, store, locale);
}

/// Expands the ordered timeline of the day: one time/event/location group
/// per entry. The time is a plain authored string and is injected literally;
/// event and location are localized and bound by path.
fn render_timeline(page: &mut PageModel, store: &ContentStore, locale: Locale) {
    page.clear_section(Section::Timeline);

    let count = store.sequence_len("sections.theDay.timeline", locale);
    for index in 0..count {
        let base = format!("sections.theDay.timeline.{index}");

        let time = store.text(&format!("{base}.time"), locale).unwrap_or_default();
        page.push(
            BoundNode::new(&format!("timeline-{index}-time"), NodeKind::Text, "timeline-time")
                .with_section(Section::Timeline)
                .with_text(&time),
        );
        page.push(
            BoundNode::text(
                &format!("timeline-{index}-event"),
                "timeline-event",
                &format!("{base}.event"),
            )
            .with_section(Section::Timeline),
        );
        page.push(
            BoundNode::text(
                &format!("timeline-{index}-location"),
                "timeline-location",
                &format!("{base}.location"),
            )
            .with_section(Section::Timeline),
        );
    }
}

/// Expands the hotel list. Per entry:
/// - the name is wrapped in a hyperlink only when a non-placeholder URL is
///   authored;
/// - the distance line is included only when authored and not a placeholder;
/// - the notes line is included only when a value exists for the active
///   locale.
fn render_hotels(page: &mut PageModel, store: &ContentStore, locale: Locale) {
    page.clear_section(Section::Hotels);

    let count = store.sequence_len("sections.accommodation.hotels", locale);
    for index in 0..count {
        let base = format!("sections.accommodation.hotels.{index}");

        let mut name = BoundNode::text(
            &format!("hotel-{index}-name"),
            "hotel-name",
            &format!("{base}.name"),
        )
        .with_section(Section::Hotels);
        let url = store.text(&format!("{base}.url"), locale);
        if let Some(url) = url.filter(|u| !u.is_empty() && !is_placeholder(u)) {
            name = name.with_link(&url);
        }
        page.push(name);

        let distance = store.text(&format!("{base}.distance"), locale);
        if distance.is_some_and(|d| !d.is_empty() && !is_placeholder(&d)) {
            page.push(
                BoundNode::text(
                    &format!("hotel-{index}-distance"),
                    "hotel-distance",
                    &format!("{base}.distance"),
                )
                .with_section(Section::Hotels),
            );
        }

        if store.text(&format!("{base}.notes"), locale).is_some() {
            page.push(
                BoundNode::text(
                    &format!("hotel-{index}-notes"),
                    "hotel-notes",
                    &format!("{base}.notes"),
                )
                .with_section(Section::Hotels),
            );
        }
    }
}

/// Embeds the venue map as a lazily-loaded frame, but only when a real embed
/// URL is authored. The frame title comes from the localized venue name so
/// the embed stays accessible.
fn render_map(page: &mut PageModel, store: &ContentStore, locale: Locale) {
    page.clear_section(Section::Map);

    let Some(map_url) = store.text("sections.venue.mapUrl", locale) else {
        return;
    };
    if map_url.is_empty() || is_placeholder(&map_url) {
        return;
    }

    let title = store
        .text("sections.venue.name", locale)
        .unwrap_or_else(|| t!("map_title", locale = locale.as_str()).to_string());

    page.push(
        BoundNode::new("venue-map", NodeKind::Frame, "venue-map")
            .with_section(Section::Map)
            .with_link(&map_url)
            .with_text(&title),
    );
}
