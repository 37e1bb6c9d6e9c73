//! # Page Registry Module / Módulo del Registro de Página
//!
//! This module defines the explicit registry that stands in for the rendered
//! page: every bound element is registered once as a [`BoundNode`] with its
//! content path and kind, and every re-render iterates the registry instead
//! of re-scanning a live tree.
//!
//! Este módulo define el registro explícito que sustituye a la página
//! renderizada: cada elemento enlazado se registra una vez como [`BoundNode`]
//! con su ruta de contenido y su tipo, y cada renderizado recorre el registro
//! en lugar de volver a escanear un árbol vivo.

use crate::core::locale::Locale;

/// The kind of rendered element a node stands for. The kind decides how the
/// binder writes into it: free-text inputs are guarded by the initialized
/// flag, everything else is always overwritten.
///
/// El tipo de elemento que representa un nodo. El tipo decide cómo escribe
/// el enlazado en él: las entradas de texto libre están protegidas por la
/// marca de inicialización, el resto se sobrescribe siempre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Plain text content (headings, paragraphs, captions, button labels).
    Text,
    /// Single-line text input. Value writes are initialized-guarded.
    TextInput,
    /// Email input. Value writes are initialized-guarded.
    EmailInput,
    /// Multi-line text area. Value writes are initialized-guarded.
    TextArea,
    /// A select option label. Always overwritten (not a free-text field).
    SelectOption,
    /// An externally-loaded embedded frame (the venue map).
    Frame,
}

/// The page section a node belongs to. Dynamic sections own their nodes and
/// clear them before re-expanding, which keeps expansion idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Authored, locale-independent structure (the analog of static markup).
    Static,
    /// Expanded timeline entries / Entradas de cronograma expandidas
    Timeline,
    /// Expanded hotel entries / Entradas de hoteles expandidas
    Hotels,
    /// The venue map embed / El mapa embebido del lugar
    Map,
}

/// A registered association between a rendered element and the content
/// document: the registry entry that replaces a DOM element carrying
/// `data-i18n` markers.
///
/// La asociación registrada entre un elemento renderizado y el documento de
/// contenido: la entrada de registro que sustituye a un elemento del DOM.
#[derive(Debug, Clone)]
pub struct BoundNode {
    /// Unique registry key, the analog of an element id.
    pub key: String,
    /// What kind of element this node stands for.
    pub kind: NodeKind,
    /// Which section owns the node.
    pub section: Section,
    /// CSS class carried into the HTML snapshot.
    pub class: String,
    /// Dotted content path for the node's text or input value, if any.
    pub text_path: Option<String>,
    /// Dotted content path for the node's placeholder hint, if any.
    pub placeholder_path: Option<String>,
    /// Current text content (or input value, for input kinds).
    pub text: String,
    /// Current placeholder hint.
    pub placeholder: String,
    /// Set once the node's value has been written (by the binder or by user
    /// input); while set, re-binding must not overwrite the value.
    pub initialized: bool,
    /// Optional hyperlink target (a hotel name link, or a frame source).
    pub link: Option<String>,
}

impl BoundNode {
    /// Creates a plain text node bound to `path`.
    pub fn text(key: &str, class: &str, path: &str) -> Self {
        Self::new(key, NodeKind::Text, class).with_text_path(path)
    }

    /// Creates an unbound node of the given kind.
    pub fn new(key: &str, kind: NodeKind, class: &str) -> Self {
        Self {
            key: key.to_string(),
            kind,
            section: Section::Static,
            class: class.to_string(),
            text_path: None,
            placeholder_path: None,
            text: String::new(),
            placeholder: String::new(),
            initialized: false,
            link: None,
        }
    }

    pub fn with_text_path(mut self, path: &str) -> Self {
        self.text_path = Some(path.to_string());
        self
    }

    pub fn with_placeholder_path(mut self, path: &str) -> Self {
        self.placeholder_path = Some(path.to_string());
        self
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.section = section;
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_link(mut self, href: &str) -> Self {
        self.link = Some(href.to_string());
        self
    }

    /// `true` for free-text input kinds whose value writes are guarded.
    pub fn is_guarded_input(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::TextInput | NodeKind::EmailInput | NodeKind::TextArea
        )
    }
}

/// The four countdown digit slots plus the terminal message slot. Digits are
/// zero-padded two-character strings; once `terminal` is set the digits stop
/// changing.
#[derive(Debug, Clone, Default)]
pub struct CountdownDisplay {
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    /// Localized terminal message, set once the target instant has passed.
    pub terminal: Option<String>,
}

/// The whole rendered page as data: the node registry, document metadata and
/// the countdown display. Mutated only on the main sequential event stream
/// (binder, section renderer, countdown engine, form controller).
#[derive(Debug)]
pub struct PageModel {
    nodes: Vec<BoundNode>,
    /// Document title, bound from the reserved `meta` section.
    pub title: String,
    /// Meta description, bound from the reserved `meta` section.
    pub meta_description: String,
    /// The countdown digit and terminal slots.
    pub countdown: CountdownDisplay,
    /// The locale currently highlighted in the language switcher.
    pub active_locale: Locale,
}

impl PageModel {
    /// Creates an empty page with no registered nodes.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            title: String::new(),
            meta_description: String::new(),
            countdown: CountdownDisplay::default(),
            active_locale: Locale::default(),
        }
    }

    /// Registers the authored node set: hero, section headings, countdown
    /// captions and the RSVP form surface. Dynamic sections are appended
    /// later by the section renderer.
    pub fn standard() -> Self {
        let mut page = Self::new();

        page.push(BoundNode::text("hero-names", "hero-names", "hero.names"));
        page.push(BoundNode::text("hero-date", "hero-date", "hero.date"));
        page.push(BoundNode::text("hero-tagline", "hero-tagline", "hero.tagline"));

        page.push(BoundNode::text("countdown-title", "section-title", "countdown.title"));
        for unit in ["days", "hours", "minutes", "seconds"] {
            page.push(BoundNode::text(
                &format!("countdown-label-{unit}"),
                "countdown-label",
                &format!("countdown.labels.{unit}"),
            ));
        }

        page.push(BoundNode::text("theday-title", "section-title", "sections.theDay.title"));
        page.push(BoundNode::text("venue-title", "section-title", "sections.venue.title"));
        page.push(BoundNode::text("venue-name", "venue-name", "sections.venue.name"));
        page.push(BoundNode::text("venue-address", "venue-address", "sections.venue.address"));
        page.push(BoundNode::text(
            "accommodation-title",
            "section-title",
            "sections.accommodation.title",
        ));

        page.push(BoundNode::text("rsvp-title", "section-title", "rsvp.title"));
        page.push(BoundNode::text("rsvp-intro", "rsvp-intro", "rsvp.intro"));
        page.push(BoundNode::text("label-name", "form-label", "rsvp.form.nameLabel"));
        page.push(
            BoundNode::new("input-name", NodeKind::TextInput, "form-input")
                .with_placeholder_path("rsvp.form.namePlaceholder"),
        );
        page.push(BoundNode::text("label-email", "form-label", "rsvp.form.emailLabel"));
        page.push(
            BoundNode::new("input-email", NodeKind::EmailInput, "form-input")
                .with_placeholder_path("rsvp.form.emailPlaceholder"),
        );
        page.push(BoundNode::text(
            "label-attendance",
            "form-label",
            "rsvp.form.attendanceLabel",
        ));
        page.push(BoundNode::text(
            "label-attendance-yes",
            "radio-label",
            "rsvp.form.attendanceYes",
        ));
        page.push(BoundNode::text(
            "label-attendance-no",
            "radio-label",
            "rsvp.form.attendanceNo",
        ));
        page.push(BoundNode::text(
            "label-main-course",
            "form-label",
            "rsvp.form.mainCourseLabel",
        ));
        for course in ["meat", "fish", "veggie"] {
            page.push(
                BoundNode::new(
                    &format!("option-course-{course}"),
                    NodeKind::SelectOption,
                    "form-option",
                )
                .with_text_path(&format!("rsvp.form.courses.{course}")),
            );
        }
        page.push(BoundNode::text(
            "label-allergies",
            "form-label",
            "rsvp.form.allergiesLabel",
        ));
        page.push(
            BoundNode::new("textarea-allergies", NodeKind::TextArea, "form-input")
                .with_placeholder_path("rsvp.form.allergiesPlaceholder"),
        );
        page.push(BoundNode::text("btn-submit", "btn-submit", "rsvp.submit"));
        page.push(BoundNode::new("form-message", NodeKind::Text, "form-message"));

        page
    }

    /// Registers a node. Panics in debug builds on duplicate keys; keys must
    /// be unique so lookups are unambiguous.
    pub fn push(&mut self, node: BoundNode) {
        debug_assert!(
            self.node(&node.key).is_none(),
            "duplicate page node key: {}",
            node.key
        );
        self.nodes.push(node);
    }

    /// Removes every node owned by `section`. Used by the section renderer
    /// before re-expanding, so expansion stays idempotent.
    pub fn clear_section(&mut self, section: Section) {
        self.nodes.retain(|n| n.section != section);
    }

    pub fn nodes(&self) -> &[BoundNode] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [BoundNode] {
        &mut self.nodes
    }

    /// Finds a node by its registry key.
    pub fn node(&self, key: &str) -> Option<&BoundNode> {
        self.nodes.iter().find(|n| n.key == key)
    }

    /// Finds a node by its registry key, mutably.
    pub fn node_mut(&mut self, key: &str) -> Option<&mut BoundNode> {
        self.nodes.iter_mut().find(|n| n.key == key)
    }

    /// All nodes belonging to `section`, in registration order.
    pub fn section_nodes(&self, section: Section) -> impl Iterator<Item = &BoundNode> {
        self.nodes.iter().filter(move |n| n.section == section)
    }
}

impl Default for PageModel {
    fn default() -> Self {
        Self::new()
    }
}
