//! # Content Binder Unit Tests / Tests Unitarios del Enlazado
//!
//! This module tests the binder pass over the page registry: localized text
//! injection, the initialized guard on free-text inputs, unconditional
//! placeholder refresh and document metadata binding.
//!
//! Este módulo prueba la pasada de enlazado sobre el registro de página: la
//! inyección de texto localizado, la protección de inicialización en las
//! entradas de texto libre, el refresco incondicional de los placeholders y
//! el enlazado de los metadatos del documento.

mod common;

use enlace::core::binder;
use enlace::core::content::ContentStore;
use enlace::core::locale::Locale;
use enlace::core::page::{BoundNode, NodeKind, PageModel};

#[cfg(test)]
mod text_binding_tests {
    use super::*;

    #[test]
    fn test_bind_fills_registered_text_nodes() {
        let store = common::sample_store();
        let mut page = PageModel::standard();

        binder::bind_all(&mut page, &store, Locale::Es);

        assert_eq!(page.node("hero-tagline").unwrap().text, "¡Nos casamos!");
        assert_eq!(page.node("rsvp-title").unwrap().text, "Confirma");
        assert_eq!(page.node("btn-submit").unwrap().text, "Enviar confirmación");
        assert_eq!(page.active_locale, Locale::Es);
    }

    #[test]
    fn test_rebind_switches_every_unguarded_node() {
        let store = common::sample_store();
        let mut page = PageModel::standard();

        binder::bind_all(&mut page, &store, Locale::Es);
        binder::bind_all(&mut page, &store, Locale::En);

        assert_eq!(page.node("hero-tagline").unwrap().text, "We're getting married!");
        assert_eq!(page.node("label-attendance").unwrap().text, "Will you attend?");
        // Select option labels are not free-text and always follow the locale.
        assert_eq!(page.node("option-course-meat").unwrap().text, "Meat");
        assert_eq!(page.active_locale, Locale::En);
    }

    #[test]
    fn test_unresolved_path_keeps_authored_default() {
        let store = common::sample_store();
        let mut page = PageModel::new();
        page.push(BoundNode::text("orphan", "orphan", "no.such.path").with_text("authored default"));

        binder::bind_all(&mut page, &store, Locale::Es);

        assert_eq!(page.node("orphan").unwrap().text, "authored default");
    }

    #[test]
    fn test_empty_store_leaves_page_untouched() {
        let store = ContentStore::empty();
        let mut page = PageModel::standard();

        binder::bind_all(&mut page, &store, Locale::En);

        assert_eq!(page.node("hero-tagline").unwrap().text, "");
        assert_eq!(page.title, "");
        assert_eq!(page.active_locale, Locale::En);
    }
}

#[cfg(test)]
mod initialized_guard_tests {
    use super::*;

    fn guarded_page() -> PageModel {
        let mut page = PageModel::new();
        page.push(
            BoundNode::new("guest-name", NodeKind::TextInput, "form-input")
                .with_text_path("hero.names"),
        );
        page
    }

    #[test]
    fn test_first_bind_writes_and_marks_initialized() {
        let store = common::sample_store();
        let mut page = guarded_page();

        binder::bind_all(&mut page, &store, Locale::Es);

        let node = page.node("guest-name").unwrap();
        assert_eq!(node.text, "Ana & Bence");
        assert!(node.initialized);
    }

    #[test]
    fn test_initialized_input_survives_rebind_and_locale_switch() {
        let store = common::sample_store();
        let mut page = guarded_page();
        binder::bind_all(&mut page, &store, Locale::Es);

        // The user typed over the bound value.
        {
            let node = page.node_mut("guest-name").unwrap();
            node.text = "María typed this".to_string();
        }

        binder::bind_all(&mut page, &store, Locale::En);
        binder::bind_all(&mut page, &store, Locale::Hu);
        binder::bind_all(&mut page, &store, Locale::Es);

        assert_eq!(page.node("guest-name").unwrap().text, "María typed this");
    }

    #[test]
    fn test_guard_set_by_user_input_blocks_first_bind_too() {
        let store = common::sample_store();
        let mut page = guarded_page();

        // Input arrived before any bind ran.
        {
            let node = page.node_mut("guest-name").unwrap();
            node.text = "early input".to_string();
            node.initialized = true;
        }

        binder::bind_all(&mut page, &store, Locale::Es);

        assert_eq!(page.node("guest-name").unwrap().text, "early input");
    }
}

#[cfg(test)]
mod placeholder_and_meta_tests {
    use super::*;

    #[test]
    fn test_placeholders_always_follow_the_locale() {
        let store = common::sample_store();
        let mut page = PageModel::standard();

        binder::bind_all(&mut page, &store, Locale::Es);
        assert_eq!(page.node("input-name").unwrap().placeholder, "Tu nombre");

        // Even when the input itself is initialized, the placeholder is hint
        // text and keeps switching.
        page.node_mut("input-name").unwrap().initialized = true;
        binder::bind_all(&mut page, &store, Locale::En);
        assert_eq!(page.node("input-name").unwrap().placeholder, "Your name");
        assert_eq!(page.node("textarea-allergies").unwrap().placeholder, "Allergies or diet");
    }

    #[test]
    fn test_meta_title_and_description_are_bound() {
        let store = common::sample_store();
        let mut page = PageModel::standard();

        binder::bind_all(&mut page, &store, Locale::Hu);

        assert_eq!(page.title, "Az esküvőnk");
        assert_eq!(page.meta_description, "Ünnepelj velünk");
    }

    #[test]
    fn test_missing_meta_keeps_current_values() {
        let store = ContentStore::from_value(serde_json::json!({ "hero": { "names": "X" } }));
        let mut page = PageModel::standard();
        page.title = "kept title".to_string();

        binder::bind_all(&mut page, &store, Locale::Es);

        assert_eq!(page.title, "kept title");
    }
}
