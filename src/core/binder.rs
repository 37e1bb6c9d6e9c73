//! # Content Binder Module / Módulo de Enlazado de Contenido
//!
//! This module walks the page registry and injects localized text and
//! placeholder values resolved from the content store. Free-text inputs are
//! only written before their initialized flag is set, so a re-render or a
//! locale switch never erases in-progress user input.
//!
//! Este módulo recorre el registro de página e inyecta los textos y
//! placeholders localizados resueltos desde el almacén de contenido. Las
//! entradas de texto libre solo se escriben antes de activarse su marca de
//! inicialización, de modo que un cambio de idioma nunca borra lo que el
//! usuario está escribiendo.

use crate::core::content::ContentStore;
use crate::core::locale::Locale;
use crate::core::page::PageModel;

/// Applies the content document to every registered node at `locale`.
///
/// For each node carrying a text path:
/// - guarded input kinds (text, email, textarea) receive the value only
///   while uninitialized, and binding marks them initialized;
/// - every other kind (headings, captions, select-option labels, links) is
///   always overwritten; it has no user-entered state to protect.
///
/// Unresolved paths leave the node's authored default untouched. Afterwards
/// the document title and meta description are taken from the reserved
/// `meta` section when present, and every placeholder binding is re-applied
/// unconditionally.
pub fn bind_all(page: &mut PageModel, store: &ContentStore, locale: Locale) {
    page.active_locale = locale;

    for node in page.nodes_mut() {
        let resolved = node
            .text_path
            .as_deref()
            .and_then(|path| store.text(path, locale));

        if let Some(value) = resolved {
            if node.is_guarded_input() {
                if !node.initialized {
                    node.text = value;
                    node.initialized = true;
                }
            } else {
                node.text = value;
            }
        }
    }

    bind_meta(page, store, locale);
    bind_placeholders(page, store, locale);
}

/// Updates the document title and meta description from the reserved `meta`
/// section. Missing entries keep the current values.
fn bind_meta(page: &mut PageModel, store: &ContentStore, locale: Locale) {
    if let Some(title) = store.text("meta.title", locale) {
        page.title = title;
    }
    if let Some(description) = store.text("meta.description", locale) {
        page.meta_description = description;
    }
}

/// Re-applies every placeholder binding. Placeholders are hint text, not
/// user data, so they are always overwritten.
pub fn bind_placeholders(page: &mut PageModel, store: &ContentStore, locale: Locale) {
    for node in page.nodes_mut() {
        let resolved = node
            .placeholder_path
            .as_deref()
            .and_then(|path| store.text(path, locale));

        if let Some(value) = resolved {
            node.placeholder = value;
        }
    }
}
