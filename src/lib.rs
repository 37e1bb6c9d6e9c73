//! # Enlace Library / Biblioteca Enlace
//!
//! This library provides the core functionality for Enlace, a content-driven,
//! multilingual single-page site engine with a live countdown and an RSVP
//! submission pipeline.
//!
//! Esta biblioteca proporciona la funcionalidad principal de Enlace, un motor
//! de página única multilingüe dirigido por contenido, con cuenta atrás en
//! vivo y un flujo de envío de confirmaciones (RSVP).
//!
//! ## Modules / Módulos
//!
//! - `core` - Content store, page registry, binder, countdown and form logic
//! - `infra` - Infrastructure services: HTTP, preference persistence, i18n
//! - `render` - HTML snapshot and console rendering of the bound page
//! - `cli` - Command-line interface and commands
//!
//! - `core` - Almacén de contenido, registro de página, enlazado, cuenta atrás y formulario
//! - `infra` - Servicios de infraestructura: HTTP, persistencia de preferencias, i18n
//! - `render` - Renderizado HTML y de consola de la página enlazada
//! - `cli` - Interfaz de línea de comandos y comandos

pub mod cli;
pub mod core;
pub mod infra;
pub mod render;

// Re-export commonly used items
pub use core::app::App;
pub use core::content::ContentStore;
pub use core::locale::Locale;

/// Initializes the tool's own internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the tool's messages. It attempts to match the full locale
/// (e.g., "es-ES"), then just the language code (e.g., "es"), and finally
/// falls back to the default language ("es").
pub fn init() {
    // Detect system locale and set it for i18n.
    // Fallback to "es" if detection fails.
    let locale = sys_locale::get_locale().unwrap_or_else(|| "es".to_string());
    let available_locales = rust_i18n::available_locales!();

    // Try to match the full locale first (e.g., "es-ES")
    // Then try to match the language part only (e.g., "es" from "es-ES")
    // Finally, fall back to "es"
    let lang = if available_locales.contains(&locale.as_str()) {
        &locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("es")
    };

    rust_i18n::set_locale(lang);
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "es");
