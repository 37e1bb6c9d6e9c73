//! # Core Module / Módulo Principal
//!
//! This module contains the core functionality of Enlace: the content
//! document store, locale handling, the page registry with its binder,
//! dynamic section expansion, the countdown engine and the RSVP form
//! controller.
//!
//! Este módulo contiene la funcionalidad principal de Enlace: el almacén del
//! documento de contenido, la gestión de idiomas, el registro de página con
//! su enlazado, la expansión de secciones dinámicas, el motor de cuenta
//! atrás y el controlador del formulario RSVP.

pub mod app;
pub mod binder;
pub mod content;
pub mod countdown;
pub mod form;
pub mod locale;
pub mod page;
pub mod sections;

// Re-exports
pub use app::App;
pub use content::ContentStore;
pub use countdown::CountdownEngine;
pub use form::RsvpForm;
pub use locale::Locale;
pub use page::PageModel;
