//! # Infrastructure Module / Módulo de Infraestructura
//!
//! This module provides infrastructure services for Enlace: the HTTP client
//! for the content fetch and the RSVP submission, and the persistent
//! preference store backing the saved language choice.
//!
//! Este módulo proporciona los servicios de infraestructura de Enlace: el
//! cliente HTTP para la carga de contenido y el envío del RSVP, y el almacén
//! persistente de preferencias que respalda el idioma guardado.

pub mod http;
pub mod prefs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
