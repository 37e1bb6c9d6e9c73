//! # Render Module / Módulo de Renderizado
//!
//! This module turns the bound page registry into output: a standalone HTML
//! snapshot and colored console views used by the CLI commands.
//!
//! Este módulo convierte el registro de página enlazado en salida: una
//! instantánea HTML independiente y vistas de consola en color usadas por
//! los comandos de la CLI.

pub mod console;
pub mod html;

// Re-export common rendering functions
pub use console::{print_countdown_line, print_form_message};
pub use html::page_html;
