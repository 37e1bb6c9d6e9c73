//! # Content Store Module / Módulo del Almacén de Contenido
//!
//! This module owns the loaded content document and resolves dotted paths
//! into it, unwrapping localized leaf values for the requested locale.
//!
//! Este módulo posee el documento de contenido cargado y resuelve rutas con
//! puntos dentro de él, extrayendo los valores localizados según el idioma
//! solicitado.

use colored::*;
use rust_i18n::t;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::core::locale::Locale;

/// Holds the content document for the whole page lifetime.
///
/// The document is loaded once at startup and never mutated afterwards. A
/// failed load leaves the store empty; every lookup against an empty store
/// returns `None` and bound nodes keep their authored default text, so the
/// rest of the system degrades instead of failing.
///
/// Contiene el documento de contenido durante toda la vida de la página.
/// Una carga fallida deja el almacén vacío; el resto del sistema se degrada
/// en lugar de fallar.
#[derive(Debug, Default)]
pub struct ContentStore {
    doc: Option<Value>,
}

impl ContentStore {
    /// Creates an empty store. All lookups return `None`.
    pub fn empty() -> Self {
        Self { doc: None }
    }

    /// Creates a store from an already-parsed document. Used by tests and
    /// by callers that fetch the document themselves.
    pub fn from_value(doc: Value) -> Self {
        Self { doc: Some(doc) }
    }

    /// Loads the content document from a local JSON file.
    ///
    /// Any failure (missing file, unreadable file, malformed JSON) is
    /// reported on stderr and produces an empty store. No retry is
    /// attempted and the failure is not surfaced further.
    pub fn load_from_path(path: &Path) -> Self {
        let parsed = fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|raw| serde_json::from_str::<Value>(&raw).map_err(anyhow::Error::from));

        match parsed {
            Ok(doc) => Self::from_value(doc),
            Err(e) => {
                eprintln!(
                    "{} {}",
                    t!("content_load_failed", path = path.display().to_string()).red(),
                    e
                );
                Self::empty()
            }
        }
    }

    /// Returns `true` when no document is loaded.
    pub fn is_empty(&self) -> bool {
        self.doc.is_none()
    }

    /// Resolves a dotted path against the document.
    ///
    /// The path is split into segments; objects are descended by key and
    /// sequences by numeric index. Any absent or non-traversable segment
    /// yields `None`. When the final value is an object keyed by locale
    /// codes and it contains the requested locale, that member is returned;
    /// otherwise the resolved value is returned as-is (this supports both
    /// localized leaves and plain values such as a raw time string).
    pub fn lookup(&self, path: &str, locale: Locale) -> Option<&Value> {
        let mut value = self.doc.as_ref()?;

        for segment in path.split('.') {
            value = match value {
                Value::Object(map) => map.get(segment)?,
                Value::Array(seq) => seq.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }

        if let Value::Object(map) = value {
            if let Some(localized) = map.get(locale.as_str()) {
                return Some(localized);
            }
        }

        Some(value)
    }

    /// Resolves a dotted path to display text.
    ///
    /// Strings come back verbatim; numbers and booleans are stringified;
    /// anything still structured after locale unwrapping is not displayable
    /// and yields `None`.
    pub fn text(&self, path: &str, locale: Locale) -> Option<String> {
        match self.lookup(path, locale)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Returns the length of the sequence at `path`, or 0 when the path
    /// does not resolve to a sequence.
    pub fn sequence_len(&self, path: &str, locale: Locale) -> usize {
        match self.lookup(path, locale) {
            Some(Value::Array(seq)) => seq.len(),
            _ => 0,
        }
    }
}
