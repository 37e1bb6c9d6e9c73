//! # Preference Store Module / Módulo del Almacén de Preferencias
//!
//! A small process-external key/value store, the stand-in for the browser's
//! persistent storage. The file-backed implementation keeps a flat TOML map;
//! writes are best-effort, like the storage it replaces.
//!
//! Un pequeño almacén clave/valor externo al proceso, el sustituto del
//! almacenamiento persistente del navegador.

use colored::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// The default preference file, next to the working directory.
pub const DEFAULT_PREFS_FILE: &str = ".enlace-prefs.toml";

/// Persistent key/value preferences. Getting a missing key is `None`;
/// setting never fails the caller (write failures are reported and
/// swallowed; losing a language preference is not worth an error path).
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// File-backed store: a flat TOML table rewritten on every set.
#[derive(Debug)]
pub struct FilePrefStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePrefStore {
    /// Opens (or conceptually creates) the store at `path`. A missing or
    /// unparsable file starts the store empty; nothing here is fatal.
    pub fn open(path: &Path) -> Self {
        let values = fs::read_to_string(path)
            .ok()
            .and_then(|raw| toml::from_str::<BTreeMap<String, String>>(&raw).ok())
            .unwrap_or_default();

        Self {
            path: path.to_path_buf(),
            values,
        }
    }

    fn flush(&self) {
        let serialized = match toml::to_string_pretty(&self.values) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{} {}", "Failed to serialize preferences:".red(), e);
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, serialized) {
            eprintln!(
                "{} {} ({})",
                "Failed to persist preferences:".red(),
                self.path.display(),
                e
            );
        }
    }
}

impl PrefStore for FilePrefStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.flush();
    }
}

/// In-memory store for tests and for running without persistence.
#[derive(Debug, Default)]
pub struct MemoryPrefStore {
    values: BTreeMap<String, String>,
}

impl MemoryPrefStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with one key, convenient in tests.
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PrefStore for MemoryPrefStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
