//! # Locale Unit Tests / Tests Unitarios de Idioma
//!
//! This module tests locale parsing, tag prefix matching and the startup
//! resolution order: persisted preference, then language hint, then the
//! Spanish default, with the resolved value always persisted.
//!
//! Este módulo prueba el análisis de idiomas, la coincidencia por prefijo y
//! el orden de resolución al arrancar: preferencia guardada, pista de idioma
//! y por último el español por defecto.

use enlace::core::locale::{self, ALL_LOCALES, Locale, PREF_KEY};
use enlace::infra::prefs::{MemoryPrefStore, PrefStore};

#[cfg(test)]
mod parsing_tests {
    use super::*;

    #[test]
    fn test_from_code_accepts_exact_codes_only() {
        assert_eq!(Locale::from_code("es"), Some(Locale::Es));
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code("hu"), Some(Locale::Hu));

        assert_eq!(Locale::from_code("de"), None);
        assert_eq!(Locale::from_code("en-US"), None);
        assert_eq!(Locale::from_code("ES"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_from_tag_matches_two_letter_prefix() {
        assert_eq!(Locale::from_tag("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_tag("hu_HU"), Some(Locale::Hu));
        assert_eq!(Locale::from_tag("es-MX"), Some(Locale::Es));
        assert_eq!(Locale::from_tag("EN"), Some(Locale::En));

        assert_eq!(Locale::from_tag("fr-FR"), None);
        assert_eq!(Locale::from_tag(""), None);
        assert_eq!(Locale::from_tag("e"), None);
    }

    #[test]
    fn test_codes_and_display_names() {
        assert_eq!(ALL_LOCALES.len(), 3);
        assert_eq!(Locale::Es.as_str(), "es");
        assert_eq!(Locale::En.display_name(), "English");
        assert_eq!(Locale::Hu.display_name(), "Magyar");
        assert_eq!(Locale::default(), Locale::Es);
        assert_eq!(Locale::En.to_string(), "en");
    }
}

#[cfg(test)]
mod resolution_tests {
    use super::*;

    #[test]
    fn test_persisted_preference_wins_over_hint() {
        for (code, expected) in [("es", Locale::Es), ("en", Locale::En), ("hu", Locale::Hu)] {
            let mut prefs = MemoryPrefStore::with(PREF_KEY, code);
            let resolved = locale::resolve_initial(&mut prefs, Some("fr-FR"));
            assert_eq!(resolved, expected, "persisted {code} must win");
        }
    }

    #[test]
    fn test_hint_used_when_no_preference() {
        let mut prefs = MemoryPrefStore::new();
        assert_eq!(locale::resolve_initial(&mut prefs, Some("en-US")), Locale::En);

        let mut prefs = MemoryPrefStore::new();
        assert_eq!(locale::resolve_initial(&mut prefs, Some("hu_HU")), Locale::Hu);
    }

    #[test]
    fn test_unsupported_hint_falls_back_to_default() {
        let mut prefs = MemoryPrefStore::new();
        assert_eq!(locale::resolve_initial(&mut prefs, Some("fr-FR")), Locale::Es);

        let mut prefs = MemoryPrefStore::new();
        assert_eq!(locale::resolve_initial(&mut prefs, None), Locale::Es);
    }

    #[test]
    fn test_invalid_persisted_value_is_ignored() {
        // A stale or corrupted preference must not poison startup; the hint
        // still applies.
        let mut prefs = MemoryPrefStore::with(PREF_KEY, "klingon");
        assert_eq!(locale::resolve_initial(&mut prefs, Some("en")), Locale::En);
    }

    #[test]
    fn test_resolved_value_is_always_persisted() {
        let mut prefs = MemoryPrefStore::new();
        locale::resolve_initial(&mut prefs, Some("hu"));
        assert_eq!(prefs.get(PREF_KEY).as_deref(), Some("hu"));

        let mut prefs = MemoryPrefStore::new();
        locale::resolve_initial(&mut prefs, None);
        assert_eq!(prefs.get(PREF_KEY).as_deref(), Some("es"));
    }
}

#[cfg(test)]
mod pref_store_tests {
    use super::*;
    use enlace::infra::prefs::FilePrefStore;
    use std::fs;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs.toml");

        let mut store = FilePrefStore::open(&path);
        assert_eq!(store.get(PREF_KEY), None);
        store.set(PREF_KEY, "hu");

        // A fresh handle sees the persisted value.
        let reopened = FilePrefStore::open(&path);
        assert_eq!(reopened.get(PREF_KEY).as_deref(), Some("hu"));
    }

    #[test]
    fn test_file_store_tolerates_unparsable_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "this is [ not toml").expect("write fixture");

        let store = FilePrefStore::open(&path);
        assert_eq!(store.get(PREF_KEY), None);
    }
}
