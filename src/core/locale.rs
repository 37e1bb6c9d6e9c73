//! # Locale Module / Módulo de Idioma
//!
//! This module defines the supported display locales and resolves which one
//! is active: a persisted preference wins, then the system/browser language
//! hint, then the Spanish default. The resolved value is always persisted.
//!
//! Este módulo define los idiomas soportados y resuelve cuál está activo:
//! gana la preferencia guardada, luego la pista del sistema/navegador y por
//! último el español por defecto. El valor resuelto siempre se guarda.

use std::fmt;

use crate::infra::prefs::PrefStore;

/// The persistence key under which the active locale is saved.
pub const PREF_KEY: &str = "wedding-lang";

/// One of the three supported display locales. Exactly one is active at any
/// time; `Es` is the default.
///
/// Uno de los tres idiomas soportados. Exactamente uno está activo en cada
/// momento; `Es` es el valor por defecto.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// Spanish (default) / Español (por defecto)
    #[default]
    Es,
    /// English / Inglés
    En,
    /// Hungarian / Húngaro
    Hu,
}

/// Every supported locale, in switcher order.
pub const ALL_LOCALES: [Locale; 3] = [Locale::Es, Locale::En, Locale::Hu];

impl Locale {
    /// Returns the canonical two-letter code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
            Self::Hu => "hu",
        }
    }

    /// Returns the display name of the locale in its own language.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Es => "Español",
            Self::En => "English",
            Self::Hu => "Magyar",
        }
    }

    /// Parses an exact locale code. Anything outside the supported set is
    /// rejected, which makes invalid switcher input a no-op upstream.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "es" => Some(Self::Es),
            "en" => Some(Self::En),
            "hu" => Some(Self::Hu),
            _ => None,
        }
    }

    /// Matches a system/browser language tag (e.g. "en-US", "hu_HU") by its
    /// two-letter prefix.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let prefix: String = tag
            .chars()
            .take(2)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::from_code(&prefix)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves the initial locale at startup.
///
/// Order: persisted preference (ignored unless it is a valid code), then the
/// provided language hint matched by two-letter prefix, then `Es`. The
/// resolved value is persisted so later runs skip the hint.
///
/// Resuelve el idioma inicial al arrancar: preferencia guardada, pista de
/// idioma, y por último `Es`. El valor resuelto se guarda siempre.
pub fn resolve_initial(prefs: &mut dyn PrefStore, hint: Option<&str>) -> Locale {
    let locale = prefs
        .get(PREF_KEY)
        .as_deref()
        .and_then(Locale::from_code)
        .or_else(|| hint.and_then(Locale::from_tag))
        .unwrap_or_default();

    prefs.set(PREF_KEY, locale.as_str());
    locale
}
