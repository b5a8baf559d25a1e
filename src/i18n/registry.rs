//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is a lazily initialised singleton (`OnceLock`) and is
//! immutable after first access.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "ru")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Russian")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Русский")
    pub native_name: &'static str,

    /// Short label shown on the language toggle button
    pub toggle_label: &'static str,

    /// Whether this is the canonical language (only one should be true)
    pub is_canonical: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in registry order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get the canonical language configuration.
    ///
    /// The canonical language is the one every translation key must have
    /// text for, and the one the page falls back to.
    ///
    /// # Panics
    /// Panics if zero or several canonical languages are defined (this
    /// indicates a configuration error in `default_languages`).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }
}

/// English (canonical) and Russian.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            toggle_label: "EN",
            is_canonical: true,
            enabled: true,
        },
        LanguageConfig {
            code: "ru",
            name: "Russian",
            native_name: "Русский",
            toggle_label: "RU",
            is_canonical: false,
            enabled: true,
        },
    ]
}
