//! Language type: validated language representation.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A language that has been validated against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "ru")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const RUSSIAN: Language = Language { code: "ru" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Lenient parse of a user preference (query parameter, cookie).
    ///
    /// Case and surrounding whitespace are ignored, and region suffixes such
    /// as `ru-RU` are accepted. Anything unusable yields the canonical
    /// language.
    pub fn from_preference(value: Option<&str>) -> Language {
        value
            .map(|v| v.trim().to_ascii_lowercase())
            .and_then(|v| {
                let primary = v.split(['-', '_']).next().unwrap_or_default().to_string();
                Language::from_code(&primary).ok()
            })
            .unwrap_or_else(Language::canonical)
    }

    /// Get the canonical language (English).
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a `Language` built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    /// The language the page toggle switches to: the next enabled language
    /// in registry order, wrapping around.
    pub fn other(&self) -> Language {
        let enabled = LanguageRegistry::get().list_enabled();
        let position = enabled
            .iter()
            .position(|lang| lang.code == self.code)
            .unwrap_or(0);
        let next = enabled[(position + 1) % enabled.len()];
        Language { code: next.code }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}
