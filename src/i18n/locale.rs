//! Locale type: Flexible, validated locale representation.
//!
//! This module provides the `Locale` type, a cheap copyable handle that is
//! always backed by a registry entry, so invalid locale codes cannot flow
//! through URL building or content lookups.

use crate::i18n::{LocaleConfig, LocaleRegistry, UiStrings};
use anyhow::{bail, Result};

/// A validated locale.
///
/// This type represents a locale that has been validated against the
/// registry. It ensures that only supported locales can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// ISO 639-1 locale code (e.g., "en", "zh", "es")
    code: &'static str,
}

impl Locale {
    /// English, the default locale.
    pub const ENGLISH: Locale = Locale { code: "en" };

    /// Chinese.
    pub const CHINESE: Locale = Locale { code: "zh" };

    /// Spanish.
    pub const SPANISH: Locale = Locale { code: "es" };

    /// Create a Locale from a locale code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 locale code (e.g., "en", "zh")
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is supported
    /// * `Err` if the code is not found in the registry
    ///
    /// # Example
    /// ```ignore
    /// let chinese = Locale::from_code("zh")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Locale> {
        let registry = LocaleRegistry::get();

        match registry.get_by_code(code) {
            Some(config) => Ok(Locale {
                code: config.code, // Use the static str from the registry
            }),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Get the default locale.
    ///
    /// This is the locale missing translations fall back to, and the target
    /// of `x-default` alternate links.
    pub fn default_locale() -> Locale {
        let config = LocaleRegistry::get().default_locale();
        Locale { code: config.code }
    }

    /// Get every supported locale, in registry order.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .list()
            .iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    /// Get the ISO 639-1 locale code.
    ///
    /// # Returns
    /// The locale code as a static string (e.g., "en", "zh").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the locale code is not found in the registry. This should
    /// never happen if the Locale was constructed properly (via `from_code`
    /// or constants).
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    /// Get the display name of the locale, in the locale itself.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the flag emoji for the locale.
    pub fn flag(&self) -> &'static str {
        self.config().flag
    }

    /// Get the localized UI string catalog for the locale.
    pub fn strings(&self) -> &'static UiStrings {
        self.config().strings
    }

    /// Check if this is the default locale.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_english_constant() {
        let english = Locale::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(english.is_default());
    }

    #[test]
    fn test_chinese_constant() {
        let chinese = Locale::CHINESE;
        assert_eq!(chinese.code(), "zh");
        assert_eq!(chinese.name(), "中文");
        assert!(!chinese.is_default());
    }

    #[test]
    fn test_spanish_constant() {
        let spanish = Locale::SPANISH;
        assert_eq!(spanish.code(), "es");
        assert_eq!(spanish.name(), "Español");
        assert!(!spanish.is_default());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_english() {
        let locale = Locale::from_code("en").expect("Should succeed");
        assert_eq!(locale.code(), "en");
        assert_eq!(locale.name(), "English");
    }

    #[test]
    fn test_from_code_chinese() {
        let locale = Locale::from_code("zh").expect("Should succeed");
        assert_eq!(locale.code(), "zh");
        assert_eq!(locale.name(), "中文");
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Locale::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        let result = Locale::from_code("");
        assert!(result.is_err());
    }

    // ==================== default_locale Tests ====================

    #[test]
    fn test_default_locale_returns_english() {
        let default = Locale::default_locale();
        assert_eq!(default.code(), "en");
        assert!(default.is_default());
    }

    // ==================== all Tests ====================

    #[test]
    fn test_all_returns_registry_order() {
        let codes: Vec<_> = Locale::all().iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["en", "zh", "es"]);
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_locale_equality() {
        let locale1 = Locale::ENGLISH;
        let locale2 = Locale::from_code("en").unwrap();
        assert_eq!(locale1, locale2);
    }

    #[test]
    fn test_locale_inequality() {
        let english = Locale::ENGLISH;
        let spanish = Locale::SPANISH;
        assert_ne!(english, spanish);
    }

    #[test]
    fn test_locale_copy() {
        let locale1 = Locale::ENGLISH;
        let locale2 = locale1; // Copy
        assert_eq!(locale1, locale2); // Both still valid
    }

    #[test]
    fn test_locale_debug() {
        let locale = Locale::SPANISH;
        let debug = format!("{:?}", locale);
        assert!(debug.contains("es"));
    }

    // ==================== Config Access Tests ====================

    #[test]
    fn test_config_access() {
        let locale = Locale::SPANISH;
        let config = locale.config();
        assert_eq!(config.code, "es");
        assert_eq!(config.name, "Español");
        assert_eq!(config.flag, "🇪🇸");
    }

    #[test]
    fn test_flag() {
        assert_eq!(Locale::ENGLISH.flag(), "🇺🇸");
        assert_eq!(Locale::CHINESE.flag(), "🇨🇳");
        assert_eq!(Locale::SPANISH.flag(), "🇪🇸");
    }

    #[test]
    fn test_strings_accessor() {
        assert_eq!(Locale::ENGLISH.strings().quick_guide, "Quick Guide");
        assert_eq!(Locale::SPANISH.strings().quick_guide, "Guía Rápida");
    }
}
