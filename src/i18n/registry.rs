//! Locale registry: Single source of truth for all supported locales.
//!
//! This module provides a centralized registry of every locale the site is
//! published in. It uses a singleton pattern with `OnceLock` to ensure
//! thread-safe initialization and access.

use std::sync::OnceLock;

use crate::i18n::strings::{CHINESE_STRINGS, ENGLISH_STRINGS, SPANISH_STRINGS};
use crate::i18n::UiStrings;

/// Configuration for a supported locale.
///
/// Contains all metadata for a specific locale: its code, display name,
/// flag glyph, whether it is the default locale, and its UI string catalog.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 locale code (e.g., "en", "zh", "es")
    pub code: &'static str,

    /// Display name of the locale, in the locale itself
    /// (e.g., "English", "中文", "Español")
    pub name: &'static str,

    /// Flag emoji shown next to the locale in switchers (e.g., "🇺🇸")
    pub flag: &'static str,

    /// Whether this is the default locale (only one should be true)
    pub is_default: bool,

    /// Localized user-facing strings for this locale
    pub strings: &'static UiStrings,
}

/// Global locale registry singleton.
///
/// This registry contains all supported locales and provides methods to query
/// and access them. It's initialized once on first access and remains
/// immutable thereafter.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    ///
    /// This method initializes the registry on first call and returns a
    /// reference to the singleton instance on subsequent calls.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 locale code (e.g., "en", "zh")
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale exists
    /// * `None` if the locale is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get all supported locales, in registry order.
    ///
    /// Registry order is what URL lists, locale switchers, and the sitemap
    /// iterate in, so it stays stable across calls.
    pub fn list(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the default locale configuration.
    ///
    /// The default locale is the fallback for missing translations and the
    /// target of `x-default` alternate links. There should be exactly one.
    ///
    /// # Returns
    /// A reference to the default locale configuration.
    ///
    /// # Panics
    /// Panics if no default locale is found or if multiple default locales
    /// are defined (this indicates a configuration error).
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a locale code is supported.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 locale code to check
    ///
    /// # Returns
    /// `true` if the locale exists in the registry, `false` otherwise.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// Default locale configurations.
///
/// This function returns the set of locales the site is published in.
/// English is the default; Chinese and Spanish are full translations.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            flag: "🇺🇸",
            is_default: true,
            strings: &ENGLISH_STRINGS,
        },
        LocaleConfig {
            code: "zh",
            name: "中文",
            flag: "🇨🇳",
            is_default: false,
            strings: &CHINESE_STRINGS,
        },
        LocaleConfig {
            code: "es",
            name: "Español",
            flag: "🇪🇸",
            is_default: false,
            strings: &SPANISH_STRINGS,
        },
    ]
}
