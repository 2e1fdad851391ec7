//! Internationalization (i18n) module for multi-locale publishing.
//!
//! This module provides a centralized, extensible architecture for managing
//! the locales the site is published in. All locale metadata, localized UI
//! strings, and locale validation live here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `locale`: Type-safe Locale handle that replaces raw code strings
//! - `strings`: Centralized localized UI strings
//!
//! # Example
//!
//! ```rust,ignore
//! use guidehub::i18n::{Locale, LocaleRegistry};
//!
//! // Get the default locale (English)
//! let default = Locale::default_locale();
//!
//! // Create a locale from a code
//! let chinese = Locale::from_code("zh")?;
//!
//! // List all supported locales
//! let locales = LocaleRegistry::get().list();
//! ```

mod locale;
mod registry;
mod strings;

pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::UiStrings;
