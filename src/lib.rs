//! Core library for the RobloxHub guides site.
//!
//! Four pieces: the locale registry (`i18n`), the file-backed content
//! store (`content`), pure SEO/schema generation (`seo`), and the
//! locale-existence-aware sitemap builder (`sitemap`). Binaries wire them
//! together; pages and widgets live in the rendering layer, not here.

pub mod config;
pub mod content;
pub mod i18n;
pub mod seo;
pub mod sitemap;
