//! Sitemap generation over the locale-aware content tree.
//!
//! Home pages are advertised for every supported locale. Article pages are
//! advertised only for locales that really have a backing file, so crawlers
//! are never pointed at a fallback rendering of an untranslated guide. This
//! is deliberately stricter than content lookup, which does fall back.

use std::collections::{BTreeMap, HashMap, HashSet};

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::debug;

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::i18n::Locale;
use crate::seo::{alternate_map, canonical_url};

/// How often crawlers should expect a page to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
        }
    }
}

/// hreflang links attached to a sitemap entry, locale code or
/// `x-default` to URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alternates {
    pub languages: BTreeMap<String, String>,
}

/// One `<url>` element of the generated sitemap.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: NaiveDate,
    pub change_frequency: ChangeFrequency,
    pub priority: f64,
    pub alternates: Alternates,
}

/// Builds the full sitemap entry list.
///
/// Home entries come first, one per locale. Article entries follow in
/// default-locale listing order: the default locale's records are the
/// canonical slug set, and each slug gets one entry per locale that has a
/// file for it. Alternate links on an article entry are restricted to that
/// same existing-locale set plus `x-default`.
pub fn build_sitemap(store: &ContentStore, config: &SiteConfig) -> Result<Vec<SitemapEntry>> {
    let today = Utc::now().date_naive();
    let mut entries: Vec<SitemapEntry> = Vec::new();

    for locale in Locale::all() {
        entries.push(SitemapEntry {
            url: canonical_url(config, locale, ""),
            last_modified: today,
            change_frequency: ChangeFrequency::Daily,
            priority: 1.0,
            alternates: Alternates {
                languages: alternate_map(config, ""),
            },
        });
    }

    let default = Locale::default_locale();
    let canonical_posts = store.list_all(default)?;

    let mut translated_slugs: HashMap<&'static str, HashSet<String>> = HashMap::new();
    for locale in Locale::all() {
        if locale == default {
            continue;
        }
        let slugs = store.list_slugs(locale)?;
        translated_slugs.insert(locale.code(), slugs.into_iter().collect());
    }

    for post in &canonical_posts {
        let path = format!("/games/{}", post.slug);

        let existing: Vec<Locale> = Locale::all()
            .into_iter()
            .filter(|locale| {
                *locale == default
                    || translated_slugs
                        .get(locale.code())
                        .is_some_and(|slugs| slugs.contains(&post.slug))
            })
            .collect();

        let mut languages = BTreeMap::new();
        for locale in &existing {
            languages.insert(
                locale.code().to_string(),
                canonical_url(config, *locale, &path),
            );
        }
        languages.insert(
            "x-default".to_string(),
            canonical_url(config, default, &path),
        );

        for locale in &existing {
            entries.push(SitemapEntry {
                url: canonical_url(config, *locale, &path),
                last_modified: post.date,
                change_frequency: ChangeFrequency::Weekly,
                priority: 0.8,
                alternates: Alternates {
                    languages: languages.clone(),
                },
            });
        }
    }

    debug!(
        "Built sitemap with {} entries over {} canonical slugs",
        entries.len(),
        canonical_posts.len()
    );
    Ok(entries)
}

/// Renders sitemap entries as a sitemap protocol document with
/// `xhtml:link` alternate elements.
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(
        "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.url)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.last_modified.format("%Y-%m-%d")
        ));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency.as_str()
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        for (hreflang, href) in &entry.alternates.languages {
            xml.push_str(&format!(
                "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>\n",
                escape_xml(hreflang),
                escape_xml(href)
            ));
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Escape special XML characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
