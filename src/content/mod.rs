//! File-backed guide content.
//!
//! Guides live under `{content_root}/{locale}/{slug}.mdx`. Each file is
//! frontmatter plus a markdown body, parsed on demand into a [`GamePost`].
//! Lookups fall back to the default locale when a translation is missing;
//! listings never fall back.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::i18n::Locale;

mod front_matter;
pub mod validator;

use front_matter::{extract_bool, extract_string};

/// Why a single content file could not be turned into a [`GamePost`].
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("frontmatter fence is never closed")]
    UnclosedFrontMatter,
    #[error("missing required field 'date'")]
    MissingDate,
    #[error("invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },
}

/// One localized guide article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePost {
    /// Stable identifier. Defaults to the file stem, but frontmatter may
    /// override it.
    pub slug: String,
    pub title: String,
    pub category: String,
    pub date: NaiveDate,
    pub read_time: String,
    pub excerpt: String,
    pub cover_image: String,
    pub author: String,
    /// Featured guides rank before everything else on listing surfaces.
    pub featured: bool,
    /// Optional structured extras for schema generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_data: Option<SchemaData>,
    /// Markdown body with embedded widget blocks, not parsed further here.
    pub content: String,
}

/// Structured extras a guide can carry for richer page schemas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub how_to: Option<HowToData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faq: Vec<FaqEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HowToData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub q: String,
    pub a: String,
}

/// Read-only store over the per-locale content tree.
///
/// Every operation is a fresh filesystem scan. Nothing is cached, so the
/// store can be shared freely and never goes stale within a build.
pub struct ContentStore {
    content_root: PathBuf,
}

impl ContentStore {
    pub fn new(content_root: &Path) -> Self {
        Self {
            content_root: content_root.to_path_buf(),
        }
    }

    fn locale_dir(&self, locale: Locale) -> PathBuf {
        self.content_root.join(locale.code())
    }

    /// Returns every guide for a locale, newest first.
    ///
    /// A missing locale directory yields an empty list. Files that fail to
    /// parse are logged and skipped so one bad guide cannot take down a
    /// whole listing. Date ties keep filename order.
    pub fn list_all(&self, locale: Locale) -> Result<Vec<GamePost>> {
        let dir = self.locale_dir(locale);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("No content directory for locale '{}'", locale.code());
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read content directory {}", dir.display()))
            }
        };

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("mdx") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut posts: Vec<GamePost> = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();
        for path in paths {
            let post = match load_post(&path) {
                Ok(post) => post,
                Err(err) => {
                    warn!("Skipping {}: {}", path.display(), err);
                    continue;
                }
            };
            // Slug overrides can collide across files. Last file wins so
            // the record set stays deterministic.
            match seen.get(&post.slug) {
                Some(&index) => {
                    warn!(
                        "Duplicate slug '{}' in locale '{}', keeping the later file",
                        post.slug,
                        locale.code()
                    );
                    posts[index] = post;
                }
                None => {
                    seen.insert(post.slug.clone(), posts.len());
                    posts.push(post);
                }
            }
        }

        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }

    /// Resolves one guide by slug.
    ///
    /// When the requested locale has no file and is not the default, the
    /// default locale's file is tried instead. A file that exists but does
    /// not parse is treated as absent, never as a partial record, and never
    /// triggers the fallback.
    pub fn get_by_slug(&self, slug: &str, locale: Locale) -> Option<GamePost> {
        match self.load_by_slug(slug, locale) {
            Ok(Some(post)) => return Some(post),
            Ok(None) => {}
            Err(err) => {
                warn!("Unreadable guide '{}' [{}]: {}", slug, locale.code(), err);
                return None;
            }
        }

        let default = Locale::default_locale();
        if locale == default {
            return None;
        }

        debug!(
            "No '{}' file for '{}', falling back to '{}'",
            locale.code(),
            slug,
            default.code()
        );
        match self.load_by_slug(slug, default) {
            Ok(post) => post,
            Err(err) => {
                warn!("Unreadable guide '{}' [{}]: {}", slug, default.code(), err);
                None
            }
        }
    }

    /// File stems for a locale, sorted. Empty when the directory is absent.
    pub fn list_slugs(&self, locale: Locale) -> Result<Vec<String>> {
        let dir = self.locale_dir(locale);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read content directory {}", dir.display()))
            }
        };

        let mut slugs: Vec<String> = Vec::new();
        for entry in entries {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("mdx") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                slugs.push(stem.to_string());
            }
        }
        slugs.sort();
        Ok(slugs)
    }

    /// Guides with `featured=true` ranked before all others, truncated to
    /// `limit`. Within each group the date-descending order is preserved.
    pub fn get_featured(&self, locale: Locale, limit: usize) -> Result<Vec<GamePost>> {
        let mut posts = self.list_all(locale)?;
        posts.sort_by_key(|post| !post.featured);
        posts.truncate(limit);
        Ok(posts)
    }

    /// The `limit` newest guides for a locale.
    pub fn get_recent(&self, locale: Locale, limit: usize) -> Result<Vec<GamePost>> {
        let mut posts = self.list_all(locale)?;
        posts.truncate(limit);
        Ok(posts)
    }

    fn load_by_slug(&self, slug: &str, locale: Locale) -> Result<Option<GamePost>, ParseError> {
        let path = self.locale_dir(locale).join(format!("{slug}.mdx"));
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(ParseError::Io {
                    path: path.display().to_string(),
                    source: err,
                })
            }
        };
        parse_post(&raw, &path).map(Some)
    }
}

fn load_post(path: &Path) -> Result<GamePost, ParseError> {
    let raw = fs::read_to_string(path).map_err(|err| ParseError::Io {
        path: path.display().to_string(),
        source: err,
    })?;
    parse_post(&raw, path)
}

fn parse_post(raw: &str, path: &Path) -> Result<GamePost, ParseError> {
    let (fields, body) = front_matter::split(raw)?;
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();

    let date_raw = extract_string(&fields, "date").ok_or(ParseError::MissingDate)?;
    let date = NaiveDate::parse_from_str(&date_raw, "%Y-%m-%d")
        .map_err(|_| ParseError::InvalidDate { value: date_raw })?;

    let schema_data = fields.get("schemaData").and_then(|value| {
        match serde_json::from_value::<SchemaData>(value.clone()) {
            Ok(data) => Some(data),
            Err(err) => {
                warn!("Ignoring malformed schemaData in {}: {}", path.display(), err);
                None
            }
        }
    });

    Ok(GamePost {
        slug: extract_string(&fields, "slug").unwrap_or_else(|| stem.to_string()),
        title: extract_string(&fields, "title").unwrap_or_default(),
        category: extract_string(&fields, "category").unwrap_or_default(),
        date,
        read_time: extract_string(&fields, "readTime").unwrap_or_default(),
        excerpt: extract_string(&fields, "excerpt").unwrap_or_default(),
        cover_image: extract_string(&fields, "coverImage").unwrap_or_default(),
        author: extract_string(&fields, "author").unwrap_or_default(),
        featured: extract_bool(&fields, "featured").unwrap_or(false),
        schema_data,
        content: body,
    })
}

static IMAGE_REF_REGEX: OnceLock<Regex> = OnceLock::new();

/// Collects image URIs referenced by `![alt](uri)` syntax, in document
/// order. Alt text may itself contain brackets or parentheses.
pub fn extract_image_refs(body: &str) -> Vec<String> {
    let regex = IMAGE_REF_REGEX
        .get_or_init(|| Regex::new(r"!\[.*?\]\((.*?)\)").expect("image regex should compile"));
    regex
        .captures_iter(body)
        .map(|caps| caps[1].to_string())
        .collect()
}
