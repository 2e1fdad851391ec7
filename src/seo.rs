//! Canonical URLs, hreflang alternates, and JSON-LD structured data.
//!
//! Pure transforms over site config, locales, and guide records. Nothing
//! here touches the filesystem; rendering layers serialize the returned
//! schema objects straight into page output.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime, SecondsFormat};
use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{FaqEntry, GamePost};
use crate::i18n::Locale;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Name/URL pair fed into item-list and breadcrumb schemas.
#[derive(Debug, Clone)]
pub struct ListedItem {
    pub name: String,
    pub url: String,
}

// ==================== URLs ====================

/// Builds `{site_url}/{locale}{path}`.
///
/// The path gets exactly one leading slash and no trailing slash, so the
/// home page of a locale is `{site_url}/{locale}`.
pub fn canonical_url(config: &SiteConfig, locale: Locale, path: &str) -> String {
    format!(
        "{}/{}{}",
        config.site_url,
        locale.code(),
        normalize_path(path)
    )
}

/// One URL per supported locale plus an `x-default` entry pointing at the
/// default locale. Always has exactly |locales| + 1 entries.
pub fn alternate_map(config: &SiteConfig, path: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for locale in Locale::all() {
        map.insert(
            locale.code().to_string(),
            canonical_url(config, locale, path),
        );
    }
    map.insert(
        "x-default".to_string(),
        canonical_url(config, Locale::default_locale(), path),
    );
    map
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }
    format!("/{}", trimmed)
}

/// Prefixes site-relative URIs with the site origin. Already-absolute
/// URIs pass through untouched.
fn absolutize(config: &SiteConfig, uri: &str) -> String {
    if uri.starts_with("http://") || uri.starts_with("https://") {
        return uri.to_string();
    }
    format!("{}{}", config.site_url, normalize_path(uri))
}

fn full_timestamp(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

// ==================== Schema Objects ====================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub url: String,
    pub description: String,
    pub potential_action: SearchAction,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchAction {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub target: String,
    #[serde(rename = "query-input")]
    pub query_input: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrganizationSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub url: String,
    pub logo: ImageObject,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub headline: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub date_published: String,
    pub date_modified: String,
    pub author: PersonSchema,
    pub publisher: PublisherSchema,
    pub main_entity_of_page: WebPageRef,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonSchema {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublisherSchema {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub logo: ImageObject,
}

#[derive(Debug, Clone, Serialize)]
pub struct WebPageRef {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemListSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub item_list_element: Vec<ListItemSchema>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListItemSchema {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub position: usize,
    pub item: ThingSchema,
}

#[derive(Debug, Clone, Serialize)]
pub struct ThingSchema {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HowToSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub step: Vec<HowToStepSchema>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HowToStepSchema {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub position: usize,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub main_entity: Vec<QuestionSchema>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSchema {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub accepted_answer: AnswerSchema,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerSchema {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub item_list_element: Vec<BreadcrumbItemSchema>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BreadcrumbItemSchema {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub position: usize,
    pub name: String,
    pub item: String,
}

// ==================== Generators ====================

/// Site-wide WebSite schema with the search action.
pub fn website_schema(config: &SiteConfig) -> WebsiteSchema {
    WebsiteSchema {
        context: SCHEMA_CONTEXT,
        schema_type: "WebSite",
        name: config.site_name.clone(),
        url: config.site_url.clone(),
        description: config.site_description.clone(),
        potential_action: SearchAction {
            schema_type: "SearchAction",
            target: format!("{}/search?q={{search_term_string}}", config.site_url),
            query_input: "required name=search_term_string",
        },
    }
}

/// Publisher identity for the site.
pub fn organization_schema(config: &SiteConfig) -> OrganizationSchema {
    OrganizationSchema {
        context: SCHEMA_CONTEXT,
        schema_type: "Organization",
        name: config.site_name.clone(),
        url: config.site_url.clone(),
        logo: ImageObject {
            schema_type: "ImageObject",
            url: absolutize(config, &config.logo_path),
        },
    }
}

/// Article schema for one guide page.
///
/// The cover image is absolutized when site-relative and omitted when the
/// guide has none. Publish and modified timestamps both come from the
/// guide's date, rendered as a full UTC timestamp.
pub fn article_schema(config: &SiteConfig, post: &GamePost, locale: Locale) -> ArticleSchema {
    let timestamp = full_timestamp(post.date);
    let image = if post.cover_image.is_empty() {
        None
    } else {
        Some(absolutize(config, &post.cover_image))
    };

    ArticleSchema {
        context: SCHEMA_CONTEXT,
        schema_type: "Article",
        headline: post.title.clone(),
        description: post.excerpt.clone(),
        image,
        date_published: timestamp.clone(),
        date_modified: timestamp,
        author: PersonSchema {
            schema_type: "Person",
            name: post.author.clone(),
        },
        publisher: PublisherSchema {
            schema_type: "Organization",
            name: config.site_name.clone(),
            logo: ImageObject {
                schema_type: "ImageObject",
                url: absolutize(config, &config.logo_path),
            },
        },
        main_entity_of_page: WebPageRef {
            schema_type: "WebPage",
            id: canonical_url(config, locale, &format!("/games/{}", post.slug)),
        },
    }
}

/// ItemList schema over name/URL pairs, positions 1-indexed in input order.
pub fn item_list_schema(items: &[ListedItem]) -> ItemListSchema {
    ItemListSchema {
        context: SCHEMA_CONTEXT,
        schema_type: "ItemList",
        item_list_element: items
            .iter()
            .enumerate()
            .map(|(index, item)| ListItemSchema {
                schema_type: "ListItem",
                position: index + 1,
                item: ThingSchema {
                    schema_type: "Thing",
                    name: item.name.clone(),
                    url: item.url.clone(),
                },
            })
            .collect(),
    }
}

/// HowTo schema from a name and ordered step texts.
pub fn how_to_schema(name: &str, steps: &[String]) -> HowToSchema {
    HowToSchema {
        context: SCHEMA_CONTEXT,
        schema_type: "HowTo",
        name: name.to_string(),
        step: steps
            .iter()
            .enumerate()
            .map(|(index, text)| HowToStepSchema {
                schema_type: "HowToStep",
                position: index + 1,
                text: text.clone(),
            })
            .collect(),
    }
}

/// FAQPage schema from question/answer pairs.
pub fn faq_schema(entries: &[FaqEntry]) -> FaqSchema {
    FaqSchema {
        context: SCHEMA_CONTEXT,
        schema_type: "FAQPage",
        main_entity: entries
            .iter()
            .map(|entry| QuestionSchema {
                schema_type: "Question",
                name: entry.q.clone(),
                accepted_answer: AnswerSchema {
                    schema_type: "Answer",
                    text: entry.a.clone(),
                },
            })
            .collect(),
    }
}

/// BreadcrumbList schema over name/URL pairs, positions 1-indexed.
pub fn breadcrumb_schema(items: &[ListedItem]) -> BreadcrumbSchema {
    BreadcrumbSchema {
        context: SCHEMA_CONTEXT,
        schema_type: "BreadcrumbList",
        item_list_element: items
            .iter()
            .enumerate()
            .map(|(index, item)| BreadcrumbItemSchema {
                schema_type: "ListItem",
                position: index + 1,
                name: item.name.clone(),
                item: item.url.clone(),
            })
            .collect(),
    }
}

/// Serializes a schema object into the JSON embedded in a page.
pub fn to_json_string<T: Serialize>(schema: &T) -> Result<String> {
    serde_json::to_string(schema).context("Failed to serialize schema object")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::Value;
    use std::path::PathBuf;

    fn test_config() -> SiteConfig {
        SiteConfig {
            site_url: "https://robloxhub.com".to_string(),
            site_name: "RobloxHub - Game Guides & Walkthroughs".to_string(),
            site_description:
                "Your ultimate destination for Roblox game tips, codes, and strategies".to_string(),
            logo_path: "/logo.png".to_string(),
            content_dir: PathBuf::from("posts"),
            output_dir: PathBuf::from("public"),
        }
    }

    fn sample_post() -> GamePost {
        GamePost {
            slug: "blox-fruits".to_string(),
            title: "Blox Fruits Leveling Guide".to_string(),
            category: "Guides".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            read_time: "8 min read".to_string(),
            excerpt: "Level to max fast.".to_string(),
            cover_image: "/images/blox-fruits.png".to_string(),
            author: "RobloxHub Team".to_string(),
            featured: true,
            schema_data: None,
            content: "# Guide".to_string(),
        }
    }

    fn to_value<T: Serialize>(schema: &T) -> Value {
        serde_json::to_value(schema).unwrap()
    }

    // ==================== Canonical URLs ====================

    #[test]
    fn test_canonical_url_home_has_no_trailing_slash() {
        let config = test_config();
        assert_eq!(
            canonical_url(&config, Locale::ENGLISH, ""),
            "https://robloxhub.com/en"
        );
    }

    #[test]
    fn test_canonical_url_article_path() {
        let config = test_config();
        assert_eq!(
            canonical_url(&config, Locale::CHINESE, "/games/blox-fruits"),
            "https://robloxhub.com/zh/games/blox-fruits"
        );
    }

    #[test]
    fn test_canonical_url_adds_missing_leading_slash() {
        let config = test_config();
        assert_eq!(
            canonical_url(&config, Locale::ENGLISH, "games/x"),
            "https://robloxhub.com/en/games/x"
        );
    }

    #[test]
    fn test_canonical_url_strips_trailing_slash() {
        let config = test_config();
        assert_eq!(
            canonical_url(&config, Locale::ENGLISH, "/games/x/"),
            "https://robloxhub.com/en/games/x"
        );
    }

    proptest! {
        #[test]
        fn prop_canonical_url_joins_with_single_slashes(
            lead in 0usize..3,
            trail in 0usize..3,
            segments in proptest::collection::vec("[a-z0-9-]{1,8}", 0..4),
        ) {
            let path = format!(
                "{}{}{}",
                "/".repeat(lead),
                segments.join("/"),
                "/".repeat(trail)
            );
            let config = test_config();
            let url = canonical_url(&config, Locale::ENGLISH, &path);

            prop_assert!(url.starts_with("https://robloxhub.com/en"));
            prop_assert!(!url.ends_with('/'));
            prop_assert!(!url["https://".len()..].contains("//"));
        }
    }

    // ==================== Alternate Maps ====================

    #[test]
    fn test_alternate_map_has_one_entry_per_locale_plus_x_default() {
        let config = test_config();
        let map = alternate_map(&config, "/games/blox-fruits");
        assert_eq!(map.len(), Locale::all().len() + 1);
        for locale in Locale::all() {
            assert!(map.contains_key(locale.code()));
        }
        assert!(map.contains_key("x-default"));
    }

    #[test]
    fn test_alternate_map_x_default_points_at_default_locale() {
        let config = test_config();
        let map = alternate_map(&config, "/games/blox-fruits");
        assert_eq!(
            map["x-default"],
            canonical_url(&config, Locale::default_locale(), "/games/blox-fruits")
        );
        assert_eq!(map["zh"], "https://robloxhub.com/zh/games/blox-fruits");
    }

    #[test]
    fn test_alternate_map_for_home_page() {
        let config = test_config();
        let map = alternate_map(&config, "");
        assert_eq!(map["en"], "https://robloxhub.com/en");
        assert_eq!(map["x-default"], "https://robloxhub.com/en");
    }

    // ==================== Website and Organization ====================

    #[test]
    fn test_website_schema_shape() {
        let config = test_config();
        let value = to_value(&website_schema(&config));

        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "WebSite");
        assert_eq!(value["name"], "RobloxHub - Game Guides & Walkthroughs");
        assert_eq!(value["potentialAction"]["@type"], "SearchAction");
        assert_eq!(
            value["potentialAction"]["target"],
            "https://robloxhub.com/search?q={search_term_string}"
        );
        assert_eq!(
            value["potentialAction"]["query-input"],
            "required name=search_term_string"
        );
    }

    #[test]
    fn test_organization_schema_logo_is_absolute() {
        let config = test_config();
        let value = to_value(&organization_schema(&config));

        assert_eq!(value["@type"], "Organization");
        assert_eq!(value["logo"]["@type"], "ImageObject");
        assert_eq!(value["logo"]["url"], "https://robloxhub.com/logo.png");
    }

    // ==================== Article ====================

    #[test]
    fn test_article_schema_maps_post_fields() {
        let config = test_config();
        let post = sample_post();
        let value = to_value(&article_schema(&config, &post, Locale::ENGLISH));

        assert_eq!(value["@type"], "Article");
        assert_eq!(value["headline"], "Blox Fruits Leveling Guide");
        assert_eq!(value["description"], "Level to max fast.");
        assert_eq!(value["datePublished"], "2026-01-15T00:00:00Z");
        assert_eq!(value["dateModified"], "2026-01-15T00:00:00Z");
        assert_eq!(value["author"]["@type"], "Person");
        assert_eq!(value["author"]["name"], "RobloxHub Team");
        assert_eq!(value["publisher"]["@type"], "Organization");
        assert_eq!(
            value["publisher"]["logo"]["url"],
            "https://robloxhub.com/logo.png"
        );
        assert_eq!(
            value["mainEntityOfPage"]["@id"],
            "https://robloxhub.com/en/games/blox-fruits"
        );
    }

    #[test]
    fn test_article_schema_absolutizes_relative_cover() {
        let config = test_config();
        let post = sample_post();
        let value = to_value(&article_schema(&config, &post, Locale::ENGLISH));
        assert_eq!(
            value["image"],
            "https://robloxhub.com/images/blox-fruits.png"
        );
    }

    #[test]
    fn test_article_schema_keeps_absolute_cover() {
        let config = test_config();
        let mut post = sample_post();
        post.cover_image = "https://cdn.example.com/cover.png".to_string();
        let value = to_value(&article_schema(&config, &post, Locale::ENGLISH));
        assert_eq!(value["image"], "https://cdn.example.com/cover.png");
    }

    #[test]
    fn test_article_schema_omits_missing_cover() {
        let config = test_config();
        let mut post = sample_post();
        post.cover_image = String::new();
        let value = to_value(&article_schema(&config, &post, Locale::ENGLISH));
        assert!(value.get("image").is_none());
    }

    // ==================== Item Lists ====================

    #[test]
    fn test_item_list_schema_positions_are_one_indexed() {
        let items = vec![
            ListedItem {
                name: "A".to_string(),
                url: "u1".to_string(),
            },
            ListedItem {
                name: "B".to_string(),
                url: "u2".to_string(),
            },
        ];
        let value = to_value(&item_list_schema(&items));

        let elements = value["itemListElement"].as_array().unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0]["position"], 1);
        assert_eq!(elements[0]["item"]["name"], "A");
        assert_eq!(elements[0]["item"]["url"], "u1");
        assert_eq!(elements[1]["position"], 2);
        assert_eq!(elements[1]["item"]["name"], "B");
    }

    #[test]
    fn test_item_list_schema_empty_input() {
        let value = to_value(&item_list_schema(&[]));
        assert_eq!(value["@type"], "ItemList");
        assert!(value["itemListElement"].as_array().unwrap().is_empty());
    }

    // ==================== HowTo, FAQ, Breadcrumbs ====================

    #[test]
    fn test_how_to_schema_steps() {
        let steps = vec!["Join the game".to_string(), "Pick a fruit".to_string()];
        let value = to_value(&how_to_schema("How to play Blox Fruits", &steps));

        assert_eq!(value["@type"], "HowTo");
        assert_eq!(value["name"], "How to play Blox Fruits");
        let rendered = value["step"].as_array().unwrap();
        assert_eq!(rendered[0]["@type"], "HowToStep");
        assert_eq!(rendered[0]["position"], 1);
        assert_eq!(rendered[0]["text"], "Join the game");
        assert_eq!(rendered[1]["position"], 2);
    }

    #[test]
    fn test_faq_schema_questions_and_answers() {
        let entries = vec![FaqEntry {
            q: "Is it free?".to_string(),
            a: "Yes, with optional passes.".to_string(),
        }];
        let value = to_value(&faq_schema(&entries));

        assert_eq!(value["@type"], "FAQPage");
        let main = value["mainEntity"].as_array().unwrap();
        assert_eq!(main[0]["@type"], "Question");
        assert_eq!(main[0]["name"], "Is it free?");
        assert_eq!(main[0]["acceptedAnswer"]["@type"], "Answer");
        assert_eq!(main[0]["acceptedAnswer"]["text"], "Yes, with optional passes.");
    }

    #[test]
    fn test_breadcrumb_schema_positions_and_items() {
        let items = vec![
            ListedItem {
                name: "Home".to_string(),
                url: "https://robloxhub.com/en".to_string(),
            },
            ListedItem {
                name: "Games".to_string(),
                url: "https://robloxhub.com/en/games".to_string(),
            },
        ];
        let value = to_value(&breadcrumb_schema(&items));

        assert_eq!(value["@type"], "BreadcrumbList");
        let elements = value["itemListElement"].as_array().unwrap();
        assert_eq!(elements[0]["position"], 1);
        assert_eq!(elements[0]["name"], "Home");
        assert_eq!(elements[0]["item"], "https://robloxhub.com/en");
        assert_eq!(elements[1]["position"], 2);
    }

    // ==================== Serialization ====================

    #[test]
    fn test_to_json_string_is_compact() {
        let config = test_config();
        let json = to_json_string(&website_schema(&config)).unwrap();
        assert!(json.starts_with("{\"@context\":\"https://schema.org\""));
        assert!(!json.contains('\n'));
    }
}
