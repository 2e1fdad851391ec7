use std::path::PathBuf;

use anyhow::{bail, Result};

#[derive(Debug, Clone)]
pub struct SiteConfig {
    // Site identity
    pub site_url: String,
    pub site_name: String,
    pub site_description: String,
    pub logo_path: String,

    // Content layout
    pub content_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        let site_url = std::env::var("SITE_URL")
            .unwrap_or_else(|_| "https://robloxhub.com".to_string());
        let site_url = normalize_site_url(&site_url)?;

        Ok(Self {
            site_url,
            site_name: std::env::var("SITE_NAME")
                .unwrap_or_else(|_| "RobloxHub - Game Guides & Walkthroughs".to_string()),
            site_description: std::env::var("SITE_DESCRIPTION").unwrap_or_else(|_| {
                "Your ultimate destination for Roblox game tips, codes, and strategies"
                    .to_string()
            }),
            logo_path: std::env::var("SITE_LOGO_PATH").unwrap_or_else(|_| "/logo.png".to_string()),

            // Content layout
            content_dir: std::env::var("CONTENT_DIR")
                .unwrap_or_else(|_| "posts".to_string())
                .into(),
            output_dir: std::env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| "public".to_string())
                .into(),
        })
    }
}

/// Validate the site origin and strip any trailing slashes so URL building
/// can always join with a single `/`.
fn normalize_site_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');

    if !trimmed.starts_with("https://") && !trimmed.starts_with("http://") {
        bail!("SITE_URL must start with http:// or https://, got '{raw}'");
    }

    Ok(trimmed.to_string())
}
