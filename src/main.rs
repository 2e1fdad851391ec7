use std::fs;

use anyhow::{Context, Result};
use tracing::{info, warn};

use guidehub::config::SiteConfig;
use guidehub::content::validator::ContentValidator;
use guidehub::content::ContentStore;
use guidehub::i18n::Locale;
use guidehub::sitemap;

fn main() -> Result<()> {
    // Load .env file (ignored in production/CI)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("guidehub=info".parse()?),
        )
        .init();

    info!("Starting sitemap build");

    // Load configuration from environment
    let config = SiteConfig::from_env()?;
    let store = ContentStore::new(&config.content_dir);

    // Step 1: Survey content per locale
    for locale in Locale::all() {
        let posts = store.list_all(locale)?;
        info!(
            "{} {} ({}): {} guide(s)",
            locale.flag(),
            locale.name(),
            locale.code(),
            posts.len()
        );
    }

    // Step 2: Validate the content tree
    info!("Validating content files");
    let findings = ContentValidator::validate_tree(&config.content_dir)?;
    let mut broken_files = 0;
    for finding in &findings {
        for error in &finding.report.errors {
            warn!("{}: {}", finding.path, error);
        }
        for warning in &finding.report.warnings {
            warn!("{}: {}", finding.path, warning);
        }
        if finding.report.has_errors() {
            broken_files += 1;
        }
    }
    if broken_files > 0 {
        warn!("{} file(s) will be skipped by the content store", broken_files);
    }

    // Step 3: Build the sitemap
    info!("Building sitemap");
    let entries = sitemap::build_sitemap(&store, &config)?;
    info!("Built {} sitemap entries", entries.len());

    // Step 4: Render and write it out
    let xml = sitemap::render_xml(&entries);
    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("Failed to create {}", config.output_dir.display()))?;
    let output_path = config.output_dir.join("sitemap.xml");
    fs::write(&output_path, xml)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!("Sitemap written to {}", output_path.display());
    Ok(())
}
