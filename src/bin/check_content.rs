//! Content check binary - validates every guide file and reports problems
//! without building anything.
//!
//! Usage:
//!   cargo run --bin check-content              # Report errors and warnings
//!   cargo run --bin check-content -- --strict  # Non-zero exit on warnings too
//!
//! Optional environment variables:
//! - CONTENT_DIR (defaults to posts)

use std::process::ExitCode;

use anyhow::Result;

use guidehub::config::SiteConfig;
use guidehub::content::validator::ContentValidator;
use guidehub::content::ContentStore;
use guidehub::i18n::Locale;

fn main() -> Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("guidehub=info".parse().unwrap()),
        )
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    let strict = args.iter().any(|arg| arg == "--strict");

    let config = SiteConfig::from_env()?;
    let store = ContentStore::new(&config.content_dir);

    println!();
    println!("Checking content under {}", config.content_dir.display());
    println!();

    for locale in Locale::all() {
        let slugs = store.list_slugs(locale)?;
        println!(
            "  {} {} ({}): {} file(s)",
            locale.flag(),
            locale.name(),
            locale.code(),
            slugs.len()
        );
    }
    println!();

    let findings = ContentValidator::validate_tree(&config.content_dir)?;

    if findings.is_empty() {
        println!("All content files are clean.");
        return Ok(ExitCode::SUCCESS);
    }

    let mut error_count = 0;
    let mut warning_count = 0;
    for finding in &findings {
        println!("{}", finding.path);
        for error in &finding.report.errors {
            println!("  error: {}", error);
        }
        for warning in &finding.report.warnings {
            println!("  warning: {}", warning);
        }
        println!();
        error_count += finding.report.errors.len();
        warning_count += finding.report.warnings.len();
    }

    println!(
        "{} error(s), {} warning(s) across {} file(s)",
        error_count,
        warning_count,
        findings.len()
    );

    if error_count > 0 || (strict && warning_count > 0) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
