//! Content quality validation module.
//!
//! This module provides validation for guide source files to catch problems
//! before they are silently skipped at parse time (e.g., a broken frontmatter
//! fence, a bad date, missing display metadata).

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use super::front_matter::{self, extract_string};
use super::SchemaData;
use crate::i18n::Locale;

/// Display fields a guide is expected to carry. Their absence never blocks
/// publishing, it just makes a bare-looking page.
const DISPLAY_FIELDS: [&str; 6] = [
    "title",
    "category",
    "excerpt",
    "author",
    "coverImage",
    "readTime",
];

/// Validation report containing errors and warnings about one guide source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical errors: the file will be skipped by the content store
    pub errors: Vec<String>,

    /// Non-critical warnings about degraded output
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validation findings for one file in the content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Path relative to the content root, e.g. `en/blox-fruits.mdx`
    pub path: String,
    pub report: ValidationReport,
}

/// Validator for guide source files.
pub struct ContentValidator;

impl ContentValidator {
    /// Validate one raw guide source.
    ///
    /// Errors mirror what the content store rejects at parse time, so a
    /// clean report guarantees the file will load. Warnings cover fields
    /// the pages render with empty fallbacks.
    pub fn validate_source(raw: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        let (fields, body) = match front_matter::split(raw) {
            Ok(parts) => parts,
            Err(err) => {
                report.errors.push(err.to_string());
                return report;
            }
        };

        match extract_string(&fields, "date") {
            None => report
                .errors
                .push("Missing required field 'date'".to_string()),
            Some(value) => {
                if NaiveDate::parse_from_str(&value, "%Y-%m-%d").is_err() {
                    report
                        .errors
                        .push(format!("Invalid date '{}', expected YYYY-MM-DD", value));
                }
            }
        }

        for field in DISPLAY_FIELDS {
            if extract_string(&fields, field).is_none() {
                report
                    .warnings
                    .push(format!("Missing display field '{}'", field));
            }
        }

        if body.trim().is_empty() {
            report.warnings.push("Body is empty".to_string());
        }

        if let Some(value) = fields.get("schemaData") {
            if let Err(err) = serde_json::from_value::<SchemaData>(value.clone()) {
                report
                    .warnings
                    .push(format!("Malformed schemaData will be ignored: {}", err));
            }
        }

        report
    }

    /// Validate every guide file under the content root.
    ///
    /// Walks each supported locale's directory and returns a report per
    /// file that is not clean, ordered by relative path. Missing locale
    /// directories are fine and are skipped.
    pub fn validate_tree(content_root: &Path) -> Result<Vec<FileReport>> {
        let mut findings: Vec<FileReport> = Vec::new();

        for locale in Locale::all() {
            let dir = content_root.join(locale.code());
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
                Err(err) => {
                    return Err(err)
                        .with_context(|| format!("Failed to read {}", dir.display()))
                }
            };

            for entry in entries {
                let entry = entry.context("Failed to read directory entry")?;
                let path = entry.path();
                if path.extension().and_then(|ext| ext.to_str()) != Some("mdx") {
                    continue;
                }
                let file_name = entry.file_name().to_string_lossy().to_string();
                let rel_path = format!("{}/{}", locale.code(), file_name);

                let report = match fs::read_to_string(&path) {
                    Ok(raw) => Self::validate_source(&raw),
                    Err(err) => {
                        let mut report = ValidationReport::new();
                        report.errors.push(format!("Failed to read file: {}", err));
                        report
                    }
                };

                if !report.is_clean() {
                    findings.push(FileReport {
                        path: rel_path,
                        report,
                    });
                }
            }
        }

        findings.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(findings)
    }
}
