//! Frontmatter parsing for `.mdx` content files.
//!
//! A content file may open with a `---` fence followed by `key: value`
//! lines and a closing `---`. Values are kept as loosely-typed JSON so a
//! field can be a quoted string, a bare scalar, a boolean, or an inline
//! JSON object (used by `schemaData`).

use std::collections::BTreeMap;

use serde_json::Value;

use super::ParseError;

/// Splits raw file content into frontmatter fields and the markdown body.
///
/// Files without an opening fence are returned whole as body with no
/// fields. An opening fence without a closing one is an error.
pub(crate) fn split(raw: &str) -> Result<(BTreeMap<String, Value>, String), ParseError> {
    let lines: Vec<&str> = raw.lines().collect();
    if lines.first().map(|line| line.trim_end()) != Some("---") {
        return Ok((BTreeMap::new(), raw.to_string()));
    }

    let close = lines[1..]
        .iter()
        .position(|line| line.trim_end() == "---")
        .ok_or(ParseError::UnclosedFrontMatter)?
        + 1;

    let mut fields = BTreeMap::new();
    for line in &lines[1..close] {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        // Lines without a colon are tolerated and skipped. Only the first
        // colon separates key from value, so values may contain colons.
        let Some((key, value)) = trimmed.split_once(':') else {
            continue;
        };
        fields.insert(key.trim().to_string(), parse_value(value.trim()));
    }

    let body = lines[close + 1..].join("\n");
    Ok((fields, body))
}

/// Interprets a raw frontmatter value.
///
/// Anything that parses as JSON keeps its JSON type, which covers quoted
/// strings, booleans, numbers, and inline objects. Everything else is a
/// bare string, so `date: 2026-01-15` stays the literal text.
fn parse_value(raw: &str) -> Value {
    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        return value;
    }
    let unquoted = raw
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .unwrap_or(raw);
    Value::String(unquoted.to_string())
}

pub(crate) fn extract_string(fields: &BTreeMap<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(|v| v.as_str()).map(|s| s.to_string())
}

pub(crate) fn extract_bool(fields: &BTreeMap<String, Value>, key: &str) -> Option<bool> {
    fields.get(key).and_then(|v| v.as_bool())
}
