//! Front-matter parsing and validation
//!
//! A content file starts with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Hello
//! date: 2024-01-01
//! description: A first post
//! categories: [Test]
//! ---
//! Markdown body...
//! ```
//!
//! The block is parsed loosely as YAML and then validated field by field into
//! [`Metadata`], so a malformed file yields a [`FrontMatterError`] naming the
//! offending field instead of a half-filled value.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use super::error::FrontMatterError;

/// Fence line that opens and closes the front-matter block
pub const DELIMITER: &str = "---";

/// Typed front matter of a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    /// Publish date as written in the file (ISO-8601, `YYYY-MM-DD` prefix)
    pub date: String,
    pub description: String,
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Metadata {
    /// Validate a raw YAML block into typed metadata
    pub fn parse(block: &str) -> Result<Self, FrontMatterError> {
        let mapping = match serde_yaml::from_str::<Value>(block)? {
            Value::Mapping(mapping) => mapping,
            Value::Null => Mapping::new(),
            _ => {
                return Err(FrontMatterError::InvalidField {
                    field: "front matter",
                    message: "expected a mapping of keys to values".to_string(),
                })
            }
        };

        let title = required_string(&mapping, "title")?;
        if title.trim().is_empty() {
            return Err(FrontMatterError::InvalidField {
                field: "title",
                message: "must not be empty".to_string(),
            });
        }

        let date = required_string(&mapping, "date")?;
        validate_date(&date)?;

        let description = required_string(&mapping, "description")?;

        let categories = match mapping.get("categories") {
            None => return Err(FrontMatterError::MissingField("categories")),
            Some(value) => string_list(value, "categories")?,
        };

        let image = match mapping.get("image") {
            None | Some(Value::Null) => None,
            Some(value) => Some(scalar_string(value).ok_or_else(|| {
                FrontMatterError::InvalidField {
                    field: "image",
                    message: "expected a string".to_string(),
                }
            })?),
        };

        Ok(Self {
            title,
            date,
            description,
            categories,
            image,
        })
    }

    /// Render this metadata as a fenced YAML block
    pub fn to_block(&self) -> Result<String, FrontMatterError> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(format!("{DELIMITER}\n{yaml}{DELIMITER}\n"))
    }
}

/// Split a document into its raw front-matter block and body
///
/// The body is returned verbatim, starting right after the closing fence line.
pub fn split(content: &str) -> Result<(&str, &str), FrontMatterError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let content = content.trim_start_matches(['\n', '\r']);

    let mut lines = content.split_inclusive('\n');
    let opening = lines.next().ok_or(FrontMatterError::Missing)?;
    if opening.trim_end() != DELIMITER {
        return Err(FrontMatterError::Missing);
    }

    let block_start = opening.len();
    let mut offset = block_start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            let block = &content[block_start..offset];
            let body = &content[offset + line.len()..];
            return Ok((block, body));
        }
        offset += line.len();
    }

    Err(FrontMatterError::Unterminated)
}

/// Split and validate a whole document
pub fn parse_document(content: &str) -> Result<(Metadata, String), FrontMatterError> {
    let (block, body) = split(content)?;
    let metadata = Metadata::parse(block)?;
    Ok((metadata, body.to_string()))
}

/// Serialize metadata and body back into a content file
pub fn stringify(metadata: &Metadata, body: &str) -> Result<String, FrontMatterError> {
    let mut out = metadata.to_block()?;
    out.push_str(body);
    Ok(out)
}

fn required_string(mapping: &Mapping, field: &'static str) -> Result<String, FrontMatterError> {
    match mapping.get(field) {
        None | Some(Value::Null) => Err(FrontMatterError::MissingField(field)),
        Some(value) => scalar_string(value).ok_or_else(|| FrontMatterError::InvalidField {
            field,
            message: "expected a string".to_string(),
        }),
    }
}

/// Accepts a single string or a list of strings
fn string_list(value: &Value, field: &'static str) -> Result<Vec<String>, FrontMatterError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Sequence(items) => items
            .iter()
            .map(|item| {
                scalar_string(item).ok_or_else(|| FrontMatterError::InvalidField {
                    field,
                    message: "list entries must be strings".to_string(),
                })
            })
            .collect(),
        other => scalar_string(other)
            .map(|s| vec![s])
            .ok_or_else(|| FrontMatterError::InvalidField {
                field,
                message: "expected a string or a list of strings".to_string(),
            }),
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_string(&tagged.value),
        _ => None,
    }
}

/// Dates are compared as plain strings when sorting, which is only sound for
/// well-formed ISO-8601 values, so anything else is rejected here.
fn validate_date(date: &str) -> Result<(), FrontMatterError> {
    lazy_static! {
        static ref ISO_DATE: Regex = Regex::new(
            r"^[0-9]{4}-[0-9]{2}-[0-9]{2}(?:[T ][0-9]{2}:[0-9]{2}(?::[0-9]{2}(?:\.[0-9]+)?)?(?:Z|[+-][0-9]{2}:?[0-9]{2})?)?$"
        )
        .unwrap();
    }

    let invalid = |message: String| FrontMatterError::InvalidField {
        field: "date",
        message,
    };

    if !ISO_DATE.is_match(date) {
        return Err(invalid(format!("`{}` is not an ISO-8601 date", date)));
    }

    let day = date
        .get(..10)
        .ok_or_else(|| invalid(format!("`{}` is not an ISO-8601 date", date)))?;
    chrono::NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_err(|e| invalid(format!("`{}`: {}", date, e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO: &str = r#"---
title: Hello
date: 2024-01-01
description: d
categories:
  - Test
---
Body text here.
"#;

    #[test]
    fn test_parse_document() {
        let (meta, body) = parse_document(HELLO).unwrap();
        assert_eq!(meta.title, "Hello");
        assert_eq!(meta.date, "2024-01-01");
        assert_eq!(meta.description, "d");
        assert_eq!(meta.categories, vec!["Test"]);
        assert_eq!(meta.image, None);
        assert_eq!(body, "Body text here.\n");
    }

    #[test]
    fn test_single_string_category() {
        let doc = "---\ntitle: T\ndate: 2024-02-03\ndescription: x\ncategories: Notes\n---\n";
        let (meta, body) = parse_document(doc).unwrap();
        assert_eq!(meta.categories, vec!["Notes"]);
        assert_eq!(body, "");
    }

    #[test]
    fn test_empty_categories_stay_empty() {
        let doc = "---\ntitle: T\ndate: 2024-02-03\ndescription: x\ncategories: []\n---\nbody";
        let (meta, _) = parse_document(doc).unwrap();
        assert!(meta.categories.is_empty());
    }

    #[test]
    fn test_crlf_and_image() {
        let doc = "---\r\ntitle: T\r\ndate: 2024-02-03T10:00:00Z\r\ndescription: x\r\ncategories: [A, B]\r\nimage: /img/cover.png\r\n---\r\nbody\r\n";
        let (meta, body) = parse_document(doc).unwrap();
        assert_eq!(meta.image.as_deref(), Some("/img/cover.png"));
        assert_eq!(meta.categories, vec!["A", "B"]);
        assert_eq!(body, "body\r\n");
    }

    #[test]
    fn test_missing_field() {
        let doc = "---\ntitle: T\ndate: 2024-02-03\ncategories: []\n---\n";
        let err = parse_document(doc).unwrap_err();
        assert!(matches!(err, FrontMatterError::MissingField("description")));

        let doc = "---\ntitle: T\ndate: 2024-02-03\ndescription: x\n---\n";
        let err = parse_document(doc).unwrap_err();
        assert!(matches!(err, FrontMatterError::MissingField("categories")));
    }

    #[test]
    fn test_invalid_date() {
        let doc = "---\ntitle: T\ndate: last tuesday\ndescription: x\ncategories: []\n---\n";
        let err = parse_document(doc).unwrap_err();
        assert!(matches!(err, FrontMatterError::InvalidField { field: "date", .. }));

        let doc = "---\ntitle: T\ndate: 2024-02-30\ndescription: x\ncategories: []\n---\n";
        let err = parse_document(doc).unwrap_err();
        assert!(matches!(err, FrontMatterError::InvalidField { field: "date", .. }));
    }

    #[test]
    fn test_non_ascii_digits_in_date() {
        let doc = "---\ntitle: T\ndate: \"२०२४-01-01\"\ndescription: x\ncategories: []\n---\n";
        let err = parse_document(doc).unwrap_err();
        assert!(matches!(err, FrontMatterError::InvalidField { field: "date", .. }));
    }

    #[test]
    fn test_nested_category_rejected() {
        let doc = "---\ntitle: T\ndate: 2024-02-03\ndescription: x\ncategories:\n  - [a, b]\n---\n";
        let err = parse_document(doc).unwrap_err();
        assert!(matches!(err, FrontMatterError::InvalidField { field: "categories", .. }));
    }

    #[test]
    fn test_missing_and_unterminated_fence() {
        assert!(matches!(
            split("# Just markdown\n"),
            Err(FrontMatterError::Missing)
        ));
        assert!(matches!(
            split("---\ntitle: T\n"),
            Err(FrontMatterError::Unterminated)
        ));
    }

    #[test]
    fn test_empty_block_reports_title() {
        let err = parse_document("---\n---\nbody").unwrap_err();
        assert!(matches!(err, FrontMatterError::MissingField("title")));
    }

    #[test]
    fn test_stringify_reads_back() {
        let meta = Metadata {
            title: "Next.js 13 App Router: A Complete Guide".to_string(),
            date: "2023-06-30".to_string(),
            description: "Explore the new App Router.".to_string(),
            categories: vec!["Next.js".to_string(), "React".to_string()],
            image: Some("https://example.com/a.png".to_string()),
        };
        let body = "\n# Heading\n\nSome text with --- inside.\n";

        let doc = stringify(&meta, body).unwrap();
        assert!(doc.starts_with("---\n"));

        let (parsed, parsed_body) = parse_document(&doc).unwrap();
        assert_eq!(parsed, meta);
        assert_eq!(parsed_body, body);
    }
}
