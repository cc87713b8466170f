//! Front-matter extraction for markdown documents.
//!
//! A header is a YAML mapping fenced by `---` lines at the very top of the
//! document:
//!
//! ```text
//! ---
//! Title: Quarterly Planning
//! tags: [planning]
//! ---
//! Body starts here.
//! ```
//!
//! Documents without a fence have an empty header.

use crate::error::{NotekitError, Result};
use crate::model::Header;
use serde_json::Value;

const FENCE: &str = "---";

/// Parses the leading YAML block of `text` into a [`Header`].
pub fn parse_front_matter(text: &str) -> Result<Header> {
    let Some(yaml) = front_matter_block(text) else {
        return Ok(Header::new());
    };

    if yaml.trim().is_empty() {
        return Ok(Header::new());
    }

    let value: Value =
        serde_yaml::from_str(yaml).map_err(|e| NotekitError::Header(e.to_string()))?;

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Header::new()),
        other => Err(NotekitError::Header(format!(
            "front-matter must be a mapping, found {}",
            value_kind(&other)
        ))),
    }
}

fn front_matter_block(text: &str) -> Option<&str> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split_inclusive('\n');

    let first = lines.next()?;
    if first.trim_end() != FENCE {
        return None;
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if line.trim_end() == FENCE {
            return Some(&text[start..offset]);
        }
        offset += line.len();
    }
    None
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mapping() {
        let text = "---\nTitle: Quarterly Planning\ncount: 3\n---\nBody";
        let header = parse_front_matter(text).unwrap();
        assert_eq!(header["Title"], "Quarterly Planning");
        assert_eq!(header["count"], 3);
    }

    #[test]
    fn no_fence_means_empty_header() {
        let header = parse_front_matter("Just a body\n---\nnot: header\n---").unwrap();
        assert!(header.is_empty());
    }

    #[test]
    fn unterminated_fence_means_empty_header() {
        let header = parse_front_matter("---\nTitle: Dangling\nbody").unwrap();
        assert!(header.is_empty());
    }

    #[test]
    fn empty_block_is_empty_header() {
        let header = parse_front_matter("---\n---\nBody").unwrap();
        assert!(header.is_empty());
    }

    #[test]
    fn crlf_fences_are_accepted() {
        let header = parse_front_matter("---\r\nTitle: Windows\r\n---\r\nBody").unwrap();
        assert_eq!(header["Title"], "Windows");
    }

    #[test]
    fn non_mapping_is_an_error() {
        let err = parse_front_matter("---\n- a\n- b\n---\n").unwrap_err();
        assert!(err.to_string().contains("a list"));
    }
}
