//! Wiki reference formatting.
//!
//! Renders logical names as `[[...]]` references, picking the syntax from what
//! the name resolves to:
//!
//! | resolves to                        | rendered              |
//! |------------------------------------|-----------------------|
//! | nothing                            | `[[raw name]]`        |
//! | image attachment                   | `![[file.png]]`       |
//! | other attachment                   | `[[file.pdf]]`        |
//! | note with a distinct `Title`       | `[[basename\|Title]]` |
//! | note without one                   | `[[basename]]`        |
//!
//! Each result is wrapped in double quotes unless quoting is turned off.

use super::quoted;
use crate::config::NotekitConfig;
use crate::model::{FormattedReference, LinkParts, ReferenceInput};
use crate::store::LinkResolver;
use serde_json::Value;

/// Header field holding a note's human-readable title.
pub const TITLE_FIELD: &str = "Title";

const QUOTE_PAIRS: &[(char, char)] = &[('"', '"'), ('\'', '\''), ('“', '”')];

/// Formats one name or a batch of names.
///
/// Returns `None` when there is nothing to format: a blank single name, an
/// empty batch, or a batch of blank names.
pub fn run<R: LinkResolver>(
    resolver: &R,
    input: &ReferenceInput,
    config: &NotekitConfig,
    quote: bool,
) -> Option<FormattedReference> {
    match input {
        ReferenceInput::Single(name) => {
            format_one(resolver, name, config, quote).map(FormattedReference::Single)
        }
        ReferenceInput::Many(names) => {
            let rendered: Vec<String> = names
                .iter()
                .filter_map(|name| format_one(resolver, name, config, quote))
                .collect();
            if rendered.is_empty() {
                None
            } else {
                Some(FormattedReference::Many(rendered))
            }
        }
    }
}

/// Formats a single logical name, `None` if it is blank once unquoted.
pub fn format_one<R: LinkResolver>(
    resolver: &R,
    raw: &str,
    config: &NotekitConfig,
    quote: bool,
) -> Option<String> {
    let name = unquote(raw);
    if name.is_empty() {
        return None;
    }

    let Some(document) = resolver.resolve(name) else {
        tracing::debug!(name, "Unresolved reference");
        return Some(quoted(format!("[[{}]]", name), quote));
    };

    let extension = document.extension();
    let body = if !config.is_primary(&extension) {
        let prefix = if config.is_image(&extension) { "!" } else { "" };
        format!("{}[[{}]]", prefix, document.name())
    } else {
        let header = resolver.read_header(&document);
        match header.get(TITLE_FIELD).and_then(Value::as_str) {
            Some(title) if !title.trim().is_empty() && title != document.basename() => {
                format!("[[{}|{}]]", document.basename(), title)
            }
            _ => format!("[[{}]]", document.basename()),
        }
    };

    Some(quoted(body, quote))
}

/// Trims whitespace and strips one layer of matching surrounding quotes.
pub fn unquote(raw: &str) -> &str {
    let trimmed = raw.trim();
    for &(open, close) in QUOTE_PAIRS {
        if trimmed.chars().count() >= 2 && trimmed.starts_with(open) && trimmed.ends_with(close)
        {
            return trimmed[open.len_utf8()..trimmed.len() - close.len_utf8()].trim();
        }
    }
    trimmed
}

/// Splits `[[filename|display]]` into its parts. Brackets are optional and the
/// display text defaults to the file name.
pub fn clean_link(text: &str) -> Option<LinkParts> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let inner = text.strip_prefix("[[").unwrap_or(text);
    let inner = inner.strip_suffix("]]").unwrap_or(inner);

    let mut parts = inner.split('|');
    let filename = parts.next().unwrap_or_default();
    let display = parts
        .next()
        .filter(|d| !d.is_empty())
        .unwrap_or(filename);

    Some(LinkParts {
        filename: filename.trim().to_string(),
        display: display.trim().to_string(),
    })
}
