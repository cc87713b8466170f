//! Labeled web links.
//!
//! `https://docs.rs/url` renders as `"[Docs](https://docs.rs/url)"`. The label
//! comes from the host name: strip a leading `www.`, then take the
//! second-to-last label when there are more than two, otherwise the first,
//! and capitalize it.
//!
//! Multi-part public suffixes come out as the suffix (`example.co.uk` →
//! `Co`). Hosts rely on that label today, so it is kept as is.
//!
//! Parsing is local string work only. A scheme-less input is parsed with the
//! default scheme prepended, but the rendered link always carries the input
//! exactly as given.

use super::quoted;
use std::borrow::Cow;
use url::Url;

/// Formats a single URL or a newline-separated block of URLs.
///
/// Blank lines are skipped and each remaining line becomes one link on its
/// own line. Empty input yields an empty string.
pub fn run(input: &str, quote: bool, default_scheme: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    if input.contains('\n') {
        return input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| format_one(line, quote, default_scheme))
            .collect::<Vec<_>>()
            .join("\n");
    }

    format_one(input.trim(), quote, default_scheme)
}

/// Formats each URL independently. Output positions match input positions;
/// blank entries come back as empty strings.
pub fn run_many<S: AsRef<str>>(urls: &[S], quote: bool, default_scheme: &str) -> Vec<String> {
    urls.iter()
        .map(|url| {
            let url = url.as_ref().trim();
            if url.is_empty() {
                String::new()
            } else {
                format_one(url, quote, default_scheme)
            }
        })
        .collect()
}

fn format_one(url: &str, quote: bool, default_scheme: &str) -> String {
    let parseable: Cow<'_, str> = if has_scheme(url) {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("{}://{}", default_scheme, url))
    };

    let parsed = match Url::parse(&parseable) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(url, error = %e, "Invalid URL passed to web link formatting");
            return url.to_string();
        }
    };

    match parsed.host_str().filter(|host| !host.is_empty()) {
        Some(host) => quoted(format!("[{}]({})", domain_label(host), url), quote),
        None => {
            tracing::warn!(url, "URL has no host name");
            url.to_string()
        }
    }
}

/// Derives the display label from a host name.
pub fn domain_label(host: &str) -> String {
    let host = host.strip_prefix("www.").unwrap_or(host);
    let parts: Vec<&str> = host.split('.').collect();
    let domain = if parts.len() > 2 {
        parts[parts.len() - 2]
    } else {
        parts[0]
    };
    capitalize(domain)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `scheme://` prefix per RFC 3986: a letter followed by letters, digits, `+`, `-` or `.`.
fn has_scheme(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(url: &str) -> String {
        run(url, true, "https")
    }

    #[test]
    fn two_label_host_uses_first_label() {
        assert_eq!(
            link("https://docs.rs/url"),
            "\"[Docs](https://docs.rs/url)\""
        );
        assert_eq!(link("example.com"), "\"[Example](example.com)\"");
    }

    #[test]
    fn www_is_stripped() {
        assert_eq!(
            link("https://www.github.com/rust-lang"),
            "\"[Github](https://www.github.com/rust-lang)\""
        );
    }

    #[test]
    fn subdomain_uses_second_to_last_label() {
        assert_eq!(
            link("http://blog.example.org/post"),
            "\"[Example](http://blog.example.org/post)\""
        );
    }

    #[test]
    fn multi_part_suffix_labels_the_suffix() {
        assert_eq!(
            link("www.Example.co.uk/page"),
            "\"[Co](www.Example.co.uk/page)\""
        );
    }

    #[test]
    fn single_label_host() {
        assert_eq!(
            link("localhost:3000/health"),
            "\"[Localhost](localhost:3000/health)\""
        );
    }

    #[test]
    fn quoting_can_be_suppressed() {
        assert_eq!(
            run("rust-lang.org", false, "https"),
            "[Rust-lang](rust-lang.org)"
        );
    }

    #[test]
    fn malformed_url_falls_back_to_raw_input() {
        assert_eq!(link("https://exa mple.com"), "https://exa mple.com");
        assert_eq!(link("http://"), "http://");
    }

    #[test]
    fn empty_input_is_empty_string() {
        assert_eq!(link(""), "");
        assert_eq!(link("  \n  "), "");
    }

    #[test]
    fn newline_block_formats_each_line() {
        let block = "  https://docs.rs  \n\nexample.com\n";
        assert_eq!(
            link(block),
            "\"[Docs](https://docs.rs)\"\n\"[Example](example.com)\""
        );
    }

    #[test]
    fn many_preserves_positions() {
        let out = run_many(&["example.com", " ", " https://docs.rs "], true, "https");
        assert_eq!(
            out,
            vec![
                "\"[Example](example.com)\"".to_string(),
                String::new(),
                "\"[Docs](https://docs.rs)\"".to_string(),
            ]
        );
    }

    #[test]
    fn scheme_detection() {
        assert!(has_scheme("https://a.b"));
        assert!(has_scheme("git+ssh://host/repo"));
        assert!(!has_scheme("www.example.com/a://b"));
        assert!(!has_scheme("example.com"));
    }
}
