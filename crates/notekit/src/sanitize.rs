//! Title to filename sanitization.
//!
//! Output contains only ASCII letters, digits, `.`, `-`, `_` and single
//! spaces, with no leading or trailing whitespace.
//!
//! # Rules
//! 1. `&` becomes `n`, then every `'` is dropped.
//! 2. Every other character outside the allowed set is replaced in a single
//!    left-to-right pass. Neighbours are read from the string as it stood
//!    before the pass, so runs of disallowed characters never see each
//!    other's replacements:
//!    - alphanumeric on both sides → `-` (`don’t` → `don-t`)
//!    - anything else → space (`Notes: Q3` → `Notes Q3`)
//! 3. Trim, then collapse whitespace runs to one space.
//!
//! The result carries no folder or extension; callers add those.
//!
//! # Examples
//! ```
//! use notekit::sanitize::sanitize_title;
//!
//! assert_eq!(sanitize_title("Tom & Jerry"), "Tom n Jerry");
//! assert_eq!(sanitize_title("don’t panic"), "don-t panic");
//! assert_eq!(sanitize_title("  [Draft]  Plan  "), "Draft Plan");
//! ```

/// Turns an arbitrary title into a filesystem-safe name fragment.
pub fn sanitize_title(title: &str) -> String {
    let substituted: Vec<char> = title.replace('&', "n").replace('\'', "").chars().collect();

    let replaced: String = substituted
        .iter()
        .enumerate()
        .map(|(i, &ch)| {
            if is_allowed(ch) {
                return ch;
            }
            let prev = i.checked_sub(1).and_then(|j| substituted.get(j));
            let next = substituted.get(i + 1);
            match (prev, next) {
                (Some(p), Some(n)) if p.is_ascii_alphanumeric() && n.is_ascii_alphanumeric() => '-',
                _ => ' ',
            }
        })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_allowed(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-' | '_' | ' ')
}
