//! Short, human-typeable identifiers.
//!
//! An identifier is the current Unix timestamp in base 62, optionally
//! prefixed with `label-` and decorated with a marker glyph:
//!
//! ```text
//! 🆔 mtg-1XkF9q
//! ^  ^   ^
//! |  |   base-62 seconds since the epoch
//! |  label (optional)
//! marker (optional, cosmetic)
//! ```
//!
//! Identifiers sort with wall-clock time at one-second resolution. The
//! generator is stateless, so two identifiers minted within the same second
//! are identical. Callers that mint in bursts must disambiguate themselves
//! (for example with distinct labels).

/// Digits, then lowercase, then uppercase.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u64 = 62;

/// Builds an identifier from a timestamp. Negative timestamps encode as zero.
pub fn run(timestamp: i64, label: Option<&str>, marker: Option<&str>) -> String {
    let encoded = encode_base62(u64::try_from(timestamp).unwrap_or(0));

    let label_part = match label {
        Some(label) if !label.is_empty() => format!("{}-", label),
        _ => String::new(),
    };

    match marker.filter(|m| !m.is_empty()) {
        Some(marker) => format!("{} {}{}", marker, label_part, encoded),
        None => format!("{}{}", label_part, encoded),
    }
}

pub fn encode_base62(mut value: u64) -> String {
    let mut digits = Vec::new();
    loop {
        digits.push(ALPHABET[(value % BASE) as usize] as char);
        value /= BASE;
        if value == 0 {
            break;
        }
    }
    digits.iter().rev().collect()
}

/// Decodes base-62 digits, `None` on an empty string, a foreign symbol or overflow.
pub fn decode_base62(digits: &str) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }
    digits.bytes().try_fold(0u64, |acc, byte| {
        let value = ALPHABET.iter().position(|&symbol| symbol == byte)? as u64;
        acc.checked_mul(BASE)?.checked_add(value)
    })
}

/// Recovers the timestamp from a full identifier, ignoring marker and label.
pub fn decode_identifier(identifier: &str) -> Option<u64> {
    let digits = identifier.rsplit([' ', '-']).next()?;
    decode_base62(digits)
}
