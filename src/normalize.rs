//! Window decoding and whitespace normalization

use crate::pattern::SPACE_RE;

/// Decode bytes as UTF-8, dropping invalid sequences instead of replacing
/// them. Never fails.
pub fn decode_dropping(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// Collapse every maximal whitespace run to a single ASCII space.
pub fn collapse_whitespace(text: &str) -> String {
    SPACE_RE.replace_all(text, " ").into_owned()
}

/// Normalize one raw match window into its context string.
pub fn normalize(window: &[u8]) -> String {
    collapse_whitespace(&decode_dropping(window))
}
