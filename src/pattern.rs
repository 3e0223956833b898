//! Compiled search patterns
//!
//! The name disjunction and the whitespace pattern are immutable
//! process-wide values, built once on first use.

use once_cell::sync::Lazy;
use regex::bytes::{Regex, RegexBuilder};

/// Name tokens matched as whole words, case-insensitively.
///
/// The CLI keeps a search-term slot for surface compatibility, but matching
/// always uses this list; the slot is resolved as a path pattern like every
/// other argument.
pub const NAME_TERMS: &[&str] = &["williams", "smith", "jones"];

/// Join literal alternatives into one non-capturing alternation group.
fn disjunct(terms: &[&str]) -> String {
    format!("(?:{})", terms.join("|"))
}

/// The compiled name pattern: the term disjunction anchored with a word
/// boundary on each side, matched over raw bytes so undecodable input
/// cannot hide a hit.
pub static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(&format!(r"\b{}\b", disjunct(NAME_TERMS)))
        .case_insensitive(true)
        .multi_line(true)
        .dot_matches_new_line(true)
        .build()
        .expect("invalid name pattern")
});

/// Whitespace runs of any length, collapsed to a single space during
/// normalization.
pub static SPACE_RE: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"\s+").expect("invalid whitespace pattern"));
