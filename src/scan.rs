//! Binary file reading and per-file context extraction

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::normalize;
use crate::pattern::NAME_RE;

/// Bytes of context kept on each side of a match.
pub const CONTEXT_MARGIN: usize = 10;

/// Read a file fully into memory as raw bytes.
///
/// No size limit and no streaming; the error carries the offending path and
/// propagates to `main`, aborting the run.
pub fn read_file_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Extract one normalized context string per pattern match, in match order.
///
/// Matches are found left to right, non-overlapping. The window around each
/// match is clamped to the buffer bounds, so a match within the first
/// `CONTEXT_MARGIN` bytes starts its context at byte 0.
pub fn extract_contexts(content: &[u8]) -> Vec<String> {
    NAME_RE
        .find_iter(content)
        .map(|m| {
            let start = m.start().saturating_sub(CONTEXT_MARGIN);
            let end = (m.end() + CONTEXT_MARGIN).min(content.len());
            normalize::normalize(&content[start..end])
        })
        .collect()
}
