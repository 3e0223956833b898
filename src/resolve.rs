//! Argument-to-path expansion
//!
//! Turns raw CLI arguments into the ordered list of file paths to read.

use std::path::{Path, PathBuf};

/// Expand CLI arguments into an ordered list of file paths.
///
/// An argument naming an existing directory is glob-expanded against the
/// argument string itself; only file entries survive, so a bare directory
/// path with no wildcard matches only itself and contributes zero files.
/// Every other argument passes through unchanged as a literal path - no
/// existence check is made here, a missing file is only discovered at read
/// time. Duplicates are kept and no directory recursion happens.
pub fn resolve_paths(args: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for arg in args {
        if Path::new(arg).is_dir() {
            files.extend(expand_dir(arg));
        } else {
            files.push(PathBuf::from(arg));
        }
    }
    files
}

/// Glob-expand a directory-named argument.
///
/// Invalid patterns and unreadable entries fold to zero paths rather than
/// erroring; `glob` yields entries in alphabetical order.
fn expand_dir(pattern: &str) -> Vec<PathBuf> {
    match glob::glob(pattern) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_file())
            .collect(),
        Err(_) => Vec::new(),
    }
}
