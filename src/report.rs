//! Output shaping for the final listing

use std::collections::BTreeSet;

/// Width of the visual separator line.
pub const SEPARATOR_WIDTH: usize = 80;

/// The file-count line, printed before any file is read.
pub fn count_line(count: usize) -> String {
    format!("{} files", count)
}

/// The separator between the header and the context listing.
pub fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// Render the deduplicated contexts as indexed, quoted lines.
///
/// `BTreeSet` iteration supplies the ascending lexicographic order; the
/// index is right-aligned in a 3-character field, starting at 0.
pub fn render(contexts: &BTreeSet<String>) -> String {
    let mut out = String::new();
    for (index, context) in contexts.iter().enumerate() {
        out.push_str(&format!("{:>3}: \"{}\"\n", index, context));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_count_line_format() {
        assert_eq!(count_line(0), "0 files");
        assert_eq!(count_line(7), "7 files");
    }

    #[test]
    fn test_separator_is_80_equals() {
        assert_eq!(separator().len(), 80);
        assert!(separator().bytes().all(|b| b == b'='));
    }

    #[test]
    fn test_render_empty_set() {
        assert_eq!(render(&BTreeSet::new()), "");
    }

    #[test]
    fn test_render_indexes_and_quotes_in_order() {
        let rendered = render(&set(&["bbb", "aaa"]));
        assert_eq!(rendered, "  0: \"aaa\"\n  1: \"bbb\"\n");
    }

    #[test]
    fn test_render_index_alignment_past_two_digits() {
        let contexts: BTreeSet<String> = (0..12).map(|i| format!("ctx{:02}", i)).collect();
        let rendered = render(&contexts);
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[9].starts_with("  9: "));
        assert!(lines[10].starts_with(" 10: "));
        assert!(lines[11].starts_with(" 11: "));
    }
}
