//! CLI module - Command-line interface definitions and the pipeline driver

use anyhow::Result;
use clap::Parser;
use std::collections::BTreeSet;

use crate::report;
use crate::resolve;
use crate::scan;

/// namescan - scan files for a fixed list of name tokens and print
/// deduplicated context snippets.
#[derive(Parser, Debug)]
#[command(name = "namescan")]
#[command(
    author,
    version,
    about,
    long_about = r#"namescan scans files for whole-word, case-insensitive occurrences of a
fixed list of name tokens (williams, smith, jones), slices a small byte
window around every match, normalizes whitespace in each window, and prints
one deduplicated, sorted listing of the resulting context snippets.

The TERM slot is kept for surface compatibility with the original tool, but
the term list is fixed: every positional argument, TERM included, is
resolved as a file path or glob pattern to scan.

Arguments naming an existing directory are glob-expanded (shallow, no
recursion); only file entries survive, so a bare directory path with no
wildcard contributes zero files. All other arguments are read as literal
paths, and a path that cannot be read aborts the whole run.

Examples:
    namescan smith letters/draft.txt
    namescan ignored notes/a.txt notes/b.txt
"#
)]
pub struct Cli {
    /// Search term slot (ignored; the term list is fixed).
    #[arg(
        value_name = "TERM",
        long_help = "Search term slot. The value is not used for matching - the term list\n\
is fixed (williams, smith, jones) - and the argument is resolved as a\n\
path pattern like every other positional argument."
    )]
    pub term: String,

    /// File paths or glob patterns to scan.
    #[arg(value_name = "PATH", num_args = 0..)]
    pub paths: Vec<String>,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    // Every positional argument, the term slot included, is resolved as a
    // path pattern; matching always uses the fixed term list.
    let mut args = Vec::with_capacity(cli.paths.len() + 1);
    args.push(cli.term);
    args.extend(cli.paths);

    let files = resolve::resolve_paths(&args);

    // Only the count line precedes the reads; the separator and the
    // listing come after every file has been processed.
    println!("{}", report::count_line(files.len()));

    let mut contexts: BTreeSet<String> = BTreeSet::new();
    for path in &files {
        let content = scan::read_file_bytes(path)?;
        contexts.extend(scan::extract_contexts(&content));
    }

    println!("{}", report::separator());
    print!("{}", report::render(&contexts));
    Ok(())
}
