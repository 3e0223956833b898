//! namescan - scan files for a fixed list of name tokens
//!
//! namescan provides:
//! - Shell-style glob expansion of directory arguments
//! - Whole-word, case-insensitive matching over raw file bytes
//! - A small context window around every match, whitespace-normalized
//! - One deduplicated, sorted listing of all context snippets

use anyhow::Result;
use clap::Parser;

mod cli;
mod normalize;
mod pattern;
mod report;
mod resolve;
mod scan;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
