//! Candidate list loading
//!
//! The list is a plain UTF-8 text file with one name per line. A leading
//! byte-order mark, surrounding spaces and line endings are stripped and blank
//! lines are skipped.

use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};

/// Byte-order mark some editors put in front of UTF-8 files
const BOM: char = '\u{feff}';

/// Parse list text into candidate names, keeping file order
pub fn parse(text: &str) -> Vec<String> {
    text.lines()
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read and parse a candidate list file
pub fn load(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let candidates = parse(&text);
    info!(path = %path.display(), count = candidates.len(), "Loaded candidate list");
    Ok(candidates)
}

fn clean_line(line: &str) -> &str {
    line.trim_matches(|c| matches!(c, ' ' | '\n' | '\r' | '\t'))
        .trim_matches(BOM)
}
