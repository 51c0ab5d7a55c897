//! Normalization and positional comparison

use super::types::{DiffRow, DiffSummary};
use tracing::debug;

/// Unicode White_Space plus the byte order mark (U+FEFF), minus NEL (U+0085)
fn is_line_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Trim a line and collapse every inner whitespace run to one space
pub fn normalize_line(line: &str) -> String {
    line.split(is_line_space)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split on `\n`, normalize each line and drop the ones left empty
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(normalize_line)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Normalized text re-joined with `\n`
pub fn normalize(text: &str) -> String {
    normalize_lines(text).join("\n")
}

/// Normalized text split back into lines; blank input is one empty line
fn split_normalized(text: &str) -> Vec<String> {
    let lines = normalize_lines(text);
    if lines.is_empty() {
        return vec![String::new()];
    }
    lines
}

/// Compare two text blocks row by row after normalization.
///
/// The result has `max(len(normalize(old).split('\n')), len(normalize(new).split('\n')))`
/// rows, so two blank inputs still give one equal, empty row. Never fails.
pub fn compare(old_text: &str, new_text: &str) -> Vec<DiffRow> {
    let old_lines = split_normalized(old_text);
    let new_lines = split_normalized(new_text);
    let max_length = old_lines.len().max(new_lines.len());

    debug!(
        old = old_lines.len(),
        new = new_lines.len(),
        rows = max_length,
        "comparing normalized lines"
    );

    (0..max_length)
        .map(|i| {
            let old_line = old_lines.get(i).map(String::as_str).unwrap_or("");
            let new_line = new_lines.get(i).map(String::as_str).unwrap_or("");
            DiffRow::new(old_line, new_line)
        })
        .collect()
}

/// Count equal and differing rows
pub fn summarize(rows: &[DiffRow]) -> DiffSummary {
    let different = rows.iter().filter(|row| row.is_different).count();
    DiffSummary {
        total: rows.len(),
        same: rows.len() - different,
        different,
    }
}
