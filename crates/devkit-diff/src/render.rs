//! Text rendering of comparison rows

use super::types::DiffRow;
use devkit_core::DiffConfig;

const ELLIPSIS: &str = "...";

/// Options for side-by-side output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Width of the old column, in characters
    pub width: usize,
    /// Skip rows where both sides match
    pub only_changes: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&DiffConfig::default())
    }
}

impl From<&DiffConfig> for RenderOptions {
    fn from(config: &DiffConfig) -> Self {
        Self {
            width: config.width,
            only_changes: config.only_changes,
        }
    }
}

/// Render rows as two columns.
///
/// Each row is `"{marker} {old} | {new}"`, where the marker is `!` for rows
/// that differ. The old column is padded or truncated to `width`.
pub fn render_side_by_side(rows: &[DiffRow], options: &RenderOptions) -> String {
    let mut result = String::new();

    for row in rows {
        if options.only_changes && !row.is_different {
            continue;
        }
        let marker = if row.is_different { '!' } else { ' ' };
        let old = fit_to_width(&row.old_line, options.width);
        let line = format!("{} {} | {}", marker, old, row.new_line);
        result.push_str(line.trim_end());
        result.push('\n');
    }

    result
}

/// Render rows as a unified listing.
///
/// Equal rows are indented by two spaces; a differing row becomes a `-`
/// line followed by a `+` line, leaving out a side that is empty.
pub fn render_unified(rows: &[DiffRow]) -> String {
    let mut result = String::new();

    for row in rows {
        if !row.is_different {
            result.push_str(&format!("  {}\n", row.old_line));
            continue;
        }
        if !row.old_line.is_empty() {
            result.push_str(&format!("- {}\n", row.old_line));
        }
        if !row.new_line.is_empty() {
            result.push_str(&format!("+ {}\n", row.new_line));
        }
    }

    result
}

fn fit_to_width(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return format!("{:<width$}", text, width = width);
    }
    if width <= ELLIPSIS.len() {
        return text.chars().take(width).collect();
    }
    let kept: String = text.chars().take(width - ELLIPSIS.len()).collect();
    format!("{}{}", kept, ELLIPSIS)
}
