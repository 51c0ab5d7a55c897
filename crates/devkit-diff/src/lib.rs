//! Line-by-line text comparison
//!
//! Both inputs are normalized (edges trimmed, inner whitespace collapsed,
//! blank lines dropped) and then compared by position. This is not an
//! alignment diff: inserting one line shifts every row below it.

mod processor;
mod render;
mod types;

pub use processor::{compare, normalize, normalize_line, normalize_lines, summarize};
pub use render::{render_side_by_side, render_unified, RenderOptions};
pub use types::{DiffRow, DiffSummary};
