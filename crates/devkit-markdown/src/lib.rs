//! Markdown to HTML
//!
//! Rendering goes through `pulldown-cmark`. Every event passes through
//! [`sanitize_event`] on its way to the HTML writer, so raw HTML in the input
//! comes out escaped and links with script-capable schemes are dropped.

mod render;
mod sanitize;

pub use render::{render_markdown, MarkdownOptions};
pub use sanitize::{is_safe_url, sanitize_event};
