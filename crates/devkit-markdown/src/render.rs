use crate::sanitize::sanitize_event;
use pulldown_cmark::{html, Event, Options, Parser};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Tables, strikethrough and task lists
    pub gfm: bool,
    /// Render single newlines inside a paragraph as `<br />`
    pub breaks: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            gfm: true,
            breaks: true,
        }
    }
}

impl MarkdownOptions {
    fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
        } else {
            Options::empty()
        }
    }
}

/// Render markdown to an HTML fragment with raw HTML escaped
pub fn render_markdown(markdown: &str, options: &MarkdownOptions) -> String {
    let breaks = options.breaks;
    let events = Parser::new_ext(markdown, options.parser_options())
        .map(|event| match event {
            Event::SoftBreak if breaks => Event::HardBreak,
            other => other,
        })
        .map(sanitize_event);

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, events);

    debug!(input = markdown.len(), output = output.len(), "rendered markdown");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(markdown: &str) -> String {
        render_markdown(markdown, &MarkdownOptions::default())
    }

    #[test]
    fn test_render_basic() {
        assert_eq!(
            render("# Hello World\n\nThis is a **markdown** preview."),
            "<h1>Hello World</h1>\n<p>This is a <strong>markdown</strong> preview.</p>\n"
        );
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(render("a\nb"), "<p>a<br />\nb</p>\n");

        let options = MarkdownOptions {
            breaks: false,
            ..MarkdownOptions::default()
        };
        assert_eq!(render_markdown("a\nb", &options), "<p>a\nb</p>\n");
    }

    #[test]
    fn test_gfm_extensions() {
        let table = "| a | b |\n|---|---|\n| 1 | 2 |\n";
        assert!(render(table).contains("<table>"));
        assert!(render("~~gone~~").contains("<del>gone</del>"));

        let plain = MarkdownOptions {
            gfm: false,
            ..MarkdownOptions::default()
        };
        assert!(!render_markdown(table, &plain).contains("<table>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render("<script>alert(1)</script>\n");
        assert!(!html.contains("<script"));
        assert!(html.contains("&lt;script&gt;"));

        let html = render("hi <img src=x onerror=alert(1)> there");
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_unsafe_links_are_neutralized() {
        let html = render("[click](javascript:alert(1))");
        assert!(!html.contains("javascript"));
        assert!(html.contains(r##"href="#""##));

        let html = render("![pic](data:text/html;base64,AAAA)");
        assert!(!html.contains("data:"));
    }

    #[test]
    fn test_safe_links_are_kept() {
        assert!(render("[site](https://example.com/a?b=1)")
            .contains(r#"href="https://example.com/a?b=1""#));
        assert!(render("[doc](docs/readme.md)").contains(r#"href="docs/readme.md""#));
    }
}
