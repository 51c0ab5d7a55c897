use pulldown_cmark::{CowStr, Event, Tag};
use tracing::debug;

const SAFE_SCHEMES: [&str; 5] = ["http", "https", "mailto", "tel", "ftp"];

const BLOCKED_URL: &str = "#";

/// Make one parser event safe to write out.
///
/// Raw HTML becomes text (and so gets escaped); link and image targets with
/// a scheme outside [`SAFE_SCHEMES`] are replaced by `#`.
pub fn sanitize_event(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => {
            debug!(len = raw.len(), "escaping raw html");
            Event::Text(raw)
        }
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        debug!(url = %url, "dropping unsafe url");
        CowStr::Borrowed(BLOCKED_URL)
    }
}

/// Relative URLs and the schemes in [`SAFE_SCHEMES`] pass.
///
/// Whitespace and control characters are ignored while looking for the
/// scheme, so `java\tscript:` is still caught.
pub fn is_safe_url(url: &str) -> bool {
    let compact: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    match compact.find([':', '/', '?', '#']) {
        Some(i) if compact[i..].starts_with(':') => SAFE_SCHEMES.contains(&&compact[..i]),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_safe_url() {
        assert!(is_safe_url("https://example.com"));
        assert!(is_safe_url("MAILTO:dev@example.com"));
        assert!(is_safe_url("relative/path:with-colon"));
        assert!(is_safe_url("#section"));
        assert!(is_safe_url(""));

        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url(" JavaScript:alert(1)"));
        assert!(!is_safe_url("java\tscript:alert(1)"));
        assert!(!is_safe_url("vbscript:msgbox"));
        assert!(!is_safe_url("data:text/html,hi"));
    }

    #[test]
    fn test_sanitize_event_passes_text_through() {
        let event = Event::Text(CowStr::Borrowed("<b>"));
        assert_eq!(sanitize_event(event.clone()), event);
    }

    #[test]
    fn test_sanitize_event_turns_html_into_text() {
        let event = Event::InlineHtml(CowStr::Borrowed("<b>"));
        assert_eq!(
            sanitize_event(event),
            Event::Text(CowStr::Borrowed("<b>"))
        );
    }
}
