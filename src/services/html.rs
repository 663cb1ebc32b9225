use crate::models::link::Link;

/// Controls how link URLs and labels are interpolated into the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escaping {
    /// Escape `&`, `<`, `>`, `"` and `'` so names cannot break the markup.
    Html,
    /// Interpolate bytes as-is, matching the legacy generator.
    Verbatim,
}

/// Minimal escaping, safe for both text content and double-quoted
/// attribute values.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// One anchor line: `<a href="URL">LABEL</a><br>` plus its line break.
pub fn anchor_line(link: &Link, escaping: Escaping) -> String {
    match escaping {
        Escaping::Html => format!(
            "<a href=\"{}\">{}</a><br>\n",
            html_escape(&link.url),
            html_escape(&link.label)
        ),
        Escaping::Verbatim => format!("<a href=\"{}\">{}</a><br>\n", link.url, link.label),
    }
}

/// The bare fragment: anchor lines joined with no separator beyond each
/// line's own trailing markup. Zero links render as the empty string.
pub fn render_fragment(links: &[Link], escaping: Escaping) -> String {
    links.iter().map(|link| anchor_line(link, escaping)).collect()
}

/// A complete HTML5 document carrying the same lines under a title and
/// heading. The title is always escaped; the escaping switch governs only
/// the interpolated names.
pub fn render_document(title: &str, links: &[Link], escaping: Escaping) -> String {
    let title = html_escape(title);
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    out.push_str(&format!("<title>{title}</title>\n"));
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{title}</h1>\n"));
    out.push_str(&render_fragment(links, escaping));
    out.push_str("</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_significant_characters() {
        assert_eq!(html_escape("a&b"), "a&amp;b");
        assert_eq!(html_escape("<x>"), "&lt;x&gt;");
        assert_eq!(html_escape(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(html_escape("it's"), "it&#39;s");
        assert_eq!(html_escape("plain-name_1"), "plain-name_1");
    }

    #[test]
    fn anchor_line_matches_the_fixed_shape() {
        let link = Link::from_name("https://example.com/", "foo");
        assert_eq!(
            anchor_line(&link, Escaping::Html),
            "<a href=\"https://example.com/foo\">foo</a><br>\n"
        );
    }

    #[test]
    fn verbatim_keeps_raw_bytes() {
        let link = Link::from_name("https://example.com/", "a&b");
        assert_eq!(
            anchor_line(&link, Escaping::Verbatim),
            "<a href=\"https://example.com/a&b\">a&b</a><br>\n"
        );
        assert_eq!(
            anchor_line(&link, Escaping::Html),
            "<a href=\"https://example.com/a&amp;b\">a&amp;b</a><br>\n"
        );
    }

    #[test]
    fn fragment_is_the_plain_concatenation() {
        let links = vec![
            Link::from_name("https://example.com/", "a"),
            Link::from_name("https://example.com/", "b"),
        ];
        assert_eq!(
            render_fragment(&links, Escaping::Html),
            "<a href=\"https://example.com/a\">a</a><br>\n<a href=\"https://example.com/b\">b</a><br>\n"
        );
        assert_eq!(render_fragment(&[], Escaping::Html), "");
    }

    #[test]
    fn document_wraps_the_fragment() {
        let links = vec![Link::from_name("https://example.com/", "demo")];
        let doc = render_document("My <Demos>", &links, Escaping::Html);
        assert!(doc.starts_with("<!DOCTYPE html>\n"));
        assert!(doc.contains("<title>My &lt;Demos&gt;</title>"));
        assert!(doc.contains("<h1>My &lt;Demos&gt;</h1>"));
        assert!(doc.contains("<a href=\"https://example.com/demo\">demo</a><br>\n"));
        assert!(doc.ends_with("</body>\n</html>\n"));
    }
}
