use crate::report::Link;
use scraper::{Html, Selector};

/// Extracts every anchor element from page HTML, in document order
///
/// Anchors without an href attribute come back with `href: None`; an empty
/// attribute comes back as an empty string. The caller decides what either
/// means. Repeated hrefs are kept once per occurrence so report positions
/// line up with the document.
pub fn extract(html: &str) -> Vec<Link> {
    let doc = Html::parse_document(html);

    let link_selector = Selector::parse("a").unwrap();
    let links: Vec<Link> = doc
        .select(&link_selector)
        .map(|element| {
            let display_text = element
                .text()
                .collect::<Vec<_>>()
                .join(" ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            let href = element.value().attr("href").map(|s| s.to_string());
            Link::new(display_text, href)
        })
        .collect();

    ::log::debug!("Anchor extraction found {} links", links.len());
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_anchors_in_document_order() {
        let html = r#"<html><body>
            <a href="/first">One</a>
            <p>Some text <a href="/second">Two</a></p>
            <a href="/third">Three</a>
        </body></html>"#;

        let links = extract(html);
        assert_eq!(links.len(), 3);
        assert_eq!(links[0].href.as_deref(), Some("/first"));
        assert_eq!(links[1].href.as_deref(), Some("/second"));
        assert_eq!(links[2].href.as_deref(), Some("/third"));
        assert_eq!(links[0].display_text, "One");
    }

    #[test]
    fn test_missing_and_empty_hrefs_are_distinguished() {
        let html = r#"<a>no attribute</a><a href="">empty attribute</a>"#;

        let links = extract(html);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].href, None);
        assert_eq!(links[1].href.as_deref(), Some(""));
    }

    #[test]
    fn test_display_text_is_whitespace_collapsed() {
        let html = "<a href=\"/a\">  Hello\n   <b>nested</b>  world </a>";

        let links = extract(html);
        assert_eq!(links[0].display_text, "Hello nested world");
    }

    #[test]
    fn test_page_without_anchors_yields_nothing() {
        let html = "<html><body><p>No links here</p></body></html>";
        assert!(extract(html).is_empty());
    }

    #[test]
    fn test_repeated_hrefs_are_kept_per_occurrence() {
        let html = r#"<a href="/dup">first</a><a href="/dup">second</a>"#;
        let links = extract(html);
        assert_eq!(links.len(), 2);
    }
}
