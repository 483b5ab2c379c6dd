use scraper::{ElementRef, Html, Node, Selector};
use tracing::warn;

/// Text under these elements never renders.
const HIDDEN_TEXT_PARENTS: [&str; 4] = ["script", "style", "noscript", "template"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub href: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    pub src: Option<String>,
    pub alt: Option<String>,
    pub loading: Option<String>,
}

/// A parsed page. The regions several signals share are scanned once here;
/// everything else goes through `select` and friends.
pub struct PageDocument {
    html: Html,
    title: Option<String>,
    description: Option<String>,
    anchors: Vec<Anchor>,
    images: Vec<Image>,
    heading_levels: Vec<u8>,
    json_ld_blocks: Vec<String>,
    visible_text: String,
}

impl PageDocument {
    pub fn parse(markup: &str) -> Self {
        let html = Html::parse_document(markup);

        let title = select_all(&html, "title")
            .first()
            .map(|element| element.text().collect::<String>())
            .filter(|title| !title.is_empty());

        let description = select_all(&html, r#"meta[name="description"]"#)
            .first()
            .and_then(|element| element.value().attr("content"))
            .filter(|content| !content.is_empty())
            .map(|content| content.to_owned());

        let anchors = select_all(&html, "a[href]")
            .iter()
            .filter_map(|element| {
                element.value().attr("href").map(|href| Anchor {
                    href: href.to_owned(),
                    text: element.text().collect::<String>(),
                })
            })
            .collect();

        let images = select_all(&html, "img")
            .iter()
            .map(|element| {
                let attr = |name: &str| element.value().attr(name).map(|v| v.to_owned());
                Image {
                    src: attr("src"),
                    alt: attr("alt"),
                    loading: attr("loading"),
                }
            })
            .collect();

        let heading_levels = select_all(&html, "h1, h2, h3, h4, h5, h6")
            .iter()
            .filter_map(|element| element.value().name()[1..].parse::<u8>().ok())
            .collect();

        let json_ld_blocks = select_all(&html, r#"script[type="application/ld+json"]"#)
            .iter()
            .map(|element| element.text().collect::<String>())
            .collect();

        let visible_text = collect_visible_text(&html);

        Self {
            html,
            title,
            description,
            anchors,
            images,
            heading_levels,
            json_ld_blocks,
            visible_text,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn images(&self) -> &[Image] {
        &self.images
    }

    /// Heading levels (1 to 6) in document order.
    pub fn heading_levels(&self) -> &[u8] {
        &self.heading_levels
    }

    pub fn json_ld_blocks(&self) -> &[String] {
        &self.json_ld_blocks
    }

    pub fn visible_text(&self) -> &str {
        &self.visible_text
    }

    pub fn word_count(&self) -> usize {
        self.visible_text.split_whitespace().count()
    }

    pub fn link_hrefs(&self) -> Vec<String> {
        self.anchors.iter().map(|anchor| anchor.href.clone()).collect()
    }

    pub fn select(&self, css: &str) -> Vec<ElementRef<'_>> {
        select_all(&self.html, css)
    }

    pub fn count(&self, css: &str) -> usize {
        self.select(css).len()
    }

    pub fn exists(&self, css: &str) -> bool {
        self.count(css) > 0
    }

    /// Value of `attr` on the first element matching `css`.
    pub fn first_attr(&self, css: &str, attr: &str) -> Option<String> {
        self.select(css)
            .first()
            .and_then(|element| element.value().attr(attr))
            .map(|value| value.to_owned())
    }
}

fn select_all<'a>(html: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => html.select(&selector).collect(),
        Err(e) => {
            warn!("Failed to parse selector '{}': {}", css, e);
            Vec::new()
        }
    }
}

fn collect_visible_text(html: &Html) -> String {
    let mut text = String::new();
    for node in html.tree.root().descendants() {
        if let Node::Text(fragment) = node.value() {
            let hidden = node
                .parent()
                .and_then(|parent| parent.value().as_element().map(|element| element.name()))
                .is_some_and(|name| HIDDEN_TEXT_PARENTS.contains(&name));
            if !hidden {
                text.push_str(&fragment.text);
            }
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <title>Hello</title>
  <meta name="description" content="">
  <style>body { color: red; }</style>
  <script type="application/ld+json">{"@type": "Article"}</script>
</head>
<body>
  <h2>Second</h2><h1>First</h1>
  <p>Some <b>visible</b> text</p>
  <script>var hidden = true;</script>
  <a href="/about">About us</a><a>No href</a>
  <img src="a.png" alt="A"><img src="b.png">
</body>
</html>"#;

    #[test]
    fn shared_regions_are_scanned_once() {
        let document = PageDocument::parse(PAGE);
        assert_eq!(document.title(), Some("Hello"));
        assert_eq!(document.description(), None);
        assert_eq!(document.heading_levels(), [2, 1]);
        assert_eq!(document.anchors().len(), 1);
        assert_eq!(document.anchors()[0].text, "About us");
        assert_eq!(document.images().len(), 2);
        assert_eq!(document.images()[1].alt, None);
        assert_eq!(document.json_ld_blocks().len(), 1);
    }

    #[test]
    fn visible_text_skips_scripts_and_styles() {
        let document = PageDocument::parse(PAGE);
        let text = document.visible_text();
        assert!(text.contains("Some visible text"));
        assert!(!text.contains("hidden"));
        assert!(!text.contains("color"));
        assert!(!text.contains("@type"));
    }

    #[test]
    fn invalid_selector_matches_nothing() {
        let document = PageDocument::parse(PAGE);
        assert_eq!(document.count("[[["), 0);
        assert_eq!(document.first_attr("html", "lang").as_deref(), Some("en"));
    }

    #[test]
    fn empty_document_has_no_words() {
        let document = PageDocument::parse("");
        assert_eq!(document.word_count(), 0);
        assert_eq!(document.title(), None);
    }
}
