//! Thin wrapper over `scraper` exposing just tag selection and attribute reads.
//!
//! `scraper::Html` is not `Send`, so a [`PageDocument`] must never be held
//! across an `.await`; the orchestrator parses, scans, and drops it in one
//! synchronous step.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("valid img selector"));
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("valid anchor selector"));

pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    /// Parses HTML leniently. Malformed markup yields a best-effort tree, never an error.
    #[must_use]
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// `<img>` elements in document order.
    pub fn images(&self) -> impl Iterator<Item = PageElement<'_>> {
        self.html.select(&IMG_SELECTOR).map(PageElement)
    }

    /// `<a>` elements in document order.
    pub fn anchors(&self) -> impl Iterator<Item = PageElement<'_>> {
        self.html.select(&ANCHOR_SELECTOR).map(PageElement)
    }
}

#[derive(Clone, Copy)]
pub struct PageElement<'a>(ElementRef<'a>);

impl<'a> PageElement<'a> {
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }

    /// Attribute value, or `""` when absent.
    #[must_use]
    pub fn attr_or_empty(&self, name: &str) -> &'a str {
        self.attr(name).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_markup_still_yields_elements() {
        let doc = PageDocument::parse(r#"<div><img src="/a.png" <p>unclosed <a href="/x">x"#);
        assert_eq!(doc.images().count(), 1);
        assert_eq!(doc.anchors().count(), 1);
    }

    #[test]
    fn attributes_are_decoded() {
        let doc = PageDocument::parse(r#"<img src="/logo.png?v=1&amp;w=2" alt="Acme">"#);
        let img = doc.images().next().expect("img element");
        assert_eq!(img.attr("src"), Some("/logo.png?v=1&w=2"));
        assert_eq!(img.attr_or_empty("class"), "");
    }
}
