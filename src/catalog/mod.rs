//! Static catalog of modal content, keyed by the `data-modal` attribute of the
//! page's "Learn More" buttons.
//!
//! The catalog is built once on first access and never changes afterwards.
//! Unknown keys produce [`SiteError::ContentNotFound`] rather than an empty modal.

pub mod entries;

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use v_htmlescape::escape;

use crate::error::{Result, SiteError};

/// A labelled bullet, rendered as `<li><strong>label:</strong> text</li>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Item {
    pub label: &'static str,
    pub text: &'static str,
}

/// Body of a section. Paragraph text marks emphasis with `**double asterisks**`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "content")]
pub enum Block {
    Paragraph(&'static str),
    List(&'static [Item]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: &'static str,
    pub body: Block,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ModalContentEntry {
    pub key: &'static str,
    pub title: &'static str,
    pub sections: &'static [Section],
}

impl ModalContentEntry {
    /// Render the body as the markup the modal body element expects.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for section in self.sections {
            html.push_str("<div class=\"modal-section\">");
            html.push_str(&format!("<h3>{}</h3>", escape(section.heading)));
            match section.body {
                Block::Paragraph(text) => {
                    html.push_str(&format!("<p>{}</p>", render_emphasis(text)));
                }
                Block::List(items) => {
                    html.push_str("<ul>");
                    for item in items {
                        html.push_str(&format!(
                            "<li><strong>{}:</strong> {}</li>",
                            escape(item.label),
                            escape(item.text)
                        ));
                    }
                    html.push_str("</ul>");
                }
            }
            html.push_str("</div>");
        }
        html
    }
}

/// Escape `text` and turn `**span**` pairs into `<strong>` elements.
/// An unpaired trailing marker is left as literal text.
fn render_emphasis(text: &str) -> String {
    let parts: Vec<&str> = text.split("**").collect();
    let paired = parts.len() % 2 == 1;
    let mut out = String::with_capacity(text.len());
    for (i, part) in parts.iter().enumerate() {
        let is_last = i + 1 == parts.len();
        if i % 2 == 1 && (paired || !is_last) {
            out.push_str(&format!("<strong>{}</strong>", escape(part)));
        } else {
            if i % 2 == 1 {
                out.push_str("**");
            }
            out.push_str(&escape(part).to_string());
        }
    }
    out
}

/// Fixed mapping of content key to modal content.
pub struct Catalog {
    entries: BTreeMap<&'static str, &'static ModalContentEntry>,
}

impl Catalog {
    pub fn new(entries: &'static [ModalContentEntry]) -> Self {
        Self {
            entries: entries.iter().map(|e| (e.key, e)).collect(),
        }
    }

    pub fn get(&self, key: &str) -> Result<&'static ModalContentEntry> {
        self.entries
            .get(key)
            .copied()
            .ok_or_else(|| SiteError::ContentNotFound(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(entries::ENTRIES));

/// The site's modal catalog.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Look up a content key in the site's catalog.
pub fn get_content(key: &str) -> Result<&'static ModalContentEntry> {
    catalog().get(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_key() {
        let urns = get_content("urns").unwrap();
        assert_eq!(urns.title, "Cremation Urns");
        assert_eq!(urns.key, "urns");
    }

    #[test]
    fn test_unknown_key_is_not_found() {
        match get_content("not-a-real-key") {
            Err(SiteError::ContentNotFound(key)) => assert_eq!(key, "not-a-real-key"),
            other => panic!("expected ContentNotFound, got {other:?}"),
        }
        assert!(!catalog().contains(""));
    }

    #[test]
    fn test_keys_are_unique_and_complete() {
        assert_eq!(catalog().len(), entries::ENTRIES.len());
        assert_eq!(catalog().len(), 16);
        assert!(!catalog().is_empty());
        let keys: Vec<&str> = catalog().keys().collect();
        for key in ["body-handling", "headstones", "candles-decor", "digital-memorials"] {
            assert!(keys.contains(&key), "{key}");
        }
    }

    #[test]
    fn test_every_entry_has_sections() {
        for entry in entries::ENTRIES {
            assert!(!entry.title.is_empty());
            assert!(!entry.sections.is_empty(), "{}", entry.key);
        }
    }

    #[test]
    fn test_html_escapes_and_emphasises() {
        let html = get_content("body-handling").unwrap().to_html();
        assert!(html.starts_with("<div class=\"modal-section\"><h3>"));
        assert!(html.contains("<li><strong>Dressing &amp; Presentation:</strong> "));
        assert!(html.contains("start from <strong>R3,500</strong>."));
        assert_eq!(html.matches("<div class=\"modal-section\">").count(), 4);
    }

    #[test]
    fn test_render_emphasis() {
        assert_eq!(render_emphasis("from **R800**"), "from <strong>R800</strong>");
        assert_eq!(render_emphasis("a **b** c **d**"), "a <strong>b</strong> c <strong>d</strong>");
        assert_eq!(render_emphasis("dangling **marker"), "dangling **marker");
        assert_eq!(render_emphasis("x < y"), "x &lt; y");
        assert_eq!(render_emphasis("**<b>&**"), "<strong>&lt;b&gt;&amp;</strong>");
    }
}
