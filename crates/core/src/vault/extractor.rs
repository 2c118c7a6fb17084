//! Wiki-link extraction for the backlink graph.
//!
//! Only annotated references count as links here: `[[target|alias]]` and
//! `[[target#header]]`. A bare `[[target]]` is not extracted.

use std::sync::LazyLock;

use regex::{CaptureMatches, Regex};

static ANNOTATED_WIKILINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    // [[target|alias]], [[target#header]], [[target#header|alias]], and
    // [[target\|alias]] as escaped inside markdown tables
    Regex::new(r"\[\[(?P<target>[^\]|#]*?)\\?(?P<sep>[|#])(?P<rest>[^\]]*)\]\]").unwrap()
});

/// A reference found in a note's raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkReference<'a> {
    /// Target as written, before the separator.
    pub target: &'a str,
    /// Alias if present, otherwise the header fragment.
    pub text: Option<&'a str>,
}

/// Iterator over the annotated wiki-links of a document, in source order.
pub struct LinkReferences<'a> {
    captures: CaptureMatches<'static, 'a>,
}

impl<'a> Iterator for LinkReferences<'a> {
    type Item = LinkReference<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.captures.next()?;
        let target = caps.name("target").map_or("", |m| m.as_str());
        let rest = caps.name("rest").map_or("", |m| m.as_str());

        let text = match caps.name("sep").map(|m| m.as_str()) {
            Some("#") => rest.split_once('|').map_or(rest, |(_, alias)| alias),
            _ => rest,
        };

        Some(LinkReference { target, text: (!text.is_empty()).then_some(text) })
    }
}

/// Lazily extract every annotated wiki-link of `content`.
///
/// Duplicates are kept; calling again restarts from the beginning.
pub fn extract_link_refs(content: &str) -> LinkReferences<'_> {
    LinkReferences { captures: ANNOTATED_WIKILINK_RE.captures_iter(content) }
}

/// Raw targets of every annotated wiki-link of `content`.
pub fn extract_links(content: &str) -> impl Iterator<Item = &str> + '_ {
    extract_link_refs(content).map(|link| link.target)
}
