//! Rewrites wiki-style links and tags into standard markdown.
//!
//! The rewriter works on text spans only; it needs no knowledge of the
//! rest of the vault. Passes run in [`RewritePass::ORDER`]. The character
//! classes are chosen so that a pass never matches text produced by an
//! earlier pass, and the wiki-link passes never match each other's spans:
//!
//! | pass      | shape                   | target class       |
//! |-----------|-------------------------|--------------------|
//! | aliased   | `[[t\|text]]`           | no `]` or `\|`     |
//! | header    | `[[t#h]]`               | no `]`, `\|`, `#`  |
//! | plain     | `[[t]]`                 | no `]`, `\|`, `#`  |

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::identity::HTML_EXTENSION;
use crate::slug::normalize;

static MARKDOWN_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(?P<text>[^\]]+)\]\((?P<target>[^)]+?)\.md\)").unwrap()
});

static ALIASED_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    // `\|` is the table-escaped form of the pipe
    Regex::new(r"\[\[(?P<target>[^\]|]*?)\\?\|(?P<text>[^\]]*)\]\]").unwrap()
});

static HEADER_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[(?P<target>[^\]|#]*)#(?P<header>[^\]|]*)\]\]").unwrap()
});

static PLAIN_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[(?P<target>[^\]|#]*)\]\]").unwrap());

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<lead>\s)#(?P<tag>[\p{L}_]+)").unwrap());

/// One rewriting step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewritePass {
    /// `[text](note.md)` → `[text](note.html)`
    MarkdownLinks,
    /// `[[target|text]]` → `[text](slug)`
    AliasedLinks,
    /// `[[target#header]]` → `[header](slug#header-slug)`
    HeaderLinks,
    /// `[[target]]` → `[slug](slug)`
    PlainLinks,
    /// ` #tag` → ` <span class="tag">tag</span>`
    Tags,
}

impl RewritePass {
    /// Application order. Header links must run before tags, otherwise
    /// `[[Plan #Goals]]` would lose its fragment to a tag span.
    pub const ORDER: [RewritePass; 5] = [
        RewritePass::MarkdownLinks,
        RewritePass::AliasedLinks,
        RewritePass::HeaderLinks,
        RewritePass::PlainLinks,
        RewritePass::Tags,
    ];

    pub fn apply(self, text: &str) -> Cow<'_, str> {
        match self {
            RewritePass::MarkdownLinks => {
                MARKDOWN_LINK_RE.replace_all(text, |caps: &Captures<'_>| {
                    format!("[{}]({}.{HTML_EXTENSION})", &caps["text"], &caps["target"])
                })
            }
            RewritePass::AliasedLinks => {
                ALIASED_LINK_RE.replace_all(text, |caps: &Captures<'_>| {
                    let link = match caps["target"].split_once('#') {
                        Some((target, header)) => anchored(target, header),
                        None => normalize(&caps["target"]),
                    };
                    md_link(&caps["text"], &link)
                })
            }
            RewritePass::HeaderLinks => {
                HEADER_LINK_RE.replace_all(text, |caps: &Captures<'_>| {
                    md_link(&caps["header"], &anchored(&caps["target"], &caps["header"]))
                })
            }
            RewritePass::PlainLinks => {
                PLAIN_LINK_RE.replace_all(text, |caps: &Captures<'_>| {
                    let slug = normalize(&caps["target"]);
                    md_link(&slug, &slug)
                })
            }
            RewritePass::Tags => TAG_RE.replace_all(text, |caps: &Captures<'_>| {
                format!("{}<span class=\"tag\">{}</span>", &caps["lead"], &caps["tag"])
            }),
        }
    }
}

/// Rewrite every link and tag of `content`, then re-escape braces for the
/// markdown renderer.
pub fn rewrite(content: &str) -> String {
    escape_braces(&rewrite_links(content))
}

/// Apply all passes in order. Idempotent on its own output.
pub fn rewrite_links(content: &str) -> String {
    RewritePass::ORDER
        .iter()
        .fold(content.to_string(), |text, pass| pass.apply(&text).into_owned())
}

/// The renderer drops one level of escaping from `\{` and `\}`; double it.
pub fn escape_braces(content: &str) -> String {
    content.replace(r"\{", r"\\{").replace(r"\}", r"\\}")
}

fn anchored(target: &str, header: &str) -> String {
    format!("{}#{}", normalize(target), normalize(header))
}

fn md_link(text: &str, link: &str) -> String {
    format!("[{text}]({link})")
}
