//! Reverse-reference ("backlink") computation.
//!
//! Backlinks are computed from the original content of every note and
//! applied to a new repository snapshot, so later phases never observe a
//! half-updated vault.

use std::collections::HashMap;
use std::fmt::Write as _;

use tracing::info;

use super::extractor::extract_links;
use super::repository::NoteRepository;
use crate::identity::NoteId;
use crate::slug::normalize;

/// One incoming reference, rendered as `[text](link)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BacklinkEntry {
    /// Identity of the referencing note, without extension.
    pub text: String,
    /// Slug of the referencing note.
    pub link: String,
}

/// Incoming references for every note of a repository.
#[derive(Debug, Clone, Default)]
pub struct BacklinkIndex {
    entries: HashMap<NoteId, Vec<BacklinkEntry>>,
}

impl BacklinkIndex {
    /// Scan every note once and attribute each annotated reference to the
    /// notes whose slug it names. A note never backlinks itself. Entries are
    /// not deduplicated.
    pub fn build(repo: &NoteRepository) -> Self {
        let mut by_slug: HashMap<String, Vec<&NoteId>> = HashMap::new();
        for id in repo.ids() {
            by_slug.entry(id.slug()).or_default().push(id);
        }

        let mut entries: HashMap<NoteId, Vec<BacklinkEntry>> = HashMap::new();
        for source in repo.iter() {
            let source_text = source.id.to_string();
            let source_slug = normalize(&source_text);

            for target in extract_links(&source.content) {
                let Some(ids) = by_slug.get(&normalize(target)) else {
                    continue;
                };
                for &id in ids.iter().filter(|&&id| *id != source.id) {
                    entries.entry(id.clone()).or_default().push(BacklinkEntry {
                        text: source_text.clone(),
                        link: source_slug.clone(),
                    });
                }
            }
        }

        for list in entries.values_mut() {
            list.sort_by(|a, b| a.text.cmp(&b.text));
        }

        Self { entries }
    }

    /// Entries for `id`, sorted by display text. Empty if nothing links to it.
    pub fn backlinks_of(&self, id: &NoteId) -> &[BacklinkEntry] {
        self.entries.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Total number of entries across all notes.
    pub fn total(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// A new snapshot of `repo` where every referenced note carries its
    /// backlinks block. Notes without backlinks are copied unchanged.
    pub fn apply(&self, repo: &NoteRepository) -> NoteRepository {
        repo.map_content(|note| {
            let backlinks = self.backlinks_of(&note.id);
            if backlinks.is_empty() {
                note.content.clone()
            } else {
                format!("{}{}", note.content, render_block(backlinks))
            }
        })
    }
}

/// Build the index from `repo` and return the augmented snapshot.
pub fn inject_backlinks(repo: &NoteRepository) -> NoteRepository {
    let index = BacklinkIndex::build(repo);
    info!(backlinks = index.total(), "backlinks computed");
    index.apply(repo)
}

/// Markdown block appended to referenced notes.
pub fn render_block(backlinks: &[BacklinkEntry]) -> String {
    let mut block = String::from("\n\n<div class=\"backlinks\">\n\n## Backlinks\n\n");
    for entry in backlinks {
        let _ = writeln!(block, "- [{}]({})", entry.text, entry.link);
    }
    block.push_str("\n</div>\n");
    block
}
