//! Structured note identity.
//!
//! A note is identified by the folders leading to it (relative to the vault
//! root) and its file stem. The identity is independent of the platform's
//! path separator; its display form always uses `/`.

use std::cmp::Ordering;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::slug::normalize;

/// File suffix of note sources.
pub const NOTE_EXTENSION: &str = "md";

/// File suffix of exported pages.
pub const HTML_EXTENSION: &str = "html";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoteId {
    segments: Vec<String>,
    name: String,
}

impl NoteId {
    /// Build an identity from a path relative to the vault root.
    ///
    /// A trailing `.md` is stripped from the last component; `.` components
    /// are ignored. Non-UTF-8 components are converted lossily, which only
    /// affects display.
    pub fn from_relative_path(path: &Path) -> Self {
        let mut parts: Vec<String> = path
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        let last = parts.pop().unwrap_or_default();
        let name = last
            .strip_suffix(&format!(".{NOTE_EXTENSION}"))
            .map_or_else(|| last.clone(), ToString::to_string);

        Self { segments: parts, name }
    }

    /// Folders between the vault root and the note.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// File stem of the note.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical cross-reference key.
    pub fn slug(&self) -> String {
        normalize(&self.to_string())
    }

    /// Page location relative to the output directory.
    pub fn html_path(&self) -> PathBuf {
        let mut path: PathBuf = self.segments.iter().collect();
        path.push(format!("{}.{HTML_EXTENSION}", self.name));
        path
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{segment}/")?;
        }
        f.write_str(&self.name)
    }
}

impl Ord for NoteId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_string().cmp(&other.to_string())
    }
}

impl PartialOrd for NoteId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
