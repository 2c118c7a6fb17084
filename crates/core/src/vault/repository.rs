//! The in-memory note set of a vault.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::walker::{VaultWalker, VaultWalkerError, WalkedFile};
use crate::error::ErrorKind;
use crate::identity::NoteId;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Walker(#[from] VaultWalkerError),

    #[error("failed to read note {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("note is not valid UTF-8: {0}")]
    Encoding(String),
}

impl RepositoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Walker(e) => e.kind(),
            Self::Read { .. } => ErrorKind::Io,
            Self::Encoding(_) => ErrorKind::Encoding,
        }
    }
}

/// A single note: its identity, where it was read from, and its markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub source_path: PathBuf,
    pub content: String,
}

/// All notes of one vault, keyed and ordered by identity.
#[derive(Debug, Clone, Default)]
pub struct NoteRepository {
    notes: BTreeMap<NoteId, Note>,
}

impl NoteRepository {
    /// Discover every note below `root`.
    ///
    /// Notes inside subdirectories are collected recursively; files lying
    /// directly in `root` are only included through an extra folder (`.`
    /// names the root itself). Each extra folder is listed non-recursively.
    /// Any missing folder or unreadable file fails the whole pass.
    pub fn discover(root: &Path, extra_folders: &[String]) -> Result<Self, RepositoryError> {
        Self::discover_excluding(root, extra_folders, Vec::new())
    }

    pub fn discover_excluding(
        root: &Path,
        extra_folders: &[String],
        excluded_folders: Vec<PathBuf>,
    ) -> Result<Self, RepositoryError> {
        let walker = VaultWalker::with_exclusions(root, excluded_folders)?;

        let mut files = walker.walk_subfolders()?;
        for folder in extra_folders {
            let listed = walker.list_folder(Path::new(folder))?;
            debug!(folder = %folder, notes = listed.len(), "scanned extra folder");
            files.extend(listed);
        }

        let mut repo = Self::default();
        for file in files {
            let note = load_note(&file)?;
            debug!(note = %note.id, path = %note.source_path.display(), "discovered note");
            repo.insert(note);
        }

        info!(root = %walker.root().display(), notes = repo.len(), "note discovery complete");
        Ok(repo)
    }

    /// Add a note, replacing any note with the same identity.
    pub fn insert(&mut self, note: Note) {
        self.notes.insert(note.id.clone(), note);
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.get(id)
    }

    /// Iterate notes in identity order.
    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &NoteId> {
        self.notes.keys()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Produce a new snapshot by transforming every note's content.
    pub fn map_content<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&Note) -> String,
    {
        let notes = self
            .notes
            .iter()
            .map(|(id, note)| (id.clone(), Note { content: f(note), ..note.clone() }))
            .collect();
        Self { notes }
    }
}

impl FromIterator<Note> for NoteRepository {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        let mut repo = Self::default();
        for note in iter {
            repo.insert(note);
        }
        repo
    }
}

fn load_note(file: &WalkedFile) -> Result<Note, RepositoryError> {
    let bytes = fs::read(&file.absolute_path).map_err(|e| RepositoryError::Read {
        path: file.absolute_path.display().to_string(),
        source: e,
    })?;

    let content = String::from_utf8(bytes)
        .map_err(|_| RepositoryError::Encoding(file.absolute_path.display().to_string()))?;

    Ok(Note {
        id: NoteId::from_relative_path(&file.relative_path),
        source_path: file.absolute_path.clone(),
        content,
    })
}
