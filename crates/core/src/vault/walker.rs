//! Vault directory traversal.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::error::ErrorKind;
use crate::identity::NOTE_EXTENSION;

#[derive(Debug, Error)]
pub enum VaultWalkerError {
    #[error("vault root does not exist: {0}")]
    MissingRoot(String),

    #[error("extra folder does not exist: {0}")]
    MissingFolder(String),

    #[error("failed to walk vault directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

impl VaultWalkerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingRoot(_) | Self::MissingFolder(_) => ErrorKind::NotFound,
            Self::WalkError(..) => ErrorKind::Io,
        }
    }
}

/// A file found under the vault root.
#[derive(Debug, Clone)]
pub struct WalkedFile {
    /// Absolute path to the file.
    pub absolute_path: PathBuf,
    /// Path relative to vault root.
    pub relative_path: PathBuf,
}

/// Walker for discovering note files in a vault.
#[derive(Debug)]
pub struct VaultWalker {
    root: PathBuf,
    /// Folders to exclude from walking (relative paths from vault root).
    excluded_folders: Vec<PathBuf>,
}

impl VaultWalker {
    pub fn new(root: &Path) -> Result<Self, VaultWalkerError> {
        Self::with_exclusions(root, Vec::new())
    }

    /// Create a walker that skips the given folders.
    ///
    /// Excluded folders can be relative to the vault root or absolute
    /// (converted to relative).
    pub fn with_exclusions(
        root: &Path,
        excluded_folders: Vec<PathBuf>,
    ) -> Result<Self, VaultWalkerError> {
        let root = root
            .canonicalize()
            .map_err(|_| VaultWalkerError::MissingRoot(root.display().to_string()))?;

        if !root.is_dir() {
            return Err(VaultWalkerError::MissingRoot(root.display().to_string()));
        }

        let excluded_folders = excluded_folders
            .into_iter()
            .map(|p| {
                if p.is_absolute() {
                    p.strip_prefix(&root).unwrap_or(&p).to_path_buf()
                } else {
                    p
                }
            })
            .collect();

        Ok(Self { root, excluded_folders })
    }

    /// Every note file located inside a subdirectory of the root, at any
    /// depth. Files directly in the root are not returned.
    pub fn walk_subfolders(&self) -> Result<Vec<WalkedFile>, VaultWalkerError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e))
        {
            let entry = entry.map_err(|e| {
                VaultWalkerError::WalkError(self.root.display().to_string(), e)
            })?;

            if entry.depth() < 2 || !entry.file_type().is_file() || !is_note_file(entry.path())
            {
                continue;
            }

            files.push(self.walked(entry.path()));
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(files)
    }

    /// Note files directly inside `folder` (relative to the root). Not recursive.
    pub fn list_folder(&self, folder: &Path) -> Result<Vec<WalkedFile>, VaultWalkerError> {
        let dir = self.root.join(folder);
        if !dir.is_dir() {
            return Err(VaultWalkerError::MissingFolder(dir.display().to_string()));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
            let entry = entry
                .map_err(|e| VaultWalkerError::WalkError(dir.display().to_string(), e))?;

            if entry.file_type().is_file() && is_note_file(entry.path()) {
                files.push(self.walked(entry.path()));
            }
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(files)
    }

    /// Every non-note file under the root, at any depth, skipping `skip`
    /// (typically the export directory when it lives inside the vault).
    pub fn walk_assets(&self, skip: Option<&Path>) -> Result<Vec<WalkedFile>, VaultWalkerError> {
        let skip = skip.and_then(|p| p.canonicalize().ok());
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| {
                !self.is_excluded(e) && skip.as_deref().is_none_or(|s| e.path() != s)
            })
        {
            let entry = entry.map_err(|e| {
                VaultWalkerError::WalkError(self.root.display().to_string(), e)
            })?;

            if entry.file_type().is_file() && !is_note_file(entry.path()) {
                files.push(self.walked(entry.path()));
            }
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(files)
    }

    fn walked(&self, path: &Path) -> WalkedFile {
        let relative_path = path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();
        WalkedFile { absolute_path: path.to_path_buf(), relative_path }
    }

    /// Check if an entry should be excluded from walking.
    fn is_excluded(&self, entry: &walkdir::DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }

        // Only directories are pruned; files are filtered by extension.
        if !entry.file_type().is_dir() {
            return false;
        }

        if let Ok(relative) = entry.path().strip_prefix(&self.root) {
            return self.excluded_folders.iter().any(|excluded| relative.starts_with(excluded));
        }

        false
    }

    /// Get the (canonical) vault root path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_note_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == NOTE_EXTENSION)
}
