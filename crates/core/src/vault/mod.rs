//! Vault discovery and the note graph.
//!
//! This module walks the vault, loads notes into a repository, extracts
//! annotated wiki-links and computes backlinks.

pub mod backlinks;
pub mod extractor;
pub mod repository;
pub mod walker;

pub use backlinks::{BacklinkEntry, BacklinkIndex, inject_backlinks};
pub use extractor::{LinkReference, extract_link_refs, extract_links};
pub use repository::{Note, NoteRepository, RepositoryError};
pub use walker::{VaultWalker, VaultWalkerError, WalkedFile};
