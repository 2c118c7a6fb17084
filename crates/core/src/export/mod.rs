//! Static HTML export of a vault.

pub mod assets;
pub mod exporter;
pub mod template;

use std::io;

use thiserror::Error;

use crate::error::ErrorKind;
use crate::vault::{RepositoryError, VaultWalkerError};

pub use exporter::{ExportOptions, ExportReport, Exporter, RenderedPage, render_note};
pub use template::{PageTemplate, TemplateError};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Walker(#[from] VaultWalkerError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write page {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: String,
        to: String,
        #[source]
        source: io::Error,
    },
}

impl ExportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Repository(e) => e.kind(),
            Self::Walker(e) => e.kind(),
            Self::Template(e) => e.kind(),
            Self::CreateDir { .. } | Self::Write { .. } | Self::Copy { .. } => ErrorKind::Io,
        }
    }
}
