//! The export pipeline.
//!
//! Phases run strictly one after another over the whole vault:
//! discovery, backlinks, rewrite + render, write, asset copy. Each phase
//! reads a complete snapshot produced by the previous one.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::ExportError;
use super::assets::copy_assets;
use super::template::PageTemplate;
use crate::config::types::{ResolvedConfig, default_out_dir};
use crate::identity::NoteId;
use crate::links::rewrite;
use crate::render::render_markdown;
use crate::vault::{BacklinkIndex, Note, NoteRepository, VaultWalker};

/// What to export and where.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub vault_root: PathBuf,
    pub extra_folders: Vec<String>,
    pub html_template: Option<PathBuf>,
    /// Defaults to `<vault_root>/html`.
    pub out_dir: Option<PathBuf>,
    pub excluded_folders: Vec<PathBuf>,
}

impl ExportOptions {
    pub fn new(vault_root: impl Into<PathBuf>) -> Self {
        Self { vault_root: vault_root.into(), ..Self::default() }
    }

    pub fn out_dir(&self) -> PathBuf {
        self.out_dir.clone().unwrap_or_else(|| default_out_dir(&self.vault_root))
    }
}

impl From<&ResolvedConfig> for ExportOptions {
    fn from(cfg: &ResolvedConfig) -> Self {
        Self {
            vault_root: cfg.vault_root.clone(),
            extra_folders: cfg.extra_folders.clone(),
            html_template: cfg.html_template.clone(),
            out_dir: Some(cfg.out_dir.clone()),
            excluded_folders: cfg.excluded_folders.clone(),
        }
    }
}

/// A note rendered to an HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub id: NoteId,
    pub title: String,
    pub html: String,
}

/// Summary of an export run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub notes: usize,
    pub backlinks: usize,
    pub pages_written: usize,
    pub assets_copied: usize,
    pub out_dir: PathBuf,
}

pub struct Exporter {
    options: ExportOptions,
}

impl Exporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Run the whole pipeline. Any failure aborts the run; missing inputs
    /// are reported before anything is written.
    pub fn run(&self) -> Result<ExportReport, ExportError> {
        let template =
            self.options.html_template.as_deref().map(PageTemplate::load).transpose()?;

        let walker = VaultWalker::with_exclusions(
            &self.options.vault_root,
            self.options.excluded_folders.clone(),
        )?;

        let repo = NoteRepository::discover_excluding(
            walker.root(),
            &self.options.extra_folders,
            self.options.excluded_folders.clone(),
        )?;

        let index = BacklinkIndex::build(&repo);
        info!(backlinks = index.total(), "backlinks computed");
        let linked = index.apply(&repo);

        let pages: Vec<RenderedPage> = linked.iter().map(render_note).collect();
        info!(pages = pages.len(), "notes rendered");

        let out_dir = self.options.out_dir();
        create_dir(&out_dir)?;

        for page in &pages {
            write_page(&out_dir, page, template.as_ref())?;
        }

        let assets_copied = copy_assets(&walker, &out_dir)?;
        info!(assets = assets_copied, out_dir = %out_dir.display(), "export complete");

        Ok(ExportReport {
            notes: repo.len(),
            backlinks: index.total(),
            pages_written: pages.len(),
            assets_copied,
            out_dir,
        })
    }
}

/// Rewrite links and render one note.
pub fn render_note(note: &Note) -> RenderedPage {
    debug!(note = %note.id, source = %note.source_path.display(), "rendering note");
    RenderedPage {
        id: note.id.clone(),
        title: note.id.to_string(),
        html: render_markdown(&rewrite(&note.content)),
    }
}

fn write_page(
    out_dir: &Path,
    page: &RenderedPage,
    template: Option<&PageTemplate>,
) -> Result<(), ExportError> {
    let path = out_dir.join(page.id.html_path());
    if let Some(parent) = path.parent() {
        create_dir(parent)?;
    }

    let html = match template {
        Some(tpl) => tpl.render(&page.title, &page.html),
        None => page.html.clone(),
    };

    debug!(path = %path.display(), "writing page");
    fs::write(&path, html)
        .map_err(|e| ExportError::Write { path: path.display().to_string(), source: e })
}

fn create_dir(path: &Path) -> Result<(), ExportError> {
    fs::create_dir_all(path)
        .map_err(|e| ExportError::CreateDir { path: path.display().to_string(), source: e })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_out_dir() {
        let opts = ExportOptions::new("/vault");
        assert_eq!(opts.out_dir(), Path::new("/vault").join("html"));
    }

    #[test]
    fn test_render_note_uses_identity_as_title() {
        let note = Note {
            id: NoteId::from_relative_path(Path::new("notes/A.md")),
            source_path: PathBuf::from("notes/A.md"),
            content: "[[B|see b]]".into(),
        };

        let page = render_note(&note);

        assert_eq!(page.title, "notes/A");
        assert!(page.html.contains("<a href=\"b\">see b</a>"));
    }
}
