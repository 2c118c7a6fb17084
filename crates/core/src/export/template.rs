//! Page templates.
//!
//! A template is an HTML file in format-string syntax: `{title}` and
//! `{content}` are replaced, `{{` and `}}` stand for literal braces so
//! stylesheets can be embedded. Unknown `{name}` fields and lone braces
//! are left as written.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use thiserror::Error;

use crate::error::ErrorKind;

// Alternation order matters: `{{title}}` is an escaped brace pair, not a field.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{|\}\}|\{(?P<field>[A-Za-z_]\w*)\}").unwrap());

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("html template not found: {0}")]
    NotFound(String),

    #[error("failed to read html template {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("html template is not valid UTF-8: {0}")]
    Encoding(String),
}

impl TemplateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Read { .. } => ErrorKind::Io,
            Self::Encoding(_) => ErrorKind::Encoding,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate {
    source: String,
}

impl PageTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self { source: source.into() }
    }

    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        if !path.is_file() {
            return Err(TemplateError::NotFound(path.display().to_string()));
        }

        let bytes = fs::read(path).map_err(|e| TemplateError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let source = String::from_utf8(bytes)
            .map_err(|_| TemplateError::Encoding(path.display().to_string()))?;

        Ok(Self { source })
    }

    /// Substitute `title` and `content` in a single pass, so placeholder
    /// text inside the content is never expanded.
    pub fn render(&self, title: &str, content: &str) -> String {
        PLACEHOLDER_RE
            .replace_all(&self.source, |caps: &Captures<'_>| match &caps[0] {
                "{{" => "{".to_string(),
                "}}" => "}".to_string(),
                _ => match &caps["field"] {
                    "title" => title.to_string(),
                    "content" => content.to_string(),
                    _ => caps[0].to_string(),
                },
            })
            .into_owned()
    }
}
