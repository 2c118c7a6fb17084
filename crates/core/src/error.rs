//! Error classification shared across the pipeline.

use std::fmt;

/// Broad category of a failure, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required path (vault root, extra folder, template) is missing.
    NotFound,
    /// Reading, writing or copying a file failed.
    Io,
    /// A note or template is not valid UTF-8.
    Encoding,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::NotFound => "not found",
            ErrorKind::Io => "i/o error",
            ErrorKind::Encoding => "encoding error",
        })
    }
}
