//! Shared output formatting for query commands.

use serde::Serialize;
use vaultpress_core::vault::BacklinkEntry;

/// Formatted backlink for JSON output.
#[derive(Debug, Serialize)]
pub struct BacklinkOutput {
    /// Identity of the linking note.
    pub source: String,
    /// Slug the exported page links to.
    pub link: String,
}

impl From<&BacklinkEntry> for BacklinkOutput {
    fn from(entry: &BacklinkEntry) -> Self {
        Self { source: entry.text.clone(), link: entry.link.clone() }
    }
}

/// Print backlinks as a table.
pub fn print_backlinks_table(links: &[BacklinkOutput], target: &str) {
    if links.is_empty() {
        println!("(no backlinks to {target})");
        return;
    }

    let source_width =
        links.iter().map(|l| l.source.chars().count()).max().unwrap_or(6).clamp(6, 50);

    println!("{:<source_width$}  LINK", "SOURCE");
    println!("{:-<source_width$}  {:-<6}", "", "");

    for link in links {
        println!("{:<source_width$}  {}", truncate(&link.source, source_width), link.link);
    }

    println!();
    println!("-- {} backlinks to {} --", links.len(), target);
}

/// Print backlinks as JSON.
pub fn print_backlinks_json(links: &[BacklinkOutput]) {
    println!("{}", serde_json::to_string_pretty(&links).unwrap_or_default());
}

/// Print linking note identities only (quiet mode).
pub fn print_backlinks_quiet(links: &[BacklinkOutput]) {
    for link in links {
        println!("{}", link.source);
    }
}

/// Truncate string with ellipsis if needed.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
