//! Identifier normalization.
//!
//! Every cross-reference in a vault is keyed by a slug: a lowercase,
//! URL-safe form of a note title or path. Two spellings of the same note
//! (different separators, dots, underscores or case) share one slug.

use std::sync::LazyLock;

use regex::Regex;

// Anything that is not a word character, hyphen or path separator.
static NON_SLUG_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\-/]+").unwrap());

/// Convert a raw note title or path fragment into its slug.
///
/// Rules, in order:
/// 1. `\` becomes `/`
/// 2. `.` becomes the word `dot`
/// 3. `_` becomes `-`
/// 4. every run of characters outside `[\w-/]` collapses to a single `-`
/// 5. the result is lowercased
///
/// # Examples
/// ```
/// use vaultpress_core::slug::normalize;
///
/// assert_eq!(normalize("Notes/Plan"), "notes/plan");
/// assert_eq!(normalize("v1.2 Release_Notes"), "v1dot2-release-notes");
/// assert_eq!(normalize("Notes\\Plan"), normalize("notes/plan"));
/// ```
pub fn normalize(raw: &str) -> String {
    let text = raw.replace('\\', "/").replace('.', "dot").replace('_', "-");
    NON_SLUG_RUN.replace_all(&text, "-").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(normalize("Home"), "home");
    }

    #[test]
    fn test_dots_become_word() {
        assert_eq!(normalize("config.v2"), "configdotv2");
    }

    #[test]
    fn test_underscores_become_hyphens() {
        assert_eq!(normalize("my_note"), "my-note");
    }

    #[test]
    fn test_collapses_runs() {
        assert_eq!(normalize("What?! Now"), "what-now");
        assert_eq!(normalize("a - b"), "a---b");
    }

    #[test]
    fn test_keeps_path_separators() {
        assert_eq!(normalize("Projects/Q3 Plan"), "projects/q3-plan");
    }

    #[test]
    fn test_unicode_letters_survive() {
        assert_eq!(normalize("Café Notes"), "café-notes");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }
}
