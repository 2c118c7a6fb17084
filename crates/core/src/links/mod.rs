//! In-text link rewriting.

pub mod rewriter;

pub use rewriter::{RewritePass, escape_braces, rewrite, rewrite_links};
