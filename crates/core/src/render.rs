//! Markdown to HTML rendering.

use comrak::{Options, markdown_to_html};

/// Render a markdown document to an HTML fragment wrapped in
/// `<div id="content">`.
pub fn render_markdown(markdown: &str) -> String {
    let html = markdown_to_html(markdown, &render_options());
    format!("<div id=\"content\">{html}</div>")
}

fn render_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    // Anchors for header links.
    options.extension.header_ids = Some(String::new());

    options.parse.smart = false;

    // Single newlines are line breaks, as in the note editor.
    options.render.hardbreaks = true;
    options.render.github_pre_lang = true;
    // Backlink blocks and tag spans are raw HTML.
    options.render.unsafe_ = true;

    options
}
