//! Markdown rendering for posting bodies.
//!
//! CMS editors write the body as markdown. Raw HTML inside it is shown as
//! text, not interpreted, and link targets with unsafe schemes are dropped.

use pulldown_cmark::{CowStr, Event, Parser, Tag, html as md_html};

use super::components::is_safe_url;

/// Render markdown text to HTML.
///
/// Plain CommonMark: no tables, strikethrough or task list extensions.
pub fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new(markdown).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) if !is_safe_url(&dest_url) => Event::Start(Tag::Link {
            link_type,
            dest_url: CowStr::Borrowed("#"),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) if !is_safe_url(&dest_url) => Event::Start(Tag::Image {
            link_type,
            dest_url: CowStr::Borrowed(""),
            title,
            id,
        }),
        other => other,
    });

    let mut html_output = String::with_capacity(markdown.len() * 2);
    md_html::push_html(&mut html_output, parser);
    html_output
}
