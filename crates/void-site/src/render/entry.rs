//! Project and blog post detail pages.
//!
//! Bodies are markdown, converted with pulldown-cmark. Raw HTML in the
//! markdown is emitted as escaped text.

use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Event, Options, Parser, html as md_html};
use void_core::Collection;

use super::components::{is_safe_url, page_shell, truncate};
use crate::config::Config;
use crate::listings::LoadedEntry;

/// Render a detail page for one entry.
pub fn render(config: &Config, collection: Collection, loaded: &LoadedEntry) -> Markup {
    let entry = &loaded.entry;
    let title = format!("{} - {}", entry.heading, config.site_name);
    let description = truncate(&entry.overview, 200);
    let canonical = format!("{}{}", config.base_url, collection.entry_path(&entry.slug));
    let image = is_safe_url(&entry.header_img).then_some(entry.header_img.as_str());

    let body = html! {
        article class="entry" {
            @if let Some(src) = image {
                img class="entry-image" src=(src) alt=(entry.heading);
            }
            h1 { (entry.heading) }
            @if !entry.sub_heading.is_empty() {
                p class="entry-sub" { (entry.sub_heading) }
            }
            @if !entry.date.is_empty() {
                span class="entry-date" { (entry.date) }
            }
            div class="entry-body" {
                @match &loaded.body {
                    Some(markdown) => {
                        (PreEscaped(render_markdown(markdown)))
                    },
                    None => {
                        p { (entry.overview) }
                    },
                }
            }
            a class="back-link" href={ "/#" (collection.anchor()) } { "← Back" }
        }
    };

    page_shell(config, &title, &description, &canonical, image, body)
}

/// Render markdown text to HTML with raw HTML escaped.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut html_output = String::with_capacity(markdown.len() * 2);
    md_html::push_html(&mut html_output, parser);
    html_output
}
