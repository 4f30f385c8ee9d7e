//! Card and card-list components for project and blog listings.

use maud::{Markup, html};
use void_core::{Collection, Entry};

use super::components::{is_safe_url, truncate};

/// Longest overview shown on a card, in bytes.
const OVERVIEW_MAX: usize = 200;

/// A titled list of cards, one per entry, in the given order.
pub fn card_list(
    heading: &str,
    anchor: &str,
    collection: Collection,
    entries: &[Entry],
    read_more: &str,
) -> Markup {
    html! {
        section class="section card-list" id=(anchor) {
            div class="container" {
                h2 { (heading) }
                @if entries.is_empty() {
                    p class="card-empty" { "Nothing here yet." }
                } @else {
                    div class="cards" {
                        @for entry in entries {
                            (card(collection, entry))
                        }
                    }
                }
                a class="read-more" href=(read_more) { "Read more →" }
            }
        }
    }
}

/// Summary card linking to an entry's detail page.
pub fn card(collection: Collection, entry: &Entry) -> Markup {
    html! {
        a class="card" href=(collection.entry_path(&entry.slug)) data-id=(entry.id) {
            @if is_safe_url(&entry.header_img) {
                img src=(entry.header_img) alt=(entry.heading) loading="lazy";
            }
            div class="card-body" {
                h3 { (entry.heading) }
                @if !entry.sub_heading.is_empty() {
                    p class="card-sub" { (entry.sub_heading) }
                }
                @if !entry.overview.is_empty() {
                    p class="card-overview" { (truncate(&entry.overview, OVERVIEW_MAX)) }
                }
                @if !entry.date.is_empty() {
                    span class="card-date" { (entry.date) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::entry;

    fn card_count(html: &str) -> usize {
        html.matches(r#"class="card""#).count()
    }

    #[test]
    fn renders_one_card_per_entry_in_order() {
        let entries = vec![entry(3, "third"), entry(1, "first"), entry(2, "second")];

        let html = card_list("Latest Projects", "projects", Collection::Projects, &entries, "/")
            .into_string();

        assert_eq!(card_count(&html), 3);
        let third = html.find("/projects/third").unwrap();
        let first = html.find("/projects/first").unwrap();
        let second = html.find("/projects/second").unwrap();
        assert!(third < first && first < second);
    }

    #[test]
    fn renders_six_cards() {
        let entries: Vec<_> = (1..=6).map(|i| entry(i, &format!("p{i}"))).collect();
        let html = card_list("Latest Blog Posts", "blog", Collection::Blogs, &entries, "/")
            .into_string();
        assert_eq!(card_count(&html), 6);
    }

    #[test]
    fn empty_list_renders_no_cards() {
        let html =
            card_list("Latest Projects", "projects", Collection::Projects, &[], "/").into_string();
        assert_eq!(card_count(&html), 0);
        assert!(html.contains("Nothing here yet."));
        assert!(html.contains("Latest Projects"));
    }

    #[test]
    fn card_links_to_detail_page() {
        let html = card(Collection::Blogs, &entry(1, "hello")).into_string();
        assert!(html.contains(r#"href="/blog/hello""#));
        assert!(html.contains("Heading hello"));
        assert!(html.contains("Jan 2024"));
    }

    #[test]
    fn card_skips_unsafe_image() {
        let mut row = entry(1, "x");
        row.header_img = "javascript:alert(1)".to_string();
        let html = card(Collection::Projects, &row).into_string();
        assert!(!html.contains("<img"));
    }

    #[test]
    fn card_skips_plain_http_image() {
        let mut row = entry(1, "x");
        row.header_img = "http://cdn.example.com/x.png".to_string();
        let html = card(Collection::Projects, &row).into_string();
        assert!(!html.contains("<img"));
    }

    #[test]
    fn card_truncates_long_overview() {
        let mut row = entry(1, "x");
        row.overview = "word ".repeat(100);
        let html = card(Collection::Projects, &row).into_string();
        assert!(html.contains("..."));
        assert!(!html.contains(&row.overview));
    }

    #[test]
    fn card_escapes_heading() {
        let mut row = entry(1, "x");
        row.heading = "<b>bold</b>".to_string();
        let html = card(Collection::Projects, &row).into_string();
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }
}
