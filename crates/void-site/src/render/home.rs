//! Home page: hero, latest projects, latest blog posts, connect, subscribe.

use maud::{Markup, html};
use void_core::{Collection, SubscribeWidget};

use super::cards::card_list;
use super::components::page_shell;
use super::subscribe::subscribe_cta;
use crate::config::{Config, SocialLink};
use crate::listings::HomeListings;

/// Render the complete home page.
pub fn render(config: &Config, listings: &HomeListings, widget: &SubscribeWidget) -> Markup {
    let title = format!("{} - home", config.site_name);
    let description = "Passionate Developer | Driven by Innovation and Endless Curiosity.";
    let canonical = format!("{}/", config.base_url);

    let body = html! {
        (hero())
        @for collection in Collection::ALL {
            (card_list(
                collection.heading(),
                collection.anchor(),
                collection,
                listings.get(collection),
                "/",
            ))
        }
        (connect(&config.social_links))
        (subscribe_cta(widget))
    };

    page_shell(config, &title, description, &canonical, None, body)
}

fn hero() -> Markup {
    html! {
        section class="section" {
            div class="container hero" {
                h1 {
                    "Filling the " span id="accent" { "void" } ", one line of code at a time."
                }
                p { "Passionate Developer | Driven by Innovation and Endless Curiosity." }
                a class="btn" href="#about-me" { "Let's Connect" }
            }
        }
    }
}

/// "Let's Connect" section with the configured social links.
fn connect(links: &[SocialLink]) -> Markup {
    html! {
        section class="section connect" id="about-me" {
            div class="container" {
                h1 { "Let's Connect" }
                p { "Find me on all the usual places" }
                div class="socials" {
                    @for link in links {
                        a class="social" href=(link.url) rel="me noopener" { (link.label) }
                    }
                }
            }
        }
    }
}
