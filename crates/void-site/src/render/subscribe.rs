//! Newsletter call-to-action.

use maud::{Markup, html};
use void_core::SubscribeWidget;

/// Where the signup form posts to.
pub const SUBSCRIBE_ACTION: &str = "/subscribe#subscribe";

/// Render the subscribe section for the widget's current state.
///
/// Idle shows the form (with the last email and error), submitting shows a
/// loader, and subscribed shows the confirmation.
pub fn subscribe_cta(widget: &SubscribeWidget) -> Markup {
    html! {
        section class="section" id="subscribe" {
            div class="container sub-cta" {
                h1 { "Subscribe Now!" }
                p {
                    "Stay ahead with our exclusive updates on cutting-edge projects, "
                    "insightful blogs, and everything you need to know about the world "
                    "of development."
                }
                @if widget.is_loading() {
                    div class="loader" role="status" aria-label="Subscribing" {
                        span {} span {} span {}
                    }
                } @else {
                    @if widget.is_subscribed() {
                        p class="sub-success" { "Congratulations! You are now subscribed." }
                    } @else {
                        (form(widget))
                    }
                    @if let Some(error) = widget.error() {
                        p class="sub-error" role="alert" { (error) }
                    }
                }
            }
        }
    }
}

fn form(widget: &SubscribeWidget) -> Markup {
    html! {
        form class="inline-form" method="post" action=(SUBSCRIBE_ACTION) {
            input type="email" name="email" placeholder="Enter your email address."
                value=(widget.email()) autocomplete="email";
            button class="btn" id="black-btn" type="submit" {
                "Subscribe!"
            }
        }
    }
}
