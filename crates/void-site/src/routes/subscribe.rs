//! Newsletter signup handler.
//!
//! The signup form posts here without any client script. The handler runs
//! one pass of the subscription state machine and answers with the home
//! page showing the resulting state. A post for an email that is already
//! being forwarded answers with the loader instead of sending it again.

use axum::Form;
use axum::extract::State;
use axum::response::Response;
use serde::Deserialize;
use void_core::SubscribeWidget;

use super::{PRIVATE_NO_STORE, html_response};
use crate::listings::load_home;
use crate::render;
use crate::state::AppState;

/// Form body of `POST /subscribe`.
#[derive(Debug, Deserialize)]
pub struct SubscribeForm {
    #[serde(default)]
    email: String,
}

/// Handle a signup form submission.
pub async fn subscribe(
    State(state): State<AppState>,
    Form(form): Form<SubscribeForm>,
) -> Response {
    let mut widget = SubscribeWidget::with_email(form.email);
    let claim = state.in_flight.try_claim(widget.email());
    match claim {
        Some(_claim) => {
            widget
                .submit(state.subscriber.as_ref(), state.hook.as_ref())
                .await;
        }
        None => {
            tracing::debug!("signup for this email already in flight");
            widget.begin();
        }
    }

    let listings = load_home(&state).await;
    let markup = render::home::render(&state.config, &listings, &widget);
    html_response(markup.into_string(), PRIVATE_NO_STORE)
}
