//! Home page handler.

use axum::extract::State;
use axum::response::Response;
use void_core::SubscribeWidget;

use super::{PUBLIC_CACHE, html_response};
use crate::listings::load_home;
use crate::render;
use crate::state::AppState;

/// Render the home page with an idle signup form.
pub async fn home_page(State(state): State<AppState>) -> Response {
    let listings = load_home(&state).await;
    let markup = render::home::render(&state.config, &listings, &SubscribeWidget::new());
    html_response(markup.into_string(), PUBLIC_CACHE)
}
