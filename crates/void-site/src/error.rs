//! Error types for the site.
//!
//! Errors are rendered as simple HTML error pages rather than JSON,
//! since every route serves a browser.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, PreEscaped, html};

use crate::render::components::ERROR_CSS;

/// Site error type.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// No published entry matches the request.
    #[error("not found: {0}")]
    NotFound(String),

    /// The content backend failed.
    #[error("backend error: {0}")]
    Backend(#[from] void_core::Error),
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::NotFound(what) => {
                tracing::debug!(what = %what, "page not found");
                (
                    StatusCode::NOT_FOUND,
                    "Not Found",
                    "There is nothing published at this address.",
                )
            }
            Self::Backend(err) => {
                tracing::error!(error = %err, "backend error");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Service Unavailable",
                    "Content is temporarily unavailable. Please try again later.",
                )
            }
        };

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    meta name="robots" content="noindex";
                    style { (PreEscaped(ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                        a href="/" { "Back to the home page" }
                    }
                }
            }
        };

        (status, markup).into_response()
    }
}
