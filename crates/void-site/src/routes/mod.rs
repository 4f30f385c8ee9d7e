//! Route definitions for the site.
//!
//! ## Routes
//!
//! - `GET /` - Home page
//! - `POST /subscribe` - Newsletter signup form, answers with the home page
//! - `GET /projects/{slug}` - Project detail page
//! - `GET /blog/{slug}` - Blog post detail page
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions

mod entry;
mod health;
mod home;
mod subscribe;

use axum::Router;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};

use crate::render::components::CSP_HEADER;
use crate::state::AppState;

/// Cache-Control for pages that only change when content is republished.
pub(crate) const PUBLIC_CACHE: &str = "public, max-age=60, s-maxage=300, stale-while-revalidate=600";

/// Cache-Control for per-visitor responses.
pub(crate) const PRIVATE_NO_STORE: &str = "private, no-store";

/// Build the complete site router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_page))
        .route("/subscribe", post(subscribe::subscribe))
        .route("/projects/{slug}", get(entry::project_page))
        .route("/blog/{slug}", get(entry::blog_page))
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .with_state(state)
}

/// Serve robots.txt allowing all crawlers.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nAllow: /\n",
    )
}

/// Build an HTML response with security headers, an ETag and the given Cache-Control.
pub(crate) fn html_response(html: String, cache_control: &'static str) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );

    // Security headers
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    // ETag (xxHash of content)
    let hash = xxhash_rust::xxh3::xxh3_64(html.as_bytes());
    let etag = format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes()));
    if let Ok(val) = HeaderValue::from_str(&etag) {
        headers.insert(header::ETAG, val);
    }

    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(cache_control));

    (StatusCode::OK, headers, html).into_response()
}
