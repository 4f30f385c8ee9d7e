//! void site - server-rendered portfolio pages.
//!
//! This crate serves the portfolio as plain HTML: a home page with the
//! latest projects and blog posts, a detail page per entry, and a
//! newsletter signup form that works without client script.
//!
//! # Architecture
//!
//! - **Listings**: Fetches published rows through an injected
//!   [`ContentStore`](void_core::ContentStore), cached for a short TTL
//! - **Render**: Generates HTML using maud (compile-time templates)
//! - **Subscribe**: Runs the [`SubscribeWidget`](void_core::SubscribeWidget)
//!   state machine once per form post, with at most one upstream request
//!   in flight per email
//! - **Export**: Writes the same pages to disk for static hosting
//!
//! # Security
//!
//! - All dynamic content is HTML-escaped by maud
//! - Raw HTML in markdown bodies is escaped
//! - Image URLs are validated (HTTPS only, as the CSP allows) before use in attributes
//! - Strict Content-Security-Policy: no JavaScript, forms post to self only

pub mod config;
pub mod error;
pub mod export;
pub mod inflight;
pub mod listings;
pub mod render;
pub mod routes;
pub mod state;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use error::SiteError;
pub use routes::router;
pub use state::AppState;
