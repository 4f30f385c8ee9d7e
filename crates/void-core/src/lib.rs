//! Core types and backend plumbing for the void portfolio site.
//!
//! This crate provides:
//! - Row types for the `Project` and `Blog` tables
//! - A REST client for the hosted backend, behind the [`ContentStore`] trait
//! - The newsletter subscription state machine and its HTTP client
//! - The analytics hook fired after a successful subscription
//!
//! Nothing in here renders HTML or serves requests; see `void-site` for that.

pub mod analytics;
pub mod backend;
mod error;
mod http;
pub mod model;
pub mod subscribe;

/// Number of rows shown per listing on the home page.
pub const DEFAULT_LISTING_LIMIT: usize = 6;

pub use analytics::{AnalyticsEvent, AnalyticsHook};
pub use backend::{BackendClient, ContentStore};
pub use error::{Error, Result};
pub use http::REQUEST_TIMEOUT;
pub use model::{Collection, Entry};
pub use subscribe::{
    HttpSubscribeApi, NoopHook, Status, SubscribeApi, SubscribeHook, SubscribeResponse,
    SubscribeWidget,
};
