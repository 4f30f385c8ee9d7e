//! In-memory collaborators for handler and rendering tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use void_core::{
    Collection, ContentStore, Entry, Error, NoopHook, Result, SubscribeApi, SubscribeResponse,
};

use crate::config::{Config, SocialLink};
use crate::state::AppState;

/// A published entry with the given id and slug.
pub fn entry(id: i64, slug: &str) -> Entry {
    Entry {
        id,
        created_at: "2024-01-01T00:00:00+00:00".to_string(),
        header_img: format!("https://cdn.example.com/{slug}.png"),
        heading: format!("Heading {slug}"),
        sub_heading: format!("Sub {slug}"),
        overview: format!("Overview of {slug}"),
        content: None,
        post_content_path: None,
        published: Some(true),
        date: "Jan 2024".to_string(),
        slug: slug.to_string(),
    }
}

pub fn test_config() -> Config {
    Config {
        bind_addr: "127.0.0.1:0".to_string(),
        base_url: "https://void.test".to_string(),
        site_name: "void".to_string(),
        backend_url: String::new(),
        backend_key: String::new(),
        subscribe_endpoint: "http://127.0.0.1:9/api/subscribe".to_string(),
        analytics_endpoint: None,
        listing_limit: 6,
        cache_ttl: Duration::from_secs(60),
        social_links: vec![SocialLink {
            label: "GitHub".to_string(),
            url: "https://github.com/void".to_string(),
        }],
    }
}

pub fn test_state(store: Arc<FakeStore>) -> AppState {
    test_state_with_api(store, Arc::new(FakeApi::answering(SubscribeResponse::Subscribed)))
}

pub fn test_state_with_api(store: Arc<FakeStore>, api: Arc<FakeApi>) -> AppState {
    AppState::from_parts(test_config(), store, api, Arc::new(NoopHook))
}

#[derive(Default)]
pub struct FakeStore {
    rows: HashMap<Collection, Vec<Entry>>,
    stored: HashMap<String, String>,
    failing: bool,
    published_calls: AtomicUsize,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(mut self, collection: Collection, rows: Vec<Entry>) -> Self {
        self.rows.insert(collection, rows);
        self
    }

    pub fn with_stored(mut self, path: &str, body: &str) -> Self {
        self.stored.insert(path.to_string(), body.to_string());
        self
    }

    /// Every call fails as an unconfigured backend would.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn published_calls(&self) -> usize {
        self.published_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentStore for FakeStore {
    async fn published(&self, collection: Collection, limit: usize) -> Result<Vec<Entry>> {
        self.published_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(Error::NotConfigured);
        }
        Ok(self
            .rows
            .get(&collection)
            .map(|rows| rows.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }

    async fn by_slug(&self, collection: Collection, slug: &str) -> Result<Option<Entry>> {
        if self.failing {
            return Err(Error::NotConfigured);
        }
        Ok(self
            .rows
            .get(&collection)
            .and_then(|rows| rows.iter().find(|e| e.slug == slug).cloned()))
    }

    async fn stored_content(&self, path: &str) -> Result<String> {
        self.stored.get(path).cloned().ok_or(Error::Status {
            status: 404,
            body: "not found".to_string(),
        })
    }
}

pub struct FakeApi {
    response: Option<SubscribeResponse>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl FakeApi {
    pub fn answering(response: SubscribeResponse) -> Self {
        Self {
            response: Some(response),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Every call fails as an unreachable endpoint would.
    pub fn unreachable() -> Self {
        Self {
            response: None,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Answer only after `delay`.
    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SubscribeApi for FakeApi {
    async fn subscribe(&self, _email: &str) -> Result<SubscribeResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.response.clone().ok_or(Error::NotConfigured)
    }
}
