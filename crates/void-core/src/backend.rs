//! REST client for the hosted content backend.
//!
//! The backend speaks the PostgREST dialect: tables live under `/rest/v1`,
//! filters are query parameters (`published=not.is.null`), and every request
//! carries the project key both as `apikey` and as a bearer token. Stored
//! markdown bodies are served from the public storage bucket.
//!
//! The site never talks to [`BackendClient`] directly; it goes through
//! [`ContentStore`] so the store can be swapped in tests.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::error::{Error, Result};
use crate::model::{Collection, Entry};

/// Longest error body kept in [`Error::Status`].
const MAX_ERROR_BODY: usize = 512;

/// Read access to published content.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch up to `limit` published rows of `collection`, in backend order.
    async fn published(&self, collection: Collection, limit: usize) -> Result<Vec<Entry>>;

    /// Fetch the published row of `collection` with the given slug.
    async fn by_slug(&self, collection: Collection, slug: &str) -> Result<Option<Entry>>;

    /// Fetch a markdown body from storage.
    async fn stored_content(&self, path: &str) -> Result<String>;
}

/// Configured handle to the hosted backend.
///
/// Built once from the endpoint URL and API key. Empty credentials produce a
/// handle whose every call fails with [`Error::NotConfigured`].
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    url: String,
    key: String,
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("url", &self.url)
            .field("key", &if self.key.is_empty() { "" } else { "<redacted>" })
            .finish()
    }
}

impl BackendClient {
    /// Create a client for the backend at `url` authenticated with `key`.
    ///
    /// Fails only when the HTTP client itself cannot be built.
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: crate::http::client()?,
            url: url.into().trim().trim_end_matches('/').to_string(),
            key: key.into().trim().to_string(),
        })
    }

    /// Whether both the URL and the key are present.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.key.is_empty()
    }

    /// Fetch up to `limit` rows of `collection` whose `published` column is non-null.
    pub async fn fetch_published(&self, collection: Collection, limit: usize) -> Result<Vec<Entry>> {
        let request = self.published_request(collection, limit)?;
        let body = self.send(request).await?;
        let rows: Vec<Entry> = serde_json::from_str(&body)?;

        tracing::debug!(table = collection.table(), rows = rows.len(), "fetched published rows");
        Ok(rows)
    }

    /// Fetch the published row of `collection` whose slug is `slug`.
    pub async fn fetch_by_slug(&self, collection: Collection, slug: &str) -> Result<Option<Entry>> {
        let request = self.slug_request(collection, slug)?;
        let body = self.send(request).await?;
        let rows: Vec<Entry> = serde_json::from_str(&body)?;
        Ok(rows.into_iter().next())
    }

    /// Download a markdown body from the public storage bucket.
    pub async fn fetch_stored_content(&self, path: &str) -> Result<String> {
        let request = self.storage_request(path)?;
        self.send(request).await
    }

    fn published_request(
        &self,
        collection: Collection,
        limit: usize,
    ) -> Result<reqwest::RequestBuilder> {
        let limit = limit.to_string();
        Ok(self
            .table_request(collection)?
            .query(&[
                ("select", "*"),
                ("published", "not.is.null"),
                ("limit", limit.as_str()),
            ]))
    }

    fn slug_request(&self, collection: Collection, slug: &str) -> Result<reqwest::RequestBuilder> {
        let slug_filter = format!("eq.{slug}");
        Ok(self.table_request(collection)?.query(&[
            ("select", "*"),
            ("slug", slug_filter.as_str()),
            ("published", "not.is.null"),
            ("limit", "1"),
        ]))
    }

    fn storage_request(&self, path: &str) -> Result<reqwest::RequestBuilder> {
        self.ensure_configured()?;
        let url = format!(
            "{}/storage/v1/object/public/{}",
            self.url,
            path.trim().trim_start_matches('/')
        );
        Ok(self.http.get(url).headers(self.auth_headers()))
    }

    fn table_request(&self, collection: Collection) -> Result<reqwest::RequestBuilder> {
        self.ensure_configured()?;
        let url = format!("{}/rest/v1/{}", self.url, collection.table());
        Ok(self.http.get(url).headers(self.auth_headers()))
    }

    fn ensure_configured(&self) -> Result<()> {
        if self.is_configured() {
            Ok(())
        } else {
            Err(Error::NotConfigured)
        }
    }

    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(val) = HeaderValue::from_str(&self.key) {
            headers.insert("apikey", val);
        }
        if let Ok(val) = HeaderValue::from_str(&format!("Bearer {}", self.key)) {
            headers.insert(AUTHORIZATION, val);
        }
        headers
    }

    /// Send a request and return the body text of a successful response.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let mut end = MAX_ERROR_BODY;
                while !body.is_char_boundary(end) {
                    end -= 1;
                }
                body.truncate(end);
            }
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl ContentStore for BackendClient {
    async fn published(&self, collection: Collection, limit: usize) -> Result<Vec<Entry>> {
        self.fetch_published(collection, limit).await
    }

    async fn by_slug(&self, collection: Collection, slug: &str) -> Result<Option<Entry>> {
        self.fetch_by_slug(collection, slug).await
    }

    async fn stored_content(&self, path: &str) -> Result<String> {
        self.fetch_stored_content(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> BackendClient {
        BackendClient::new("https://abc.supabase.co/", "anon-key").unwrap()
    }

    #[test]
    fn trailing_slash_stripped() {
        assert!(format!("{:?}", client()).contains("https://abc.supabase.co\""));
    }

    #[test]
    fn debug_redacts_key() {
        let debug = format!("{:?}", client());
        assert!(!debug.contains("anon-key"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn is_configured_requires_both_values() {
        assert!(client().is_configured());
        assert!(!BackendClient::new("", "key").unwrap().is_configured());
        assert!(!BackendClient::new("https://abc.supabase.co", "").unwrap().is_configured());
        assert!(!BackendClient::new("  ", "  ").unwrap().is_configured());
    }

    #[test]
    fn published_request_filters_and_limits() {
        let request = client()
            .published_request(Collection::Projects, 6)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(request.url().path(), "/rest/v1/Project");
        let query = request.url().query().unwrap();
        assert!(query.contains("select=*"));
        assert!(query.contains("published=not.is.null"));
        assert!(query.contains("limit=6"));
    }

    #[test]
    fn requests_carry_both_auth_headers() {
        let request = client()
            .published_request(Collection::Blogs, 6)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(request.url().path(), "/rest/v1/Blog");
        assert_eq!(request.headers()["apikey"], "anon-key");
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer anon-key");
    }

    #[test]
    fn slug_request_filters_by_slug_and_published() {
        let request = client()
            .slug_request(Collection::Blogs, "hello-world")
            .unwrap()
            .build()
            .unwrap();

        let query = request.url().query().unwrap();
        assert!(query.contains("slug=eq.hello-world"));
        assert!(query.contains("published=not.is.null"));
        assert!(query.contains("limit=1"));
    }

    #[test]
    fn storage_request_strips_leading_slash() {
        let request = client()
            .storage_request("/posts/ray.md")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://abc.supabase.co/storage/v1/object/public/posts/ray.md"
        );
    }

    #[tokio::test]
    async fn unconfigured_client_fails_without_network() {
        let client = BackendClient::new("", "").unwrap();
        let err = client
            .fetch_published(Collection::Projects, 6)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotConfigured));

        let err = client.fetch_stored_content("a.md").await.unwrap_err();
        assert!(matches!(err, Error::NotConfigured));
    }
}
