//! Page-level data loading.
//!
//! Listing failures never reach the visitor: a failed fetch is logged and
//! the section renders empty.

use std::sync::Arc;

use void_core::{Collection, ContentStore, Entry};

use crate::state::AppState;

/// Rows for the two home page listings.
#[derive(Debug, Clone, Default)]
pub struct HomeListings {
    /// Latest published projects.
    pub projects: Arc<Vec<Entry>>,
    /// Latest published blog posts.
    pub blogs: Arc<Vec<Entry>>,
}

impl HomeListings {
    /// Rows for one collection.
    pub fn get(&self, collection: Collection) -> &[Entry] {
        match collection {
            Collection::Projects => &self.projects,
            Collection::Blogs => &self.blogs,
        }
    }
}

/// An entry ready for its detail page.
#[derive(Debug, Clone)]
pub struct LoadedEntry {
    /// The row.
    pub entry: Entry,
    /// Markdown body, inline or from storage.
    pub body: Option<String>,
}

/// Load both home page listings, using the listing cache.
pub async fn load_home(state: &AppState) -> HomeListings {
    let (projects, blogs) = tokio::join!(
        cached_listing(state, Collection::Projects),
        cached_listing(state, Collection::Blogs),
    );
    HomeListings { projects, blogs }
}

/// Load both home page listings straight from the store.
pub async fn fetch_home(store: &dyn ContentStore, limit: usize) -> HomeListings {
    let (projects, blogs) = tokio::join!(
        listing_or_empty(store, Collection::Projects, limit),
        listing_or_empty(store, Collection::Blogs, limit),
    );
    HomeListings {
        projects: Arc::new(projects),
        blogs: Arc::new(blogs),
    }
}

async fn cached_listing(state: &AppState, collection: Collection) -> Arc<Vec<Entry>> {
    let limit = state.config.listing_limit;

    if state.config.cache_ttl.is_zero() {
        return Arc::new(listing_or_empty(state.store.as_ref(), collection, limit).await);
    }

    if let Some(rows) = state.listings.get(&collection).await {
        tracing::debug!(table = collection.table(), "listing cache hit");
        return rows;
    }

    match fetch_listing(state.store.as_ref(), collection, limit).await {
        Ok(rows) => {
            let rows = Arc::new(rows);
            state.listings.insert(collection, rows.clone()).await;
            rows
        }
        Err(err) => {
            tracing::warn!(table = collection.table(), error = %err, "listing fetch failed");
            Arc::default()
        }
    }
}

async fn listing_or_empty(store: &dyn ContentStore, collection: Collection, limit: usize) -> Vec<Entry> {
    fetch_listing(store, collection, limit)
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(table = collection.table(), error = %err, "listing fetch failed");
            Vec::new()
        })
}

/// Fetch up to `limit` published rows, keeping backend order.
pub async fn fetch_listing(
    store: &dyn ContentStore,
    collection: Collection,
    limit: usize,
) -> void_core::Result<Vec<Entry>> {
    let mut rows = store.published(collection, limit).await?;
    rows.retain(Entry::is_published);
    rows.truncate(limit);
    Ok(rows)
}

/// Load one published entry and its body.
///
/// The body is the inline `content` when present, otherwise the stored
/// markdown at `post_content_path`. A failed storage download leaves the
/// body empty.
pub async fn load_entry(
    store: &dyn ContentStore,
    collection: Collection,
    slug: &str,
) -> void_core::Result<Option<LoadedEntry>> {
    let Some(entry) = store.by_slug(collection, slug).await? else {
        return Ok(None);
    };
    if !entry.is_published() {
        return Ok(None);
    }

    let body = match (entry.inline_content(), entry.stored_content_path()) {
        (Some(content), _) => Some(content.to_string()),
        (None, Some(path)) => match store.stored_content(path).await {
            Ok(text) => Some(text),
            Err(err) => {
                tracing::warn!(path = %path, error = %err, "stored content fetch failed");
                None
            }
        },
        (None, None) => None,
    };

    Ok(Some(LoadedEntry { entry, body }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeStore, entry, test_state};

    #[tokio::test]
    async fn listing_keeps_backend_order() {
        let store = FakeStore::new()
            .with_rows(Collection::Projects, vec![entry(3, "c"), entry(1, "a"), entry(2, "b")]);

        let rows = fetch_listing(&store, Collection::Projects, 6).await.unwrap();

        let slugs: Vec<_> = rows.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn listing_drops_drafts_and_truncates() {
        let mut draft = entry(9, "draft");
        draft.published = None;
        let rows: Vec<_> = std::iter::once(draft)
            .chain((1..=8).map(|i| entry(i, &format!("p{i}"))))
            .collect();
        let store = FakeStore::new().with_rows(Collection::Blogs, rows);

        let rows = fetch_listing(&store, Collection::Blogs, 6).await.unwrap();

        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(Entry::is_published));
        assert_eq!(rows[0].slug, "p1");
    }

    #[tokio::test]
    async fn failed_fetch_yields_empty_listing() {
        let store = FakeStore::new().failing();

        let listings = fetch_home(&store, 6).await;

        assert!(listings.projects.is_empty());
        assert!(listings.blogs.is_empty());
    }

    #[tokio::test]
    async fn load_home_uses_cache() {
        let store = Arc::new(
            FakeStore::new().with_rows(Collection::Projects, vec![entry(1, "a")]),
        );
        let state = test_state(store.clone());

        let first = load_home(&state).await;
        let second = load_home(&state).await;

        assert_eq!(first.projects.len(), 1);
        assert_eq!(second.projects.len(), 1);
        assert_eq!(store.published_calls(), 2, "one call per collection");
    }

    #[tokio::test]
    async fn load_home_does_not_cache_failures() {
        let store = Arc::new(FakeStore::new().failing());
        let state = test_state(store.clone());

        load_home(&state).await;
        load_home(&state).await;

        assert_eq!(store.published_calls(), 4);
    }

    #[tokio::test]
    async fn load_entry_prefers_inline_content() {
        let mut row = entry(1, "ray");
        row.content = Some("# Inline".to_string());
        row.post_content_path = Some("posts/ray.md".to_string());
        let store = FakeStore::new()
            .with_rows(Collection::Projects, vec![row])
            .with_stored("posts/ray.md", "# Stored");

        let loaded = load_entry(&store, Collection::Projects, "ray").await.unwrap().unwrap();

        assert_eq!(loaded.body.as_deref(), Some("# Inline"));
    }

    #[tokio::test]
    async fn load_entry_falls_back_to_storage() {
        let mut row = entry(1, "ray");
        row.post_content_path = Some("posts/ray.md".to_string());
        let store = FakeStore::new()
            .with_rows(Collection::Projects, vec![row])
            .with_stored("posts/ray.md", "# Stored");

        let loaded = load_entry(&store, Collection::Projects, "ray").await.unwrap().unwrap();

        assert_eq!(loaded.body.as_deref(), Some("# Stored"));
    }

    #[tokio::test]
    async fn load_entry_missing_storage_leaves_body_empty() {
        let mut row = entry(1, "ray");
        row.post_content_path = Some("posts/gone.md".to_string());
        let store = FakeStore::new().with_rows(Collection::Projects, vec![row]);

        let loaded = load_entry(&store, Collection::Projects, "ray").await.unwrap().unwrap();

        assert_eq!(loaded.body, None);
    }

    #[tokio::test]
    async fn load_entry_unknown_slug_is_none() {
        let store = FakeStore::new();
        let loaded = load_entry(&store, Collection::Blogs, "nope").await.unwrap();
        assert!(loaded.is_none());
    }
}
