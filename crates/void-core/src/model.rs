//! Row types for the `Project` and `Blog` tables.
//!
//! Both tables share one shape, so a single [`Entry`] type serves both and
//! [`Collection`] says which table a row came from.

use serde::{Deserialize, Deserializer, Serialize};

/// A content table on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// The `Project` table.
    Projects,
    /// The `Blog` table.
    Blogs,
}

impl Collection {
    /// Every collection, in home page order.
    pub const ALL: [Collection; 2] = [Collection::Projects, Collection::Blogs];

    /// Backend table name.
    pub fn table(self) -> &'static str {
        match self {
            Self::Projects => "Project",
            Self::Blogs => "Blog",
        }
    }

    /// URL prefix for detail pages (no trailing slash).
    pub fn path_prefix(self) -> &'static str {
        match self {
            Self::Projects => "/projects",
            Self::Blogs => "/blog",
        }
    }

    /// Heading used for the home page listing.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Projects => "Latest Projects",
            Self::Blogs => "Latest Blog Posts",
        }
    }

    /// In-page anchor for the home page listing.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Blogs => "blog",
        }
    }

    /// Site-relative path of an entry's detail page.
    pub fn entry_path(self, slug: &str) -> String {
        format!("{}/{slug}", self.path_prefix())
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table())
    }
}

/// One row of the `Project` or `Blog` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Entry {
    /// Primary key.
    pub id: i64,
    /// Row creation timestamp as returned by the backend.
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    /// Header image URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub header_img: String,
    /// Title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub heading: String,
    /// Subtitle.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sub_heading: String,
    /// Short description shown on cards.
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    /// Long-form markdown body, when stored inline.
    #[serde(default)]
    pub content: Option<String>,
    /// Storage path of the markdown body, when stored outside the row.
    #[serde(default)]
    pub post_content_path: Option<String>,
    /// Publication flag. `None` (SQL null) marks a draft.
    #[serde(default)]
    pub published: Option<bool>,
    /// Human-facing display date.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    /// URL slug, unique per table.
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
}

impl Entry {
    /// Whether this row passes the public visibility filter.
    pub fn is_published(&self) -> bool {
        self.published.is_some()
    }

    /// Inline markdown body, ignoring blank content.
    pub fn inline_content(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// Storage path of the body, ignoring blank paths.
    pub fn stored_content_path(&self) -> Option<&str> {
        self.post_content_path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

/// Deserialize a SQL null as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
