//! Project and blog post detail handlers.

use axum::extract::{Path, State};
use axum::response::Response;
use void_core::Collection;

use super::{PUBLIC_CACHE, html_response};
use crate::error::SiteError;
use crate::listings::load_entry;
use crate::render;
use crate::state::AppState;

/// `GET /projects/{slug}`
pub async fn project_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, SiteError> {
    entry_page(&state, Collection::Projects, &slug).await
}

/// `GET /blog/{slug}`
pub async fn blog_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, SiteError> {
    entry_page(&state, Collection::Blogs, &slug).await
}

async fn entry_page(
    state: &AppState,
    collection: Collection,
    slug: &str,
) -> Result<Response, SiteError> {
    let slug = slug.trim();

    let loaded = load_entry(state.store.as_ref(), collection, slug)
        .await?
        .ok_or_else(|| SiteError::NotFound(collection.entry_path(slug)))?;

    let markup = render::entry::render(&state.config, collection, &loaded);
    Ok(html_response(markup.into_string(), PUBLIC_CACHE))
}
