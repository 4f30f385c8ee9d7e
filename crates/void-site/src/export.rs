//! Static export: render every page once and write it to disk.
//!
//! Output layout:
//!
//! ```text
//! {out}/index.html
//! {out}/projects/{slug}/index.html
//! {out}/blog/{slug}/index.html
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use void_core::{Collection, ContentStore, SubscribeWidget};

use crate::config::Config;
use crate::listings::{fetch_home, load_entry};
use crate::render;

/// What an export wrote.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Files written, relative to the output directory.
    pub pages: Vec<PathBuf>,
    /// Entries skipped because their slug is not a safe path segment.
    pub skipped: Vec<String>,
}

/// Render the home page and every listed entry into `out`.
pub async fn export_site(
    config: &Config,
    store: &dyn ContentStore,
    out: &Path,
) -> anyhow::Result<ExportSummary> {
    let listings = fetch_home(store, config.listing_limit).await;
    let mut summary = ExportSummary::default();

    let home = render::home::render(config, &listings, &SubscribeWidget::new());
    write_page(out, Path::new("index.html"), home.into_string(), &mut summary).await?;

    for collection in Collection::ALL {
        for entry in listings.get(collection) {
            if !is_safe_slug(&entry.slug) {
                tracing::warn!(table = collection.table(), slug = %entry.slug, "skipping unsafe slug");
                summary.skipped.push(entry.slug.clone());
                continue;
            }

            let loaded = match load_entry(store, collection, &entry.slug).await {
                Ok(Some(loaded)) => loaded,
                Ok(None) => {
                    tracing::warn!(table = collection.table(), slug = %entry.slug, "entry vanished during export");
                    summary.skipped.push(entry.slug.clone());
                    continue;
                }
                Err(err) => {
                    return Err(err).with_context(|| {
                        format!("failed to load {} {}", collection.table(), entry.slug)
                    });
                }
            };

            let relative = PathBuf::from(collection.path_prefix().trim_start_matches('/'))
                .join(&entry.slug)
                .join("index.html");
            let page = render::entry::render(config, collection, &loaded);
            write_page(out, &relative, page.into_string(), &mut summary).await?;
        }
    }

    tracing::info!(
        out = %out.display(),
        pages = summary.pages.len(),
        skipped = summary.skipped.len(),
        "static export complete"
    );

    Ok(summary)
}

async fn write_page(
    out: &Path,
    relative: &Path,
    html: String,
    summary: &mut ExportSummary,
) -> anyhow::Result<()> {
    let path = out.join(relative);
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    tokio::fs::write(&path, html)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::debug!(path = %path.display(), "page written");
    summary.pages.push(relative.to_path_buf());
    Ok(())
}

/// A slug usable as a single directory name.
fn is_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && slug != ".."
        && !slug.contains(['/', '\\'])
        && !slug.chars().any(char::is_control)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeStore, entry, test_config};

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("void-export-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn safe_slugs() {
        assert!(is_safe_slug("ray-tracer"));
        assert!(is_safe_slug("hello_world.v2"));
        assert!(!is_safe_slug(""));
        assert!(!is_safe_slug(".."));
        assert!(!is_safe_slug("a/b"));
        assert!(!is_safe_slug("a\\b"));
        assert!(!is_safe_slug("a\nb"));
    }

    #[tokio::test]
    async fn export_writes_home_and_entries() {
        let out = temp_dir("full");
        let store = FakeStore::new()
            .with_rows(Collection::Projects, vec![entry(1, "ray")])
            .with_rows(Collection::Blogs, vec![entry(2, "hello"), entry(3, "../escape")]);

        let summary = export_site(&test_config(), &store, &out).await.unwrap();

        assert_eq!(
            summary.pages,
            vec![
                PathBuf::from("index.html"),
                PathBuf::from("projects/ray/index.html"),
                PathBuf::from("blog/hello/index.html"),
            ]
        );
        assert_eq!(summary.skipped, vec!["../escape".to_string()]);

        let home = std::fs::read_to_string(out.join("index.html")).unwrap();
        assert_eq!(home.matches(r#"class="card""#).count(), 3);
        let post = std::fs::read_to_string(out.join("blog/hello/index.html")).unwrap();
        assert!(post.contains("Heading hello"));

        let _ = std::fs::remove_dir_all(&out);
    }

    #[tokio::test]
    async fn export_with_failing_backend_writes_empty_home() {
        let out = temp_dir("empty");
        let store = FakeStore::new().failing();

        let summary = export_site(&test_config(), &store, &out).await.unwrap();

        assert_eq!(summary.pages, vec![PathBuf::from("index.html")]);
        let home = std::fs::read_to_string(out.join("index.html")).unwrap();
        assert_eq!(home.matches(r#"class="card""#).count(), 0);

        let _ = std::fs::remove_dir_all(&out);
    }
}
