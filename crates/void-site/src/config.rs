//! Application configuration loaded from environment variables.

use std::time::Duration;

use anyhow::Context;

/// Default social links shown in the "Let's Connect" section.
const DEFAULT_SOCIAL_LINKS: &str = "Instagram|https://www.instagram.com/voidstudios.com.au/,\
LinkedIn|https://au.linkedin.com/in/matt-boan-656561129/,\
Facebook|https://www.facebook.com/voidstudios.com.au/,\
Email|mailto:matt@voidstudios.com.au";

/// A labelled link in the "Let's Connect" section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    /// Visible label (e.g. "LinkedIn").
    pub label: String,
    /// Target URL (`https://`, `http://` or `mailto:`).
    pub url: String,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:3000").
    pub bind_addr: String,

    /// Public base URL of the site, used for canonical URLs and OG tags.
    pub base_url: String,

    /// Site name shown in the header and page titles.
    pub site_name: String,

    /// Content backend URL.
    pub backend_url: String,

    /// Content backend API key.
    pub backend_key: String,

    /// Subscription endpoint the signup form forwards to.
    pub subscribe_endpoint: String,

    /// Analytics collector. Events are logged when unset.
    pub analytics_endpoint: Option<String>,

    /// Rows per home page listing.
    pub listing_limit: usize,

    /// How long fetched listings are reused.
    pub cache_ttl: Duration,

    /// Links for the "Let's Connect" section.
    pub social_links: Vec<SocialLink>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - None (missing backend credentials render empty listings)
    ///
    /// Optional:
    /// - `SITE_BIND_ADDR`: Server bind address (default: "0.0.0.0:3000")
    /// - `SITE_BASE_URL`: Public base URL (default: "http://localhost:3000")
    /// - `SITE_NAME`: Site name (default: "void")
    /// - `SUPABASE_URL`, `SUPABASE_KEY`: Content backend credentials (default: empty)
    /// - `SUBSCRIBE_ENDPOINT`: Subscription API (default: "http://localhost:3000/api/subscribe")
    /// - `ANALYTICS_ENDPOINT`: Analytics collector URL
    /// - `SITE_LISTING_LIMIT`: Rows per listing (default: 6)
    /// - `SITE_CACHE_TTL_SECS`: Listing cache TTL in seconds (default: 300)
    /// - `SITE_SOCIAL_LINKS`: Comma-separated `Label|url` pairs
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("SITE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let base_url = std::env::var("SITE_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .trim_end_matches('/')
            .to_string();

        let site_name = std::env::var("SITE_NAME").unwrap_or_else(|_| "void".to_string());

        let backend_url = std::env::var("SUPABASE_URL").unwrap_or_default();
        let backend_key = std::env::var("SUPABASE_KEY").unwrap_or_default();

        let subscribe_endpoint = std::env::var("SUBSCRIBE_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:3000/api/subscribe".to_string());

        let analytics_endpoint = std::env::var("ANALYTICS_ENDPOINT")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let listing_limit = match std::env::var("SITE_LISTING_LIMIT") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("SITE_LISTING_LIMIT must be an integer, got {raw:?}"))?,
            Err(_) => void_core::DEFAULT_LISTING_LIMIT,
        };
        if listing_limit == 0 {
            anyhow::bail!("SITE_LISTING_LIMIT must be at least 1");
        }

        let cache_ttl_secs = match std::env::var("SITE_CACHE_TTL_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("SITE_CACHE_TTL_SECS must be an integer, got {raw:?}"))?,
            Err(_) => 300,
        };

        let social_links = parse_social_links(
            &std::env::var("SITE_SOCIAL_LINKS").unwrap_or_else(|_| DEFAULT_SOCIAL_LINKS.to_string()),
        );

        if backend_url.is_empty() || backend_key.is_empty() {
            tracing::warn!("SUPABASE_URL or SUPABASE_KEY is not set; listings will render empty");
        }

        tracing::info!(
            bind_addr = %bind_addr,
            base_url = %base_url,
            site_name = %site_name,
            backend_url = %backend_url,
            subscribe_endpoint = %subscribe_endpoint,
            analytics = analytics_endpoint.is_some(),
            listing_limit,
            cache_ttl_secs,
            social_links = social_links.len(),
            "site configuration loaded"
        );

        Ok(Self {
            bind_addr,
            base_url,
            site_name,
            backend_url,
            backend_key,
            subscribe_endpoint,
            analytics_endpoint,
            listing_limit,
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            social_links,
        })
    }
}

/// Parse `Label|url` pairs separated by commas, dropping malformed or unsafe entries.
pub fn parse_social_links(raw: &str) -> Vec<SocialLink> {
    raw.split(',')
        .filter_map(|pair| {
            let (label, url) = pair.split_once('|')?;
            let (label, url) = (label.trim(), url.trim());
            let allowed = url.starts_with("https://")
                || url.starts_with("http://")
                || url.starts_with("mailto:");
            (!label.is_empty() && allowed).then(|| SocialLink {
                label: label.to_string(),
                url: url.to_string(),
            })
        })
        .collect()
}
