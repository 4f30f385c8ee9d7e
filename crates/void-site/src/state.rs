//! Application state shared across all request handlers.

use std::sync::Arc;

use moka::future::Cache;
use void_core::{
    AnalyticsHook, BackendClient, Collection, ContentStore, Entry, HttpSubscribeApi, Result,
    SubscribeApi, SubscribeHook,
};

use crate::config::Config;
use crate::inflight::InFlight;

/// Cached listing rows keyed by collection.
pub type ListingCache = Cache<Collection, Arc<Vec<Entry>>>;

/// One slot per collection.
const LISTING_CACHE_CAPACITY: u64 = 8;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Content backend.
    pub store: Arc<dyn ContentStore>,

    /// Subscription endpoint client.
    pub subscriber: Arc<dyn SubscribeApi>,

    /// Runs after a successful subscription.
    pub hook: Arc<dyn SubscribeHook>,

    /// Application configuration.
    pub config: Arc<Config>,

    /// Home page listings, refreshed every `config.cache_ttl`.
    pub listings: ListingCache,

    /// Emails with a subscription request in flight.
    pub in_flight: InFlight,
}

impl AppState {
    /// Create application state with the real backend, subscription and analytics clients.
    pub fn new(config: Config) -> Result<Self> {
        let store = BackendClient::new(&config.backend_url, &config.backend_key)?;
        let subscriber = HttpSubscribeApi::new(&config.subscribe_endpoint)?;
        let hook = AnalyticsHook::from_endpoint(config.analytics_endpoint.as_deref())?;

        Ok(Self::from_parts(
            config,
            Arc::new(store),
            Arc::new(subscriber),
            Arc::new(hook),
        ))
    }

    /// Create application state from explicitly constructed collaborators.
    pub fn from_parts(
        config: Config,
        store: Arc<dyn ContentStore>,
        subscriber: Arc<dyn SubscribeApi>,
        hook: Arc<dyn SubscribeHook>,
    ) -> Self {
        let listings = Cache::builder()
            .max_capacity(LISTING_CACHE_CAPACITY)
            .time_to_live(config.cache_ttl)
            .build();

        tracing::info!(
            cache_ttl_secs = config.cache_ttl.as_secs(),
            listing_limit = config.listing_limit,
            "application state initialized"
        );

        Self {
            store,
            subscriber,
            hook,
            config: Arc::new(config),
            listings,
            in_flight: InFlight::new(),
        }
    }
}
