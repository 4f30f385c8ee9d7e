//! Analytics events for the subscription flow.
//!
//! Events are fire-and-forget: delivery failures are logged and never reach
//! the visitor. Without a collector endpoint, events are written to the
//! `analytics` tracing target instead.

use std::time::Duration;

use serde::Serialize;

use crate::error::Result;
use crate::http::REQUEST_TIMEOUT;
use crate::subscribe::SubscribeHook;

/// A single analytics event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    /// Event action (e.g. `submit_form`).
    pub action: String,
    /// Event category (e.g. `Subscribe`).
    pub category: String,
    /// Free-form label.
    pub label: String,
}

impl AnalyticsEvent {
    /// The event recorded after a successful newsletter signup.
    ///
    /// Note that the label carries the subscriber's email address.
    pub fn new_subscriber(email: &str) -> Self {
        Self {
            action: "submit_form".to_string(),
            category: "Subscribe".to_string(),
            label: format!("New Subscriber: {email} "),
        }
    }
}

/// Where events go.
#[derive(Debug, Clone)]
enum Sink {
    /// Structured log line on the `analytics` target.
    Log,
    /// JSON POST to a collector.
    Http {
        http: reqwest::Client,
        endpoint: String,
    },
}

/// [`SubscribeHook`] that records a [`AnalyticsEvent::new_subscriber`] event.
#[derive(Debug, Clone)]
pub struct AnalyticsHook {
    sink: Sink,
}

impl AnalyticsHook {
    /// Hook that logs events instead of sending them.
    pub fn log() -> Self {
        Self { sink: Sink::Log }
    }

    /// Hook that POSTs events to `endpoint`.
    pub fn http(endpoint: impl Into<String>) -> Result<Self> {
        Ok(Self {
            sink: Sink::Http {
                http: crate::http::client()?,
                endpoint: endpoint.into(),
            },
        })
    }

    /// HTTP hook when an endpoint is configured, logging hook otherwise.
    pub fn from_endpoint(endpoint: Option<&str>) -> Result<Self> {
        match endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            Some(endpoint) => Self::http(endpoint),
            None => Ok(Self::log()),
        }
    }

    /// Whether events are sent over HTTP.
    pub fn is_remote(&self) -> bool {
        matches!(self.sink, Sink::Http { .. })
    }

    /// Record an event without waiting for delivery.
    pub fn emit(&self, event: AnalyticsEvent) {
        match &self.sink {
            Sink::Log => {
                tracing::info!(
                    target: "analytics",
                    action = %event.action,
                    category = %event.category,
                    label = %event.label,
                    "analytics event"
                );
            }
            Sink::Http { http, endpoint } => {
                let Ok(handle) = tokio::runtime::Handle::try_current() else {
                    tracing::warn!(action = %event.action, "no runtime, analytics event dropped");
                    return;
                };

                let request = event_request(http, endpoint, &event, REQUEST_TIMEOUT);
                handle.spawn(deliver(request));
            }
        }
    }
}

fn event_request(
    http: &reqwest::Client,
    endpoint: &str,
    event: &AnalyticsEvent,
    timeout: Duration,
) -> reqwest::RequestBuilder {
    http.post(endpoint).timeout(timeout).json(event)
}

/// Send one event. Never outlives the request timeout.
async fn deliver(request: reqwest::RequestBuilder) {
    match request.send().await {
        Ok(response) if !response.status().is_success() => {
            tracing::warn!(status = %response.status(), "analytics collector refused event");
        }
        Ok(_) => {}
        Err(err) => {
            tracing::warn!(error = %err, timeout = err.is_timeout(), "failed to send analytics event");
        }
    }
}

impl SubscribeHook for AnalyticsHook {
    fn on_subscribed(&self, email: &str) {
        self.emit(AnalyticsEvent::new_subscriber(email));
    }
}
