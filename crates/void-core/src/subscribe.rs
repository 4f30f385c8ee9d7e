//! Newsletter subscription flow.
//!
//! [`SubscribeWidget`] is a small state machine:
//!
//! ```text
//! Idle ──begin()──▶ Submitting ──finish(Subscribed)──▶ Subscribed
//!  ▲                    │
//!  └──finish(error)─────┘   (error message set, email kept)
//! ```
//!
//! `begin()` refuses to start when the email is shorter than
//! [`MIN_EMAIL_LEN`] UTF-16 code units or when a submission is already in flight,
//! so one widget never issues two requests at once.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Shortest email accepted for submission, in UTF-16 code units.
pub const MIN_EMAIL_LEN: usize = 4;

/// The one message shown for every failed attempt.
pub const FAILURE_MESSAGE: &str = "Failed to subscribe. Double check your email and try again.";

/// Outcome reported by the subscription endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscribeResponse {
    /// The endpoint accepted the email.
    Subscribed,
    /// The endpoint answered with a truthy `error` field.
    Rejected(String),
}

impl SubscribeResponse {
    /// Interpret a `{ "error"?: ... }` response body.
    ///
    /// `error` is judged by JavaScript truthiness: absent, `null`, `false`,
    /// `0` and `""` all mean success. A body that is not a JSON object is a
    /// rejection.
    pub fn from_body(body: &Value) -> Self {
        let Value::Object(map) = body else {
            return Self::Rejected(format!("unexpected response body: {body}"));
        };

        match map.get("error") {
            Some(error) if is_truthy(error) => Self::Rejected(match error {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            }),
            _ => Self::Subscribed,
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Sends one subscription request.
#[async_trait]
pub trait SubscribeApi: Send + Sync {
    /// Submit `email`. Transport failures are `Err`; endpoint refusals are
    /// [`SubscribeResponse::Rejected`].
    async fn subscribe(&self, email: &str) -> Result<SubscribeResponse>;
}

/// Side effect run after a successful subscription.
pub trait SubscribeHook: Send + Sync {
    /// Called once, after the widget reaches [`Status::Subscribed`].
    fn on_subscribed(&self, email: &str);
}

/// Hook that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

impl SubscribeHook for NoopHook {
    fn on_subscribed(&self, _email: &str) {}
}

#[derive(Debug, Serialize)]
struct SubscribeRequest<'a> {
    email: &'a str,
}

/// [`SubscribeApi`] that POSTs `{"email": ...}` as JSON to an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpSubscribeApi {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpSubscribeApi {
    /// Create a client for the subscription endpoint at `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: crate::http::client()?,
            endpoint: endpoint.into(),
        })
    }

    /// The endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubscribeApi for HttpSubscribeApi {
    async fn subscribe(&self, email: &str) -> Result<SubscribeResponse> {
        // The status code is not consulted; only the body's `error` field is.
        let body: Value = self
            .http
            .post(&self.endpoint)
            .json(&SubscribeRequest { email })
            .send()
            .await?
            .json()
            .await?;

        Ok(SubscribeResponse::from_body(&body))
    }
}

/// Where the widget is in the subscription flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Waiting for input. Carries the message of the last failed attempt.
    Idle {
        /// Message from the last failed attempt, if any.
        error: Option<String>,
    },
    /// A request is in flight.
    Submitting,
    /// Terminal success.
    Subscribed,
}

impl Default for Status {
    fn default() -> Self {
        Self::Idle { error: None }
    }
}

/// Email capture state for one visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscribeWidget {
    email: String,
    status: Status,
}

impl SubscribeWidget {
    /// A fresh, idle widget with an empty email field.
    pub fn new() -> Self {
        Self::default()
    }

    /// An idle widget with the email field pre-filled.
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            status: Status::default(),
        }
    }

    /// Current email field value.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Current state.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Error message from the last failed attempt.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            Status::Idle { error } => error.as_deref(),
            _ => None,
        }
    }

    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.status == Status::Submitting
    }

    /// Whether the visitor is subscribed.
    pub fn is_subscribed(&self) -> bool {
        self.status == Status::Subscribed
    }

    /// Replace the email field. Ignored unless the widget is idle.
    pub fn set_email(&mut self, email: impl Into<String>) {
        if matches!(self.status, Status::Idle { .. }) {
            self.email = email.into();
        }
    }

    /// Try to start a submission.
    ///
    /// Returns the email to send, or `None` when the email is too short or
    /// the widget is not idle. On `None` nothing changes.
    pub fn begin(&mut self) -> Option<String> {
        if !matches!(self.status, Status::Idle { .. }) {
            return None;
        }
        if email_len(&self.email) < MIN_EMAIL_LEN {
            return None;
        }

        self.status = Status::Submitting;
        Some(self.email.clone())
    }

    /// Apply the result of the request started by [`begin`](Self::begin).
    ///
    /// Returns `true` when the widget became subscribed. Ignored unless a
    /// submission is in flight.
    pub fn finish(&mut self, outcome: Result<SubscribeResponse>) -> bool {
        if self.status != Status::Submitting {
            return false;
        }

        match outcome {
            Ok(SubscribeResponse::Subscribed) => {
                self.status = Status::Subscribed;
                true
            }
            Ok(SubscribeResponse::Rejected(reason)) => {
                tracing::warn!(reason = %reason, "subscription rejected by endpoint");
                self.fail();
                false
            }
            Err(err) => {
                tracing::warn!(error = %err, "subscription request failed");
                self.fail();
                false
            }
        }
    }

    fn fail(&mut self) {
        self.status = Status::Idle {
            error: Some(FAILURE_MESSAGE.to_string()),
        };
    }

    /// Run a whole submission: guard, one request, state update, and the
    /// success hook.
    pub async fn submit(&mut self, api: &dyn SubscribeApi, hook: &dyn SubscribeHook) -> &Status {
        let Some(email) = self.begin() else {
            tracing::debug!(email_len = email_len(&self.email), "subscription not started");
            return &self.status;
        };

        let outcome = api.subscribe(&email).await;
        if self.finish(outcome) {
            tracing::info!("new newsletter subscriber");
            hook.on_subscribed(&email);
        }

        &self.status
    }
}

/// Length as a browser counts it: UTF-16 code units.
fn email_len(email: &str) -> usize {
    email.encode_utf16().count()
}
