//! Error types for backend and subscription calls.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the backend or the subscription endpoint.
#[derive(Error, Debug)]
pub enum Error {
    /// The backend URL or key was empty when the client was built.
    #[error("backend is not configured (missing URL or API key)")]
    NotConfigured,

    /// Transport failure, timeout, or an undecodable response body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for logging.
        body: String,
    },

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_not_configured() {
        assert_eq!(
            Error::NotConfigured.to_string(),
            "backend is not configured (missing URL or API key)"
        );
    }

    #[test]
    fn error_display_status() {
        let err = Error::Status {
            status: 401,
            body: "invalid api key".to_string(),
        };
        assert_eq!(err.to_string(), "unexpected status 401: invalid api key");
    }

    #[test]
    fn error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
