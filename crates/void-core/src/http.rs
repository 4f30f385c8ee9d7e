//! Outbound HTTP client shared by every adapter.

use std::time::Duration;

use crate::error::Result;

/// Request timeout for every outbound call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Build a client with [`REQUEST_TIMEOUT`] applied.
pub(crate) fn client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}
