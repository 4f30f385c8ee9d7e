//! Signups currently being forwarded upstream.
//!
//! Each form post runs its own [`SubscribeWidget`](void_core::SubscribeWidget),
//! so the widget alone cannot stop a double-clicked form from sending the
//! same email twice. Handlers claim the email here first; a second post for
//! an email that is still in flight does not reach the subscription API.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

/// Set of normalized emails with a request in flight.
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    emails: Arc<Mutex<HashSet<String>>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `email` for the caller.
    ///
    /// Returns `None` while another claim on the same normalized email is
    /// alive. The claim is released when the returned guard is dropped.
    pub fn try_claim(&self, email: &str) -> Option<Claim> {
        let key = normalize(email);
        if !self.emails.lock().insert(key.clone()) {
            return None;
        }

        Some(Claim {
            emails: Arc::clone(&self.emails),
            key,
        })
    }

    /// Number of emails currently claimed.
    pub fn len(&self) -> usize {
        self.emails.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Releases its email on drop.
#[derive(Debug)]
pub struct Claim {
    emails: Arc<Mutex<HashSet<String>>>,
    key: String,
}

impl Drop for Claim {
    fn drop(&mut self) {
        self.emails.lock().remove(&self.key);
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_claim_is_refused_until_release() {
        let in_flight = InFlight::new();

        let claim = in_flight.try_claim("me@example.com");
        assert!(claim.is_some());
        assert!(in_flight.try_claim("me@example.com").is_none());
        assert_eq!(in_flight.len(), 1);

        drop(claim);
        assert!(in_flight.is_empty());
        assert!(in_flight.try_claim("me@example.com").is_some());
    }

    #[test]
    fn claims_match_case_and_whitespace_insensitively() {
        let in_flight = InFlight::new();

        let _claim = in_flight.try_claim("Me@Example.com").unwrap();

        assert!(in_flight.try_claim("  me@example.com ").is_none());
    }

    #[test]
    fn different_emails_do_not_block_each_other() {
        let in_flight = InFlight::new();

        let _a = in_flight.try_claim("a@example.com").unwrap();
        let _b = in_flight.try_claim("b@example.com").unwrap();

        assert_eq!(in_flight.len(), 2);
    }

    #[test]
    fn clones_share_claims() {
        let in_flight = InFlight::new();
        let other = in_flight.clone();

        let _claim = in_flight.try_claim("me@example.com").unwrap();

        assert!(other.try_claim("me@example.com").is_none());
    }
}
