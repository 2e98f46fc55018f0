//! Transient-failure retry for single HTTP requests.
//!
//! This layer retries exactly the request it was given; it knows nothing
//! about candidate query ids or pagination. Recoverable statuses and
//! transport-level connect/timeout failures are retried with bounded
//! backoff; everything else is returned to the caller immediately.

use rand::Rng;
use reqwest::header::RETRY_AFTER;
use std::time::Duration;
use tracing::{debug, warn};

use crate::client::{ApiRequest, HttpResponse, Transport};
use crate::error::FetchError;

/// Status codes worth retrying in place.
const RECOVERABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Retry policy for a single logical request.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the first attempt (2 retries = 3 attempts total).
    pub max_retries: u32,
    /// Base delay for exponential backoff.
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Creates a policy with a custom retry ceiling.
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            base_delay: Duration::from_millis(500),
        }
    }

    /// Disables retries.
    pub fn no_retry() -> Self {
        Self::new(0)
    }

    /// Returns true if the status is in the recoverable set.
    pub fn is_recoverable(&self, status: u16) -> bool {
        RECOVERABLE_STATUSES.contains(&status)
    }

    /// Computes the backoff for the given zero-based attempt:
    /// `base * 2^attempt` plus random jitter in `[0, base)`.
    pub fn backoff_for_attempt(&self, attempt: u32) -> Duration {
        let base_ms = self.base_delay.as_millis() as u64;
        let exp_ms = base_ms.saturating_mul(1u64 << attempt.min(16));
        let jitter_ms = rand::thread_rng().gen_range(0..base_ms.max(1));
        Duration::from_millis(exp_ms + jitter_ms)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Extracts a delay hint from the response, if one is present.
///
/// Only the delta-seconds form of `Retry-After` is honored (converted to
/// milliseconds exactly). The calendar-date form is ignored so the caller
/// falls back to exponential backoff.
fn delay_hint(response: &HttpResponse) -> Option<Duration> {
    response
        .headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(|secs| Duration::from_millis(secs * 1000))
}

/// Sends a request through the transport, retrying transient failures.
///
/// The final attempt's response (or error) is returned unmodified; the
/// caller decides what any status code means.
pub async fn send_with_retry(
    transport: &dyn Transport,
    request: &ApiRequest,
    policy: &RetryPolicy,
) -> Result<HttpResponse, FetchError> {
    let mut attempt = 0u32;

    loop {
        let result = transport.send(request).await;
        let is_last = attempt >= policy.max_retries;

        match result {
            Ok(response) => {
                if is_last || !policy.is_recoverable(response.status) {
                    return Ok(response);
                }

                let delay = delay_hint(&response)
                    .unwrap_or_else(|| policy.backoff_for_attempt(attempt));
                debug!(
                    status = response.status,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "Recoverable status, retrying"
                );
                tokio::time::sleep(delay).await;
            }
            Err(error) => {
                if is_last || !error.is_transient() {
                    return Err(error);
                }

                let delay = policy.backoff_for_attempt(attempt);
                warn!(
                    error = %error,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "Transport error, retrying"
                );
                tokio::time::sleep(delay).await;
            }
        }

        attempt += 1;
    }
}
