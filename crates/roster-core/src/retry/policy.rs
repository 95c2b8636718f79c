//! Retry policy: per-kind decisions and exponential backoff.

use std::collections::HashSet;
use std::time::Duration;

use crate::outcome::FetchError;

/// Exponent clamp so the backoff power cannot blow up on absurd attempt
/// numbers; delays this deep are capped by `max_delay` anyway.
const MAX_BACKOFF_EXPONENT: u32 = 32;

/// Immutable retry configuration: attempt budget, backoff shape, and which
/// failure kinds (and HTTP codes) are worth another try.
///
/// `max_attempts` bounds *additional* tries after the first attempt, so 0
/// means a single attempt and no retries. `EmptyData` and success are never
/// retried regardless of configuration. Safe to share across concurrent
/// fetches.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    /// Multiplier applied per completed attempt; values below 1.0 behave as 1.0.
    pub backoff_multiplier: f64,
    pub retry_on_network: bool,
    pub retry_on_http: bool,
    pub retry_on_parse: bool,
    pub retry_on_unknown: bool,
    /// Consulted only when `retry_on_http` is set and the failure is `Http`.
    pub retryable_http_codes: HashSet<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(10_000),
            backoff_multiplier: 2.0,
            retry_on_network: true,
            retry_on_http: true,
            retry_on_parse: false,
            retry_on_unknown: true,
            retryable_http_codes: [500, 502, 503, 504].into_iter().collect(),
        }
    }
}

impl RetryPolicy {
    /// Wider budget for flaky links: more tries, shorter first delay, higher
    /// cap, and request-timeout/throttling codes added to the retryable set.
    pub fn aggressive() -> Self {
        Self {
            max_attempts: 5,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_millis(30_000),
            backoff_multiplier: 1.5,
            retryable_http_codes: [408, 429, 500, 502, 503, 504].into_iter().collect(),
            ..Self::default()
        }
    }

    /// Fewer tries with longer initial waits; same kinds and codes as default.
    pub fn conservative() -> Self {
        Self {
            max_attempts: 2,
            initial_delay: Duration::from_millis(2000),
            max_delay: Duration::from_millis(5000),
            ..Self::default()
        }
    }

    /// Single attempt, no retries.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 0,
            ..Self::default()
        }
    }

    /// Whether this failure kind (and HTTP code) is worth another attempt.
    ///
    /// `EmptyData` is never retried: an empty payload will not grow records
    /// on a repeat request.
    pub fn should_retry(&self, error: &FetchError) -> bool {
        match error {
            FetchError::Network { .. } => self.retry_on_network,
            FetchError::Parse { .. } => self.retry_on_parse,
            FetchError::Http { code, .. } => {
                self.retry_on_http && self.retryable_http_codes.contains(code)
            }
            FetchError::EmptyData { .. } => false,
            FetchError::Unknown { .. } => self.retry_on_unknown,
        }
    }

    /// Backoff delay after the given 1-based completed attempt.
    ///
    /// Grows as `initial_delay * multiplier^(attempt - 1)`, capped at
    /// `max_delay`. Attempt 0 (nothing completed yet) waits nothing.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }
        let multiplier = self.backoff_multiplier.max(1.0);
        let exponent = (attempt - 1).min(MAX_BACKOFF_EXPONENT);
        let scaled = self.initial_delay.as_millis() as f64 * multiplier.powi(exponent as i32);
        let capped = scaled.min(self.max_delay.as_millis() as f64);
        Duration::from_millis(capped as u64)
    }
}
