//! Retry loop: drive a fallible async operation until success, a
//! non-retryable failure, or an exhausted attempt budget.

use std::future::Future;
use std::time::Duration;

use super::policy::RetryPolicy;
use crate::outcome::{FetchError, FetchResult};

/// One retry about to happen, handed to the attempt observer.
///
/// Transient: borrows the triggering failure for the duration of the
/// callback and is never stored by the executor.
#[derive(Debug)]
pub struct RetryEvent<'a> {
    /// 1-based attempt that just failed.
    pub attempt: u32,
    /// Failure that triggered the retry.
    pub error: &'a FetchError,
    /// Computed backoff before the next attempt.
    pub delay: Duration,
}

/// Runs `operation` until it succeeds or the policy says stop.
///
/// The first attempt is free: `policy.max_attempts` bounds the number of
/// *additional* tries, so the operation runs at most `max_attempts + 1`
/// times. A raised transport failure is classified on the way in via
/// `Into<FetchError>`; a success returns immediately and a non-retryable
/// failure returns without consuming budget. Exactly one final outcome is
/// returned and no attempt is left in flight past that.
pub async fn run_with_retry<T, E, F, Fut>(policy: &RetryPolicy, operation: F) -> FetchResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Into<FetchError>,
{
    run_with_retry_observed(policy, operation, |_| {}).await
}

/// Like [`run_with_retry`], invoking `on_retry` before each backoff sleep.
///
/// The executor itself does no logging; observability is whatever the
/// injected callback does with the event.
pub async fn run_with_retry_observed<T, E, F, Fut, H>(
    policy: &RetryPolicy,
    mut operation: F,
    mut on_retry: H,
) -> FetchResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Into<FetchError>,
    H: FnMut(&RetryEvent<'_>),
{
    let mut attempt = 1u32;
    loop {
        let error = match operation().await {
            Ok(value) => return Ok(value),
            Err(e) => e.into(),
        };
        // Budget exhausted, or a kind the policy never retries: this
        // failure is final.
        if attempt > policy.max_attempts || !policy.should_retry(&error) {
            return Err(error);
        }
        let delay = policy.delay_for(attempt);
        on_retry(&RetryEvent {
            attempt,
            error: &error,
            delay,
        });
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}
