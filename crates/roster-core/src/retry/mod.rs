//! Resilient-operation execution: failure classification and bounded retry.
//!
//! This module encapsulates the raw transport failure taxonomy, its ordered
//! classification into typed fetch outcomes, and the backoff/retry decisions,
//! so that higher layers (source, service) share a consistent policy.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::classify;
pub use error::TransportError;
pub use policy::RetryPolicy;
pub use run::{run_with_retry, run_with_retry_observed, RetryEvent};
