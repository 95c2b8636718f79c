//! Pre-flight connectivity gate.
//!
//! The gate is advisory: the probe can flip between the check and the actual
//! request, so callers still rely on classification of the operation's own
//! failure as the authoritative signal. It only exists to fail fast without
//! burning an attempt when the device is known to be offline.

use crate::outcome::FetchError;

/// Device connectivity status, consumed as a boolean plus a human-readable
/// description (e.g. "wifi", "no active interface").
pub trait ConnectivityProbe {
    fn is_connected(&self) -> bool;
    fn status_description(&self) -> String;
}

/// Short-circuits to a network failure when the probe reports offline.
///
/// Returns `Ok(())` to proceed; the error carries no source because no
/// transport failure was ever raised.
pub fn require_connectivity(probe: &dyn ConnectivityProbe) -> Result<(), FetchError> {
    if probe.is_connected() {
        return Ok(());
    }
    Err(FetchError::Network {
        message: format!("No internet connection. {}", probe.status_description()),
        source: None,
    })
}

/// Fixed-answer probe for the CLI and tests.
#[derive(Debug, Clone)]
pub struct StaticProbe {
    pub connected: bool,
    pub description: String,
}

impl StaticProbe {
    pub fn online() -> Self {
        Self {
            connected: true,
            description: "connected".to_string(),
        }
    }

    pub fn offline(description: impl Into<String>) -> Self {
        Self {
            connected: false,
            description: description.into(),
        }
    }
}

impl ConnectivityProbe for StaticProbe {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn status_description(&self) -> String {
        self.description.clone()
    }
}
