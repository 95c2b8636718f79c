//! Ordered classification of transport failures into fetch outcomes.
//!
//! Rules are evaluated top-down and the first match wins. The order is
//! load-bearing: curl reports a timeout through a code that also reads as a
//! generic transport failure, and serde_json's syntax and data categories
//! must land on different parse messages.

use serde_json::error::Category;

use super::error::TransportError;
use crate::outcome::FetchError;

/// Classify a raw transport failure into exactly one `FetchError` kind.
///
/// Total and infallible: anything the explicit rules miss falls through to
/// `Unknown`. The original failure is kept in `source` unmodified.
pub fn classify(failure: TransportError) -> FetchError {
    // Rule 1: unresolvable host/proxy or no route to the remote.
    if is_unreachable(&failure) {
        return FetchError::Network {
            message: "No internet connection available".to_string(),
            source: Some(failure),
        };
    }
    // Rule 2: connect or transfer timeout.
    if is_timeout(&failure) {
        return FetchError::Network {
            message: "Connection timed out".to_string(),
            source: Some(failure),
        };
    }
    // Rule 3: payload is not valid JSON syntax (including truncation).
    if is_syntax_decode(&failure) {
        return FetchError::Parse {
            message: "Failed to parse server response".to_string(),
            source: Some(failure),
        };
    }
    // Rule 4: any other connectivity-layer failure.
    if is_transport(&failure) {
        return FetchError::Network {
            message: "Network error occurred".to_string(),
            source: Some(failure),
        };
    }
    // Rule 5: remote answered with a non-2xx status.
    if let TransportError::Http { code, status } = &failure {
        let code = *code;
        let message = format!("HTTP {}: {}", code, status);
        return FetchError::Http {
            code,
            message,
            source: Some(failure),
        };
    }
    // Rule 6: valid JSON with the wrong shape for the expected payload.
    if is_data_decode(&failure) {
        return FetchError::Parse {
            message: "Invalid data format received".to_string(),
            source: Some(failure),
        };
    }
    // Rule 7: everything else.
    FetchError::Unknown {
        message: format!("An unexpected error occurred: {}", failure),
        source: Some(failure),
    }
}

/// Classification at the `?` boundary: an operation raising a raw transport
/// failure is treated identically to one returning a classified outcome.
impl From<TransportError> for FetchError {
    fn from(failure: TransportError) -> Self {
        classify(failure)
    }
}

fn is_unreachable(failure: &TransportError) -> bool {
    match failure {
        TransportError::Curl(e) => {
            e.is_couldnt_resolve_host() || e.is_couldnt_resolve_proxy() || e.is_couldnt_connect()
        }
        _ => false,
    }
}

fn is_timeout(failure: &TransportError) -> bool {
    match failure {
        TransportError::Curl(e) => e.is_operation_timedout(),
        _ => false,
    }
}

fn is_syntax_decode(failure: &TransportError) -> bool {
    match failure {
        TransportError::Decode(e) => matches!(e.classify(), Category::Syntax | Category::Eof),
        _ => false,
    }
}

fn is_transport(failure: &TransportError) -> bool {
    match failure {
        TransportError::Curl(_) | TransportError::Io(_) => true,
        TransportError::Decode(e) => e.classify() == Category::Io,
        _ => false,
    }
}

fn is_data_decode(failure: &TransportError) -> bool {
    match failure {
        TransportError::Decode(e) => e.classify() == Category::Data,
        _ => false,
    }
}
