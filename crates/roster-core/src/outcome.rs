//! Typed outcome of a fetch operation.
//!
//! `FetchError` is the closed failure taxonomy the classifier produces:
//! every failure an operation can raise maps onto exactly one of these five
//! kinds. Consumers match exhaustively, so adding a kind is a
//! compile-visible change at every decision site (retry policy, user copy,
//! state folding).

use crate::retry::TransportError;

/// Outcome of one fetch operation: payload, or one classified failure.
pub type FetchResult<T> = Result<T, FetchError>;

/// Classified failure of a fetch operation.
///
/// `source`, when present, holds the original transport failure unmodified
/// so diagnostics keep the full cause chain.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connectivity, timeout, or other transport-level failure.
    #[error("{message}")]
    Network {
        message: String,
        #[source]
        source: Option<TransportError>,
    },
    /// Response payload could not be decoded.
    #[error("{message}")]
    Parse {
        message: String,
        #[source]
        source: Option<TransportError>,
    },
    /// Remote responded with a non-2xx status.
    #[error("{message}")]
    Http {
        code: u32,
        message: String,
        #[source]
        source: Option<TransportError>,
    },
    /// Well-formed response with no records where records were mandatory.
    #[error("{message}")]
    EmptyData { message: String },
    /// Anything the classification rules did not cover.
    #[error("{message}")]
    Unknown {
        message: String,
        #[source]
        source: Option<TransportError>,
    },
}

impl FetchError {
    /// Diagnostic message carried by the failure.
    pub fn message(&self) -> &str {
        match self {
            FetchError::Network { message, .. }
            | FetchError::Parse { message, .. }
            | FetchError::Http { message, .. }
            | FetchError::EmptyData { message }
            | FetchError::Unknown { message, .. } => message,
        }
    }

    /// Status code when the failure is `Http`.
    pub fn http_code(&self) -> Option<u32> {
        match self {
            FetchError::Http { code, .. } => Some(*code),
            FetchError::Network { .. }
            | FetchError::Parse { .. }
            | FetchError::EmptyData { .. }
            | FetchError::Unknown { .. } => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, FetchError::Parse { .. })
    }

    pub fn is_http(&self) -> bool {
        matches!(self, FetchError::Http { .. })
    }

    pub fn is_empty_data(&self) -> bool {
        matches!(self, FetchError::EmptyData { .. })
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, FetchError::Unknown { .. })
    }
}
