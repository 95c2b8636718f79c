//! Raw transport/codec failure, pre-classification.

/// Failure raised by the transport or codec layer for one fetch attempt.
/// Used so the classifier can map it onto the closed outcome taxonomy
/// before the retry decision is evaluated.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// curl reported an error (DNS, timeout, connection reset, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {code}: {status}")]
    Http { code: u32, status: String },
    /// Response payload failed to decode.
    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),
    /// Local I/O failed (fixture file reads).
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    /// Internal failure with no finer category (e.g. a dead worker task).
    #[error("{0}")]
    Worker(String),
}
