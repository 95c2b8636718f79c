//! Canned local payload, for offline demos and tests.

use std::path::Path;

use crate::retry::TransportError;

/// Reads the fixture file's bytes; I/O failures surface as
/// `TransportError::Io` and classify as network failures.
pub async fn read_fixture(path: &Path) -> Result<Vec<u8>, TransportError> {
    Ok(tokio::fs::read(path).await?)
}
