//! Decode of the user-directory payload.

use crate::retry::TransportError;
use crate::user::User;

/// Decodes a JSON array of user objects. Decode failures keep their
/// serde_json category so the classifier can split syntax from shape errors.
pub fn parse_users(bytes: &[u8]) -> Result<Vec<User>, TransportError> {
    Ok(serde_json::from_slice(bytes)?)
}
