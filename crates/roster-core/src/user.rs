//! User record returned by the directory endpoint.

use serde::{Deserialize, Serialize};

/// One user record from the directory payload.
///
/// Only the columns the client renders are kept; unknown payload fields
/// are ignored during decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
}
