//! Data-access layer: where the user directory comes from.
//!
//! A source bundles transport + decode into the single fallible unit the
//! retry executor drives. Raw transport failures leave this module through
//! `?`, which classifies them into the typed outcome taxonomy.

mod fixture;
mod http;
mod parse;

use std::path::PathBuf;
use std::time::Duration;

use crate::outcome::{FetchError, FetchResult};
use crate::retry::TransportError;
use crate::user::User;

/// Origin of the user-directory payload.
#[derive(Debug, Clone)]
pub enum UserSource {
    /// HTTP GET against the configured directory endpoint.
    Remote {
        endpoint: String,
        connect_timeout: Duration,
        request_timeout: Duration,
    },
    /// Canned local JSON file.
    Fixture { path: PathBuf },
}

impl UserSource {
    pub fn remote(
        endpoint: impl Into<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Self {
        Self::Remote {
            endpoint: endpoint.into(),
            connect_timeout,
            request_timeout,
        }
    }

    pub fn fixture(path: impl Into<PathBuf>) -> Self {
        Self::Fixture { path: path.into() }
    }

    /// One fetch attempt: transfer, decode, and the mandatory-data check.
    ///
    /// A well-formed but empty list is an `EmptyData` failure (the directory
    /// is never legitimately empty); the caller decides how to surface it.
    /// Blocking curl work runs under `spawn_blocking` so the executor's
    /// timers keep running.
    pub async fn fetch_users(&self) -> FetchResult<Vec<User>> {
        let bytes = match self {
            UserSource::Remote {
                endpoint,
                connect_timeout,
                request_timeout,
            } => {
                let endpoint = endpoint.clone();
                let connect_timeout = *connect_timeout;
                let request_timeout = *request_timeout;
                tokio::task::spawn_blocking(move || {
                    http::fetch_body(&endpoint, connect_timeout, request_timeout)
                })
                .await
                .map_err(|e| TransportError::Worker(format!("fetch task failed: {}", e)))??
            }
            UserSource::Fixture { path } => fixture::read_fixture(path).await?,
        };

        let users = parse::parse_users(&bytes)?;
        if users.is_empty() {
            return Err(FetchError::EmptyData {
                message: "Response contained no users".to_string(),
            });
        }
        Ok(users)
    }
}
