//! `roster fetch` – fetch the user directory and render it.

use anyhow::Result;
use roster_core::config::RosterConfig;
use roster_core::connectivity::StaticProbe;
use roster_core::retry::RetryPolicy;
use roster_core::service::{LoadState, RosterService};
use roster_core::source::UserSource;
use roster_core::user::User;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug)]
pub struct FetchArgs {
    pub url: Option<String>,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub max_attempts: Option<u32>,
    pub no_retry: bool,
    pub offline: Option<String>,
}

pub async fn run_fetch(cfg: &RosterConfig, args: FetchArgs) -> Result<()> {
    let source = match args.file {
        Some(path) => UserSource::fixture(path),
        None => {
            let endpoint = args.url.unwrap_or_else(|| cfg.endpoint.clone());
            UserSource::remote(endpoint, cfg.connect_timeout(), cfg.request_timeout())
        }
    };

    let mut policy = if args.no_retry {
        RetryPolicy::no_retry()
    } else {
        cfg.retry_policy()
    };
    if let Some(max_attempts) = args.max_attempts {
        policy.max_attempts = max_attempts;
    }

    let probe = match args.offline {
        Some(description) => StaticProbe::offline(description),
        None => StaticProbe::online(),
    };

    let mut service = RosterService::new(source, policy, Arc::new(probe));
    service.load_users();

    match service.wait().await {
        LoadState::Success(users) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&users)?);
            } else {
                print_table(&users);
            }
            Ok(())
        }
        LoadState::Error {
            message, can_retry, ..
        } => {
            if can_retry {
                eprintln!("This operation can be retried.");
            }
            anyhow::bail!("{}", message);
        }
        // wait() only returns once the load is terminal.
        LoadState::Initial | LoadState::Loading => {
            anyhow::bail!("fetch ended without a terminal state")
        }
    }
}

fn print_table(users: &[User]) {
    if users.is_empty() {
        println!("No users in directory.");
        return;
    }
    println!("{:<6} {:<24} {:<18} {}", "ID", "NAME", "USERNAME", "EMAIL");
    for u in users {
        println!("{:<6} {:<24} {:<18} {}", u.id, u.name, u.username, u.email);
    }
}
