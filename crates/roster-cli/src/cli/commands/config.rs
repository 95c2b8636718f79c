//! `roster config` – show the resolved config path and effective settings.

use anyhow::Result;
use roster_core::config::{self, RosterConfig};

pub fn run_config(cfg: &RosterConfig) -> Result<()> {
    let path = config::config_path()?;
    println!("config file: {}", path.display());
    println!("endpoint: {}", cfg.endpoint);
    println!("connect timeout: {}s", cfg.connect_timeout_secs);
    println!("request timeout: {}s", cfg.request_timeout_secs);

    let policy = cfg.retry_policy();
    let mut codes: Vec<u32> = policy.retryable_http_codes.iter().copied().collect();
    codes.sort_unstable();
    println!(
        "retry: {} additional attempt(s), {}ms initial delay, {}ms cap, x{} backoff",
        policy.max_attempts,
        policy.initial_delay.as_millis(),
        policy.max_delay.as_millis(),
        policy.backoff_multiplier
    );
    println!(
        "retry kinds: network={} http={} parse={} unknown={}",
        policy.retry_on_network, policy.retry_on_http, policy.retry_on_parse, policy.retry_on_unknown
    );
    println!("retryable http codes: {:?}", codes);
    Ok(())
}
