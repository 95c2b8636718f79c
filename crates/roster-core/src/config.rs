use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::retry::RetryPolicy;

/// Retry policy parameters (optional section in config.toml).
///
/// Field defaults mirror the built-in default policy, so a partial section
/// only overrides what it names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Additional tries after the first attempt (0 = no retries).
    pub max_attempts: u32,
    /// First backoff delay in milliseconds.
    pub initial_delay_ms: u64,
    /// Backoff cap in milliseconds.
    pub max_delay_ms: u64,
    /// Multiplier applied per completed attempt.
    pub backoff_multiplier: f64,
    pub retry_on_network_error: bool,
    pub retry_on_http_error: bool,
    pub retry_on_parse_error: bool,
    pub retry_on_unknown_error: bool,
    /// HTTP status codes worth another try.
    pub retryable_http_codes: Vec<u32>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        let mut codes: Vec<u32> = policy.retryable_http_codes.iter().copied().collect();
        codes.sort_unstable();
        Self {
            max_attempts: policy.max_attempts,
            initial_delay_ms: policy.initial_delay.as_millis() as u64,
            max_delay_ms: policy.max_delay.as_millis() as u64,
            backoff_multiplier: policy.backoff_multiplier,
            retry_on_network_error: policy.retry_on_network,
            retry_on_http_error: policy.retry_on_http,
            retry_on_parse_error: policy.retry_on_parse,
            retry_on_unknown_error: policy.retry_on_unknown,
            retryable_http_codes: codes,
        }
    }
}

impl RetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            initial_delay: Duration::from_millis(self.initial_delay_ms),
            max_delay: Duration::from_millis(self.max_delay_ms),
            backoff_multiplier: self.backoff_multiplier,
            retry_on_network: self.retry_on_network_error,
            retry_on_http: self.retry_on_http_error,
            retry_on_parse: self.retry_on_parse_error,
            retry_on_unknown: self.retry_on_unknown_error,
            retryable_http_codes: self.retryable_http_codes.iter().copied().collect(),
        }
    }
}

/// Global configuration loaded from `~/.config/roster/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    /// User-directory endpoint (http/https URL).
    pub endpoint: String,
    /// Connect timeout in seconds for the directory request.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://jsonplaceholder.typicode.com/users".to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            retry: None,
        }
    }
}

impl RosterConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Policy from the `[retry]` section, or the default policy without one.
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
            .as_ref()
            .map(RetryConfig::to_policy)
            .unwrap_or_default()
    }

    fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.endpoint)
            .with_context(|| format!("invalid endpoint URL: {}", self.endpoint))?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => anyhow::bail!("endpoint must be http or https, got {}://", other),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("roster")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RosterConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RosterConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: RosterConfig = toml::from_str(&data)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = RosterConfig::default();
        assert_eq!(cfg.endpoint, "https://jsonplaceholder.typicode.com/users");
        assert_eq!(cfg.connect_timeout_secs, 10);
        assert_eq!(cfg.request_timeout_secs, 30);
        assert!(cfg.retry.is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = RosterConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: RosterConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.endpoint, cfg.endpoint);
        assert_eq!(parsed.connect_timeout_secs, cfg.connect_timeout_secs);
        assert_eq!(parsed.request_timeout_secs, cfg.request_timeout_secs);
    }

    #[test]
    fn missing_retry_section_yields_default_policy() {
        let toml = r#"
            endpoint = "https://example.com/users"
            connect_timeout_secs = 5
            request_timeout_secs = 20
        "#;
        let cfg: RosterConfig = toml::from_str(toml).unwrap();
        assert!(cfg.retry.is_none());
        let policy = cfg.retry_policy();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.initial_delay, Duration::from_millis(1000));
    }

    #[test]
    fn partial_retry_section_overrides_only_named_fields() {
        let toml = r#"
            endpoint = "https://example.com/users"
            connect_timeout_secs = 5
            request_timeout_secs = 20

            [retry]
            max_attempts = 5
            initial_delay_ms = 500
            retryable_http_codes = [429, 503]
        "#;
        let cfg: RosterConfig = toml::from_str(toml).unwrap();
        let policy = cfg.retry_policy();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.initial_delay, Duration::from_millis(500));
        assert_eq!(policy.max_delay, Duration::from_millis(10_000));
        assert!(policy.retryable_http_codes.contains(&429));
        assert!(!policy.retryable_http_codes.contains(&500));
        assert!(policy.retry_on_network);
        assert!(!policy.retry_on_parse);
    }

    #[test]
    fn non_http_endpoint_is_rejected() {
        let cfg = RosterConfig {
            endpoint: "ftp://example.com/users".to_string(),
            ..RosterConfig::default()
        };
        assert!(cfg.validate().is_err());

        let garbage = RosterConfig {
            endpoint: "not a url".to_string(),
            ..RosterConfig::default()
        };
        assert!(garbage.validate().is_err());
    }

    #[test]
    fn retry_config_default_matches_default_policy() {
        let rc = RetryConfig::default();
        assert_eq!(rc.max_attempts, 3);
        assert_eq!(rc.initial_delay_ms, 1000);
        assert_eq!(rc.max_delay_ms, 10_000);
        assert_eq!(rc.retryable_http_codes, vec![500, 502, 503, 504]);
        assert!(rc.retry_on_network_error);
        assert!(!rc.retry_on_parse_error);
    }
}
