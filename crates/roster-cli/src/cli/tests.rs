//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_fetch_defaults() {
    match parse(&["roster", "fetch"]) {
        CliCommand::Fetch {
            url,
            file,
            json,
            max_attempts,
            no_retry,
            offline,
        } => {
            assert!(url.is_none());
            assert!(file.is_none());
            assert!(!json);
            assert!(max_attempts.is_none());
            assert!(!no_retry);
            assert!(offline.is_none());
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_url_and_json() {
    match parse(&["roster", "fetch", "--url", "https://example.com/users", "--json"]) {
        CliCommand::Fetch { url, json, .. } => {
            assert_eq!(url.as_deref(), Some("https://example.com/users"));
            assert!(json);
        }
        _ => panic!("expected Fetch with --url"),
    }
}

#[test]
fn cli_parse_fetch_file() {
    match parse(&["roster", "fetch", "--file", "/tmp/users.json"]) {
        CliCommand::Fetch { file, url, .. } => {
            assert_eq!(file.as_deref(), Some(std::path::Path::new("/tmp/users.json")));
            assert!(url.is_none());
        }
        _ => panic!("expected Fetch with --file"),
    }
}

#[test]
fn cli_parse_fetch_url_conflicts_with_file() {
    let result = Cli::try_parse_from([
        "roster",
        "fetch",
        "--url",
        "https://example.com/users",
        "--file",
        "/tmp/users.json",
    ]);
    assert!(result.is_err());
}

#[test]
fn cli_parse_fetch_retry_overrides() {
    match parse(&["roster", "fetch", "--max-attempts", "5"]) {
        CliCommand::Fetch {
            max_attempts,
            no_retry,
            ..
        } => {
            assert_eq!(max_attempts, Some(5));
            assert!(!no_retry);
        }
        _ => panic!("expected Fetch with --max-attempts"),
    }

    match parse(&["roster", "fetch", "--no-retry"]) {
        CliCommand::Fetch { no_retry, .. } => assert!(no_retry),
        _ => panic!("expected Fetch with --no-retry"),
    }

    let conflict = Cli::try_parse_from(["roster", "fetch", "--max-attempts", "5", "--no-retry"]);
    assert!(conflict.is_err());
}

#[test]
fn cli_parse_fetch_offline() {
    match parse(&["roster", "fetch", "--offline", "airplane mode"]) {
        CliCommand::Fetch { offline, .. } => {
            assert_eq!(offline.as_deref(), Some("airplane mode"));
        }
        _ => panic!("expected Fetch with --offline"),
    }
}

#[test]
fn cli_parse_config() {
    assert!(matches!(parse(&["roster", "config"]), CliCommand::Config));
}
