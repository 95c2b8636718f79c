//! HTTP GET of the user-directory payload via curl (libcurl).

use std::str;
use std::time::Duration;

use crate::retry::TransportError;

/// Fetches the response body for `url`, or the typed transport failure.
///
/// Follows redirects. A non-2xx terminal status is a `TransportError::Http`
/// carrying the code and reason phrase. Runs in the current thread; call
/// from `spawn_blocking` when used from async code.
pub fn fetch_body(
    url: &str,
    connect_timeout: Duration,
    request_timeout: Duration,
) -> Result<Vec<u8>, TransportError> {
    let mut body: Vec<u8> = Vec::new();
    let mut status_line: Option<String> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.connect_timeout(connect_timeout)?;
    easy.timeout(request_timeout)?;
    easy.accept_encoding("")?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                // Keep the last status line so redirects don't leave us with
                // the 3xx phrase.
                if s.starts_with("HTTP/") {
                    status_line = Some(s.trim_end().to_string());
                }
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()? as u32;
    if !(200..300).contains(&code) {
        let status = status_line
            .as_deref()
            .and_then(|line| reason_phrase(line, code))
            .map(str::to_string)
            .unwrap_or_else(|| canonical_reason(code).to_string());
        return Err(TransportError::Http { code, status });
    }

    Ok(body)
}

/// Extracts the reason phrase from a status line like "HTTP/1.1 503 Service
/// Unavailable". HTTP/2 status lines carry no phrase, so this can miss.
fn reason_phrase(line: &str, code: u32) -> Option<&str> {
    let after_code = line.split_once(&code.to_string())?.1.trim();
    if after_code.is_empty() {
        None
    } else {
        Some(after_code)
    }
}

/// Canonical phrases for the codes this client actually distinguishes.
fn canonical_reason(code: u32) -> &'static str {
    match code {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        408 => "Request Timeout",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "Error",
    }
}
