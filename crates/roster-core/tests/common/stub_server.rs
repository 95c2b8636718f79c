//! Minimal scripted HTTP/1.1 server for integration tests.
//!
//! Serves a fixed sequence of canned responses: request N gets the Nth
//! scripted response, and requests past the end of the script keep getting
//! the last one. Counts how many requests actually arrived so tests can
//! assert attempt budgets.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u32,
    pub reason: &'static str,
    pub body: String,
}

impl StubResponse {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            reason: "OK",
            body: body.to_string(),
        }
    }

    pub fn service_unavailable() -> Self {
        Self {
            status: 503,
            reason: "Service Unavailable",
            body: "service unavailable".to_string(),
        }
    }
}

pub struct StubServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl StubServer {
    /// Number of requests the server has answered so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread. Returns the base URL and hit
/// counter; the server runs until the process exits.
pub fn start(script: Vec<StubResponse>) -> StubServer {
    assert!(!script.is_empty(), "script must contain at least one response");
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(AtomicUsize::new(0));
    let script = Arc::new(script);

    let server_hits = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let n = server_hits.fetch_add(1, Ordering::SeqCst);
            let response = script[n.min(script.len() - 1)].clone();
            thread::spawn(move || handle(stream, &response));
        }
    });

    StubServer {
        url: format!("http://127.0.0.1:{}/users", port),
        hits,
    }
}

fn handle(mut stream: std::net::TcpStream, response: &StubResponse) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    // One request per connection; the payload is ignored.
    if matches!(stream.read(&mut buf), Ok(0) | Err(_)) {
        return;
    }
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        response.reason,
        response.body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(response.body.as_bytes());
}
