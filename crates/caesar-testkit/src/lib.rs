//! # caesar-testkit
//!
//! In-process mock of the research API on top of `tiny_http`, shared by the
//! client integration tests and the CLI handler tests.
//!
//! Each test starts a [`MockServer`] with a handler closure. Every request is
//! recorded so assertions can inspect method, path, headers, and body. The
//! helpers panic on setup failures since they only run inside tests.

#![allow(clippy::missing_panics_doc)]

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use serde::Serialize;

/// One request as the mock server saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    /// Path including any query string.
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Recorded {
    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }
}

/// Canned response returned by a handler.
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn json<T: Serialize>(value: &T) -> Self {
        Self {
            status: 200,
            body: serde_json::to_string(value).expect("serializable reply"),
        }
    }

    #[must_use]
    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// Mock API bound to a random local port. Shuts down on drop.
pub struct MockServer {
    pub url: String,
    server: Arc<tiny_http::Server>,
    requests: Arc<Mutex<Vec<Recorded>>>,
    handle: Option<JoinHandle<()>>,
}

impl MockServer {
    pub fn start<H>(handler: H) -> Self
    where
        H: Fn(&Recorded) -> Reply + Send + 'static,
    {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").expect("bind mock server"));
        let port = port_of(&server);

        let requests = Arc::new(Mutex::new(Vec::new()));
        let thread_server = Arc::clone(&server);
        let thread_requests = Arc::clone(&requests);

        let handle = std::thread::spawn(move || {
            for mut request in thread_server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let recorded = Recorded {
                    method: request.method().to_string(),
                    path: request.url().to_string(),
                    headers: request
                        .headers()
                        .iter()
                        .map(|h| (h.field.to_string(), h.value.to_string()))
                        .collect(),
                    body,
                };
                thread_requests
                    .lock()
                    .expect("requests lock")
                    .push(recorded.clone());

                let reply = handler(&recorded);
                let response = tiny_http::Response::from_string(reply.body)
                    .with_status_code(reply.status)
                    .with_header(
                        tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                            .expect("static header"),
                    );
                let _ = request.respond(response);
            }
        });

        Self {
            url: format!("http://127.0.0.1:{port}"),
            server,
            requests,
            handle: Some(handle),
        }
    }

    /// Requests received so far, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// A local port that was just released, so connecting to it is refused.
#[must_use]
pub fn closed_port() -> u16 {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind");
    port_of(&server)
}

fn port_of(server: &tiny_http::Server) -> u16 {
    server
        .server_addr()
        .to_ip()
        .map(|addr| addr.port())
        .expect("mock server has an IP address")
}
