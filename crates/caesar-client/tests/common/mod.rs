#![allow(dead_code)]

use caesar_client::{CaesarClient, ClientOptions};
pub use caesar_testkit::{MockServer, Recorded, Reply, closed_port};

/// Client pointed at a mock server.
pub trait MockClient {
    fn client(&self) -> CaesarClient;
}

impl MockClient for MockServer {
    fn client(&self) -> CaesarClient {
        CaesarClient::with_options(ClientOptions {
            base_url: self.url.clone(),
            api_key: "test-key".into(),
            ..Default::default()
        })
        .expect("client builds")
    }
}
