//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use chitchat_client::actions::Dispatcher;
use chitchat_client::api::ApiClient;
use chitchat_client::models::{Message, User};
use chitchat_client::store::Store;
use std::net::TcpListener;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Dispatcher with a fresh store pointed at `base_url`.
pub fn make_dispatcher(base_url: &str) -> Dispatcher {
    let client = ApiClient::new(base_url).expect("valid base url");
    Dispatcher::new(client, Store::new())
}

pub fn message(id: u32) -> Message {
    Message {
        id,
        author: 1,
        text: format!("message {}", id),
        created: 1_700_000_000 + id as u64,
        modified: None,
    }
}

pub fn user(id: u32) -> User {
    User {
        id,
        password: format!("pw-{}", id),
    }
}

pub fn ids(messages: &[Message]) -> Vec<u32> {
    messages.iter().map(|m| m.id).collect()
}
