//! Wire types shared with the ChitChat server.
//!
//! Field names match the JSON emitted and accepted by the REST endpoints.

use serde::{Deserialize, Serialize};

/// Seconds since 1970-01-01 00:00:00 UTC.
pub type Timestamp = u64;

/// Server-assigned document ID for messages and users.
pub type DocumentId = u32;

/// A chat message as stored by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: DocumentId,
    /// ID of the user who wrote the message.
    pub author: DocumentId,
    pub text: String,
    pub created: Timestamp,
    /// Set once the message has been edited.
    #[serde(default)]
    pub modified: Option<Timestamp>,
}

/// Credentials handed out by `POST /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: DocumentId,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMessageParams {
    pub user: User,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMessageParams {
    /// ID of the message being edited.
    pub message: DocumentId,
    pub user: User,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteMessageParams {
    pub message: DocumentId,
    pub user: User,
}
