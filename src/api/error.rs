//! Error types for REST calls.

use thiserror::Error;

/// Errors that can occur while talking to the ChitChat server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Base URL or endpoint could not be parsed
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request never produced a response (refused, DNS, reset)
    #[error("Request to '{path}' failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("Server rejected '{path}' with {status}: {body}")]
    Rejected {
        path: String,
        status: u16,
        body: String,
    },

    /// A success response whose body was not the expected JSON
    #[error("Unexpected response body from '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text shown in the error snackbar.
    ///
    /// A rejection forwards the server's body verbatim. A success response
    /// that could not be decoded gets a fixed text. Anything that never got a
    /// response falls back to `network_fallback`.
    pub fn notification_text(&self, network_fallback: &str) -> String {
        match self {
            ApiError::Rejected { status, body, .. } => {
                if body.is_empty() {
                    format!("Request failed with status {}", status)
                } else {
                    body.clone()
                }
            }
            ApiError::Decode { .. } => "Unexpected response from server".to_string(),
            _ => network_fallback.to_string(),
        }
    }
}

/// Turn an error response body into display text.
///
/// The server replies with plain text, but a JSON string literal is
/// unquoted so both forms read the same.
pub(crate) fn error_body_text(raw: String) -> String {
    match serde_json::from_str::<String>(&raw) {
        Ok(text) => text,
        Err(_) => raw,
    }
}
