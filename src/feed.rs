//! Live message feed.
//!
//! The server broadcasts every created or edited message as a JSON text
//! frame on `/websocket`. New messages are committed as an `InsertMessage`;
//! edits fall back to a full re-fetch so each id appears once.

use futures_util::StreamExt;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message as WsMessage;

use crate::actions::Dispatcher;
use crate::api::ApiError;
use crate::models::Message;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error(transparent)]
    Url(#[from] ApiError),

    #[error("Failed to connect to '{url}': {source}")]
    Connect {
        url: String,
        #[source]
        source: tokio_tungstenite::tungstenite::Error,
    },

    #[error("Feed connection lost: {0}")]
    Stream(#[source] tokio_tungstenite::tungstenite::Error),
}

/// Consume the feed until the server closes it.
///
/// Frames that are not valid messages are logged and skipped.
pub async fn run(dispatcher: &Dispatcher) -> Result<(), FeedError> {
    let url = dispatcher.client().websocket_url()?;
    let (mut ws, _) = tokio_tungstenite::connect_async(url.as_str())
        .await
        .map_err(|e| FeedError::Connect {
            url: url.to_string(),
            source: e,
        })?;
    tracing::info!(url = %url, "Live feed connected");

    while let Some(frame) = ws.next().await {
        match frame.map_err(FeedError::Stream)? {
            WsMessage::Text(text) => match serde_json::from_str::<Message>(&text) {
                Ok(message) => {
                    // Failures are already logged and notified by the dispatcher.
                    let _ = dispatcher.receive_pushed(message).await;
                }
                Err(e) => tracing::warn!(error = %e, "Ignoring malformed feed frame"),
            },
            WsMessage::Close(_) => break,
            _ => {}
        }
    }

    tracing::info!("Live feed closed");
    Ok(())
}

/// Run the feed on a background task.
pub fn spawn(dispatcher: Dispatcher) -> JoinHandle<Result<(), FeedError>> {
    tokio::spawn(async move { run(&dispatcher).await })
}
