use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::{error_body_text, ApiError};
use crate::config::ServerConfig;
use crate::models::{
    CreateMessageParams, DeleteMessageParams, Message, UpdateMessageParams, User,
};

const USERS: &str = "users";
const MESSAGES: &str = "messages";
const WEBSOCKET: &str = "websocket";

/// Typed client for the ChitChat REST endpoints.
///
/// One call is one request: no timeout, retry or cancellation is layered on
/// top of reqwest.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = parse_base_url(base_url)?;
        let client = Client::builder().build().map_err(ApiError::Client)?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self, ApiError> {
        Self::new(&config.base_url)
    }

    /// `POST /users`
    pub async fn create_user(&self) -> Result<User, ApiError> {
        let response = self.send::<()>(Method::POST, USERS, None).await?;
        decode(USERS, response).await
    }

    /// `GET /messages`
    pub async fn read_messages(&self) -> Result<Vec<Message>, ApiError> {
        let response = self.send::<()>(Method::GET, MESSAGES, None).await?;
        decode(MESSAGES, response).await
    }

    /// `POST /messages`. The created message comes back through the live feed.
    pub async fn create_message(&self, params: &CreateMessageParams) -> Result<(), ApiError> {
        self.send(Method::POST, MESSAGES, Some(params)).await?;
        Ok(())
    }

    /// `PUT /messages`
    pub async fn update_message(&self, params: &UpdateMessageParams) -> Result<(), ApiError> {
        self.send(Method::PUT, MESSAGES, Some(params)).await?;
        Ok(())
    }

    /// `DELETE /messages` with a JSON body.
    pub async fn delete_message(&self, params: &DeleteMessageParams) -> Result<(), ApiError> {
        self.send(Method::DELETE, MESSAGES, Some(params)).await?;
        Ok(())
    }

    /// URL of the server's message broadcast socket.
    pub fn websocket_url(&self) -> Result<Url, ApiError> {
        let mut url = self.endpoint(WEBSOCKET)?;
        let scheme = if url.scheme() == "https" { "wss" } else { "ws" };
        url.set_scheme(scheme).map_err(|_| ApiError::InvalidUrl {
            url: url.to_string(),
            reason: format!("cannot switch scheme to {}", scheme),
        })?;
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url.join(path).map_err(|e| ApiError::InvalidUrl {
            url: format!("{}{}", self.base_url, path),
            reason: e.to_string(),
        })
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        let url = self.endpoint(path)?;
        tracing::debug!(method = %method, url = %url, "Sending request");

        let mut builder = self.client.request(method, url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| ApiError::Transport {
            path: path.to_string(),
            source: e,
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let raw = response.text().await.map_err(|e| ApiError::Transport {
            path: path.to_string(),
            source: e,
        })?;

        Err(ApiError::Rejected {
            path: path.to_string(),
            status: status.as_u16(),
            body: error_body_text(raw),
        })
    }
}

async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| ApiError::Decode {
        path: path.to_string(),
        source: e,
    })
}

// Endpoints are joined relative to the base, so its path must end in '/'.
fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(raw).map_err(|e| ApiError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidUrl {
            url: raw.to_string(),
            reason: "not a hierarchical URL".to_string(),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
