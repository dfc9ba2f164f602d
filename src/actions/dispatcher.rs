use tokio::task::JoinHandle;

use crate::actions::types::Action;
use crate::api::{ApiClient, ApiError};
use crate::config::{Config, NotifyPolicy};
use crate::models::{
    CreateMessageParams, DeleteMessageParams, Message, UpdateMessageParams, User,
};
use crate::store::{Store, StoreMutation};

/// Runs actions against the server and commits their outcome.
///
/// Success commits the mutation mapped to the action (if any). Failure
/// commits `ShowErrorSnackbar` unless the policy is [`NotifyPolicy::Silent`].
/// Either way the caller gets the `Result` back.
#[derive(Clone)]
pub struct Dispatcher {
    client: ApiClient,
    store: Store,
    policy: NotifyPolicy,
    network_error_message: String,
}

impl Dispatcher {
    pub fn new(client: ApiClient, store: Store) -> Self {
        let notifications = crate::config::NotificationConfig::default();
        Self {
            client,
            store,
            policy: notifications.policy,
            network_error_message: notifications.network_error_message,
        }
    }

    pub fn from_config(config: &Config, store: Store) -> Result<Self, ApiError> {
        let client = ApiClient::from_config(&config.server)?;
        Ok(Self::new(client, store)
            .with_policy(config.notifications.policy)
            .with_network_error_message(config.notifications.network_error_message.clone()))
    }

    pub fn with_policy(mut self, policy: NotifyPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_network_error_message(mut self, message: impl Into<String>) -> Self {
        self.network_error_message = message.into();
        self
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Request a fresh user and make it the current user.
    pub async fn create_user(&self) -> Result<User, ApiError> {
        let result = self.client.create_user().await;
        let user = self.settle("createUser", result)?;
        self.store.commit(StoreMutation::SetUser(user.clone()));
        Ok(user)
    }

    /// Fetch the whole message list and replace the local one.
    pub async fn read_messages(&self) -> Result<(), ApiError> {
        let result = self.client.read_messages().await;
        let messages = self.settle("readMessages", result)?;
        self.store.commit(StoreMutation::SetMessages(messages));
        Ok(())
    }

    pub async fn create_message(&self, params: CreateMessageParams) -> Result<(), ApiError> {
        let result = self.client.create_message(&params).await;
        self.settle("createMessage", result)
    }

    pub async fn update_message(&self, params: UpdateMessageParams) -> Result<(), ApiError> {
        let result = self.client.update_message(&params).await;
        self.settle("updateMessage", result)
    }

    pub async fn delete_message(&self, params: DeleteMessageParams) -> Result<(), ApiError> {
        let result = self.client.delete_message(&params).await;
        self.settle("deleteMessage", result)
    }

    pub async fn dispatch(&self, action: Action) -> Result<(), ApiError> {
        tracing::debug!(action = action.name(), "Dispatching");
        match action {
            Action::CreateUser => self.create_user().await.map(|_| ()),
            Action::ReadMessages => self.read_messages().await,
            Action::CreateMessage(params) => self.create_message(params).await,
            Action::UpdateMessage(params) => self.update_message(params).await,
            Action::DeleteMessage(params) => self.delete_message(params).await,
        }
    }

    /// Run an action in the background.
    ///
    /// Nothing orders concurrent spawns: if two `ReadMessages` race, the
    /// later commit wins.
    pub fn spawn(&self, action: Action) -> JoinHandle<Result<(), ApiError>> {
        tracing::debug!(action = action.name(), "Spawning");
        let dispatcher = self.clone();
        tokio::spawn(async move { dispatcher.dispatch(action).await })
    }

    /// Apply a message that arrived without being requested.
    ///
    /// New messages are inserted in place. An edited message (or any id the
    /// store already holds) triggers a full re-fetch, so ids stay unique.
    pub async fn receive_pushed(&self, message: Message) -> Result<(), ApiError> {
        let known = self.store.messages().iter().any(|m| m.id == message.id);
        if known || message.modified.is_some() {
            tracing::debug!(message_id = message.id, "Pushed edit, re-fetching messages");
            return self.read_messages().await;
        }

        tracing::debug!(message_id = message.id, "Received pushed message");
        self.store.commit(StoreMutation::InsertMessage(message));
        Ok(())
    }

    pub fn notify_success(&self, text: impl Into<String>) {
        self.store.commit(StoreMutation::ShowSuccessSnackbar(text.into()));
    }

    pub fn dismiss_snackbar(&self) {
        self.store.commit(StoreMutation::SetSnackbar(false));
    }

    fn settle<T>(&self, action: &'static str, result: Result<T, ApiError>) -> Result<T, ApiError> {
        match result {
            Ok(value) => {
                tracing::info!(action, "Action succeeded");
                Ok(value)
            }
            Err(err) => {
                tracing::warn!(action, error = %err, "Action failed");
                if self.policy == NotifyPolicy::Snackbar {
                    let text = err.notification_text(&self.network_error_message);
                    self.store.commit(StoreMutation::ShowErrorSnackbar(text));
                }
                Err(err)
            }
        }
    }
}
