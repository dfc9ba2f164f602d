use crate::models::{CreateMessageParams, DeleteMessageParams, UpdateMessageParams};

/// A user intent that needs one round trip to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateUser,
    ReadMessages,
    CreateMessage(CreateMessageParams),
    UpdateMessage(UpdateMessageParams),
    DeleteMessage(DeleteMessageParams),
}

impl Action {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::CreateUser => "createUser",
            Action::ReadMessages => "readMessages",
            Action::CreateMessage(_) => "createMessage",
            Action::UpdateMessage(_) => "updateMessage",
            Action::DeleteMessage(_) => "deleteMessage",
        }
    }
}
