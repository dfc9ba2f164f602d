use crate::models::{Message, User};
use crate::store::mvi::Mutation;

/// The complete set of state changes the store accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreMutation {
    /// Append one message, then restore the newest-first ordering.
    InsertMessage(Message),
    /// Replace the whole list, then restore the newest-first ordering.
    SetMessages(Vec<Message>),
    /// Show or hide the snackbar without touching its color or text.
    SetSnackbar(bool),
    SetUser(User),
    ShowErrorSnackbar(String),
    ShowSuccessSnackbar(String),
}

impl Mutation for StoreMutation {
    fn name(&self) -> &'static str {
        match self {
            StoreMutation::InsertMessage(_) => "insertMessage",
            StoreMutation::SetMessages(_) => "setMessages",
            StoreMutation::SetSnackbar(_) => "setSnackbar",
            StoreMutation::SetUser(_) => "setUser",
            StoreMutation::ShowErrorSnackbar(_) => "showErrorSnackbar",
            StoreMutation::ShowSuccessSnackbar(_) => "showSuccessSnackbar",
        }
    }
}
