use serde::{Deserialize, Serialize};

use crate::models::{Message, User};
use crate::store::mvi::StoreState;

/// Color of the notification bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnackbarColor {
    #[default]
    Success,
    Error,
}

/// Single-slot notification. Every show overwrites the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snackbar {
    pub color: SnackbarColor,
    pub is_on: bool,
    pub message: String,
}

/// Observable phase of the snackbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnackbarPhase {
    Hidden,
    ShownSuccess,
    ShownError,
}

impl Snackbar {
    pub fn phase(&self) -> SnackbarPhase {
        match (self.is_on, self.color) {
            (false, _) => SnackbarPhase::Hidden,
            (true, SnackbarColor::Success) => SnackbarPhase::ShownSuccess,
            (true, SnackbarColor::Error) => SnackbarPhase::ShownError,
        }
    }
}

/// Everything the client knows about the chat.
///
/// `messages` is kept sorted by id, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct State {
    pub messages: Vec<Message>,
    pub user: Option<User>,
    pub snackbar: Snackbar,
}

impl StoreState for State {}
