use std::cmp::Reverse;

use crate::models::Message;
use crate::store::mutation::StoreMutation;
use crate::store::mvi::Reducer;
use crate::store::state::{SnackbarColor, State};

pub struct StoreReducer;

impl Reducer for StoreReducer {
    type State = State;
    type Mutation = StoreMutation;

    fn reduce(mut state: Self::State, mutation: Self::Mutation) -> Self::State {
        match mutation {
            StoreMutation::InsertMessage(message) => {
                state.messages.push(message);
                sort_newest_first(&mut state.messages);
            }
            StoreMutation::SetMessages(messages) => {
                state.messages = messages;
                sort_newest_first(&mut state.messages);
            }
            StoreMutation::SetSnackbar(is_on) => {
                state.snackbar.is_on = is_on;
            }
            StoreMutation::SetUser(user) => {
                state.user = Some(user);
            }
            StoreMutation::ShowErrorSnackbar(message) => {
                state.snackbar.color = SnackbarColor::Error;
                state.snackbar.is_on = true;
                state.snackbar.message = message;
            }
            StoreMutation::ShowSuccessSnackbar(message) => {
                state.snackbar.color = SnackbarColor::Success;
                state.snackbar.is_on = true;
                state.snackbar.message = message;
            }
        }
        state
    }
}

// Stable, so duplicate ids keep their arrival order.
fn sort_newest_first(messages: &mut [Message]) {
    messages.sort_by_key(|m| Reverse(m.id));
}
