//! Shared store handle.
//!
//! Wraps the state in a mutex so concurrent actions can commit without
//! extra coordination. Each commit holds the lock for exactly one reduce
//! step, which makes every mutation atomic from a reader's point of view.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::models::{Message, User};
use crate::store::mutation::StoreMutation;
use crate::store::mvi::{Mutation, Reducer};
use crate::store::reducer::StoreReducer;
use crate::store::state::{Snackbar, State};

#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<Mutex<State>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an existing state.
    ///
    /// The messages go through `SetMessages`, so the seed is sorted like
    /// any other list the store holds.
    pub fn with_state(mut state: State) -> Self {
        let messages = std::mem::take(&mut state.messages);
        let state = StoreReducer::reduce(state, StoreMutation::SetMessages(messages));
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Apply a mutation to the shared state.
    pub fn commit(&self, mutation: StoreMutation) {
        tracing::debug!(mutation = mutation.name(), "commit");
        let mut guard = self.inner.lock();
        let state = std::mem::take(&mut *guard);
        *guard = StoreReducer::reduce(state, mutation);
    }

    /// Get a clone of the whole state.
    pub fn snapshot(&self) -> State {
        self.inner.lock().clone()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.inner.lock().messages.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.inner.lock().user.clone()
    }

    pub fn snackbar(&self) -> Snackbar {
        self.inner.lock().snackbar.clone()
    }
}
