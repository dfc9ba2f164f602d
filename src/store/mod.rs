//! Client-side state container.
//!
//! Holds the message list, the current user and the snackbar. State only
//! changes through [`StoreMutation`]s applied by [`StoreReducer`].

mod handle;
mod mutation;
pub mod mvi;
mod reducer;
mod state;

pub use handle::Store;
pub use mutation::StoreMutation;
pub use reducer::StoreReducer;
pub use state::{Snackbar, SnackbarColor, SnackbarPhase, State};
