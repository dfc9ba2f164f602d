//! Action dispatcher.
//!
//! Each action issues exactly one HTTP request and routes the outcome to
//! the store: a data mutation on success, the error snackbar on failure.

mod dispatcher;
mod types;

pub use crate::config::NotifyPolicy;
pub use dispatcher::Dispatcher;
pub use types::Action;
