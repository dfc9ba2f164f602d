//! Client-side state layer for the ChitChat service.
//!
//! [`actions::Dispatcher`] performs REST calls through [`api::ApiClient`]
//! and commits the results to a [`store::Store`]; [`feed`] keeps the
//! message list current from the server's websocket broadcast.

pub mod actions;
pub mod api;
pub mod config;
pub mod feed;
pub mod logging;
pub mod models;
pub mod store;
