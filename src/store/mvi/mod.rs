//! Unidirectional data-flow primitives for the client store.
//!
//! ```text
//! Action ──→ Mutation ──→ Reducer ──→ State
//!   ↑                                   │
//!   └───────────────────────────────────┘
//! ```
//!
//! - **State**: plain data snapshot of everything the UI renders
//! - **Mutation**: a synchronous state change request
//! - **Reducer**: pure function applying a mutation to a state

mod mutation;
mod reducer;
mod state;

pub use mutation::Mutation;
pub use reducer::Reducer;
pub use state::StoreState;
