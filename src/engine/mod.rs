//! A small unidirectional data flow engine.
//!
//! ```text
//! send(action) ──→ Reducer ──→ State ──→ subscribers
//!      ↑              │
//!      └── Effect ←───┘
//! ```
//!
//! - **Reducer**: computes the next state from an action and returns an
//!   [`Effect`] describing any follow-up work
//! - **Store**: owns the state, executes effects, feeds their results back
//! - **Scoping**: derives child stores over a slice of state and actions

mod effect;
mod identified;
mod publisher;
mod reducer;
mod runtime;
mod scope;
mod store;
mod test_store;

pub use effect::{Effect, Never};
pub use identified::{Identifiable, IdentifiedVec};
pub use publisher::{Observer, Publisher, Subscription};
pub use reducer::{
    combine, from_fn, ActionCase, BoxedReducer, Combine, ElementCase, FnReducer, ForEach,
    Optional, Pullback, Reducer, ReducerExt,
};
pub use runtime::Dispatcher;
pub use scope::ScopedStore;
pub use store::Store;
pub use test_store::TestStore;
