mod app;
pub mod components;
pub mod engine;
pub mod environment;

pub use app::{run, RunError, Screen};
pub use engine::{Effect, Reducer, ReducerExt, ScopedStore, Store, TestStore};
