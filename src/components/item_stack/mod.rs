mod action;
mod reducer;
mod state;

pub use action::{DemoItemAction, ItemStackAction};
pub use state::{DemoItemState, ItemStackState};

use crate::engine::{Effect, Reducer};
use crate::environment::ItemStackEnvironment;

pub struct ItemStackReducer;

impl Reducer for ItemStackReducer {
    type State = ItemStackState;

    type Action = ItemStackAction;

    type Environment = ItemStackEnvironment;

    fn reduce(
        &self,
        action: Self::Action,
        state: &mut Self::State,
        environment: &Self::Environment,
    ) -> Effect<Self::Action> {
        reducer::reduce(action, state, environment)
    }
}
