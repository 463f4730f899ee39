mod action;
mod reducer;
mod state;

pub use action::CounterAction;
pub use reducer::{NEGATIVE_NUMBER_MESSAGE, NOT_A_NUMBER_MESSAGE};
pub use state::CounterState;

use crate::engine::{Effect, Reducer};

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;

    type Action = CounterAction;

    type Environment = ();

    fn reduce(
        &self,
        action: Self::Action,
        state: &mut Self::State,
        environment: &Self::Environment,
    ) -> Effect<Self::Action> {
        reducer::reduce(action, state, environment)
    }
}
