mod action;
mod reducer;
mod state;

pub use action::{PromoAction, PromoListAction};
pub use state::{PromoListState, PromoState};

use crate::engine::{Effect, Reducer};
use crate::environment::PromoListEnvironment;

pub struct PromoListReducer;

impl Reducer for PromoListReducer {
    type State = PromoListState;

    type Action = PromoListAction;

    type Environment = PromoListEnvironment;

    fn reduce(
        &self,
        action: Self::Action,
        state: &mut Self::State,
        environment: &Self::Environment,
    ) -> Effect<Self::Action> {
        reducer::reduce(action, state, environment)
    }
}
