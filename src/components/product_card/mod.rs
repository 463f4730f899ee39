mod action;
mod reducer;
mod state;

pub use action::{ProductCardAction, PullbackDemoAction};
pub use state::{ProductCardState, PullbackDemoState};

use crate::engine::{Combine, Effect, Reducer};
use crate::environment::{ProductCardEnvironment, PullbackDemoEnvironment};

/// A product card on its own, reusable on any screen.
pub struct ProductCardReducer;

impl Reducer for ProductCardReducer {
    type State = ProductCardState;

    type Action = ProductCardAction;

    type Environment = ProductCardEnvironment;

    fn reduce(
        &self,
        action: Self::Action,
        state: &mut Self::State,
        environment: &Self::Environment,
    ) -> Effect<Self::Action> {
        reducer::product_card(action, state, environment)
    }
}

/// The demo page embedding a [`ProductCardReducer`].
pub struct PullbackDemoReducer(Combine<PullbackDemoState, PullbackDemoAction, PullbackDemoEnvironment>);

impl Default for PullbackDemoReducer {
    fn default() -> Self {
        Self(reducer::pullback_demo())
    }
}

impl Reducer for PullbackDemoReducer {
    type State = PullbackDemoState;

    type Action = PullbackDemoAction;

    type Environment = PullbackDemoEnvironment;

    fn reduce(
        &self,
        action: Self::Action,
        state: &mut Self::State,
        environment: &Self::Environment,
    ) -> Effect<Self::Action> {
        self.0.reduce(action, state, environment)
    }
}
