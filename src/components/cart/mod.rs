mod action;
mod reducer;
mod state;

pub use action::{CartPageAction, ShopProductAction};
pub use state::{CartPageState, ShopProductState};

use crate::engine::{Combine, Effect, Reducer};
use crate::environment::CartPageEnvironment;

/// One reducer per cart row plus the page logic that owns the list.
pub struct CartPageReducer(Combine<CartPageState, CartPageAction, CartPageEnvironment>);

impl Default for CartPageReducer {
    fn default() -> Self {
        Self(reducer::cart_page())
    }
}

impl Reducer for CartPageReducer {
    type State = CartPageState;

    type Action = CartPageAction;

    type Environment = CartPageEnvironment;

    fn reduce(
        &self,
        action: Self::Action,
        state: &mut Self::State,
        environment: &Self::Environment,
    ) -> Effect<Self::Action> {
        self.0.reduce(action, state, environment)
    }
}
