mod action;
mod reducer;
mod state;

pub use action::{OrderAction, OrderProductAction, ProductDetailAction};
pub use reducer::{ORDER_CREATED_MESSAGE, SUBMIT_FAILED_MESSAGE};
pub use state::{OrderState, ProductDetailState, ProductState};

use crate::engine::{Combine, Effect, Reducer};
use crate::environment::OrderEnvironment;

/// The order page with its quantity counter pulled back into it.
pub struct OrderReducer(Combine<OrderState, OrderAction, OrderEnvironment>);

impl Default for OrderReducer {
    fn default() -> Self {
        Self(reducer::order())
    }
}

impl Reducer for OrderReducer {
    type State = OrderState;

    type Action = OrderAction;

    type Environment = OrderEnvironment;

    fn reduce(
        &self,
        action: Self::Action,
        state: &mut Self::State,
        environment: &Self::Environment,
    ) -> Effect<Self::Action> {
        self.0.reduce(action, state, environment)
    }
}
