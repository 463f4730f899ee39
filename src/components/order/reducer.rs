use crate::components::counter::{CounterAction, CounterReducer};
use crate::engine::{combine, from_fn, ActionCase, Combine, Effect, ReducerExt};
use crate::environment::OrderEnvironment;

use super::{OrderAction, OrderProductAction, OrderState, ProductDetailAction, ProductState};

pub const ORDER_CREATED_MESSAGE: &str = "Order created successfully";
pub const SUBMIT_FAILED_MESSAGE: &str = "Submit Order Failed";

const COUNTER: ActionCase<OrderAction, CounterAction> = ActionCase {
    extract: |action| match action {
        OrderAction::Counter(action) => Some(action),
        _ => None,
    },
    embed: OrderAction::Counter,
};

pub fn order() -> Combine<OrderState, OrderAction, OrderEnvironment> {
    combine(vec![
        CounterReducer
            .pullback(
                |state: &mut OrderState| &mut state.counter,
                COUNTER,
                |_: &OrderEnvironment| (),
            )
            .boxed(),
        from_fn(reduce).boxed(),
    ])
}

/// Page logic, the counter runs before it.
pub fn reduce(
    action: OrderAction,
    state: &mut OrderState,
    environment: &OrderEnvironment,
) -> Effect<OrderAction> {
    log::trace!("{action:?}");
    match action {
        OrderAction::DidLoad => {
            (environment.get_product_info)().map(OrderAction::ReceiveProductInfo)
        }
        OrderAction::ReceiveProductInfo(result) => {
            state.is_loading = false;
            match result {
                Ok(info) => {
                    state.network_error = None;
                    state.is_wishlist = info.is_wishlist;
                    state.product = Some(ProductState::from(info));
                }
                Err(e) => {
                    log::error!("Could not load product info: {e}");
                    state.network_error = Some(e);
                }
            }
            Effect::NONE
        }
        OrderAction::Counter(_) => Effect::NONE,
        OrderAction::DidTapAddOrder => (environment.submit_order)(state.counter.number)
            .map(OrderAction::ReceiveAddOrderResponse),
        OrderAction::ReceiveAddOrderResponse(true) => {
            (environment.show_toast)(ORDER_CREATED_MESSAGE.to_string()).fire_and_forget()
        }
        OrderAction::ReceiveAddOrderResponse(false) => {
            state.counter.error_message = Some(SUBMIT_FAILED_MESSAGE.to_string());
            Effect::NONE
        }
        OrderAction::ProductInfo(OrderProductAction::DidTap) => {
            // nothing to show before the product arrived
            state.show_bottom_sheet = state.product.is_some();
            Effect::NONE
        }
        OrderAction::DismissBottomSheet => {
            state.show_bottom_sheet = false;
            Effect::NONE
        }
        OrderAction::BottomSheet(ProductDetailAction::DidTapWishlist) => {
            state.is_wishlist = !state.is_wishlist;
            Effect::NONE
        }
    }
}
