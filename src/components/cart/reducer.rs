use crate::engine::{combine, from_fn, Combine, Effect, ElementCase, IdentifiedVec, ReducerExt};
use crate::environment::CartPageEnvironment;

use super::{CartPageAction, CartPageState, ShopProductAction, ShopProductState};

const PRODUCT: ElementCase<CartPageAction, i64, ShopProductAction> = ElementCase {
    extract: |action| match action {
        CartPageAction::Product { id, action } => Some((id, action)),
        _ => None,
    },
    embed: |id, action| CartPageAction::Product { id, action },
};

pub fn cart_page() -> Combine<CartPageState, CartPageAction, CartPageEnvironment> {
    combine(vec![
        from_fn(shop_product)
            .for_each(
                |state: &mut CartPageState| &mut state.products,
                PRODUCT,
                |_: &CartPageEnvironment| (),
            )
            .boxed(),
        from_fn(reduce).boxed(),
    ])
}

pub fn shop_product(
    action: ShopProductAction,
    state: &mut ShopProductState,
    _environment: &(),
) -> Effect<ShopProductAction> {
    log::trace!("{action:?}");
    match action {
        ShopProductAction::DidTapToggle => state.is_active = !state.is_active,
        ShopProductAction::DidTapPlus => state.quantity = state.quantity.saturating_add(1),
        ShopProductAction::DidTapMinus => state.quantity = state.quantity.saturating_sub(1),
        ShopProductAction::TextDidChange(text) => state.quantity = text.parse().unwrap_or(0),
        // the row can't remove itself
        ShopProductAction::DidTapDelete => {}
    }
    Effect::NONE
}

pub fn reduce(
    action: CartPageAction,
    state: &mut CartPageState,
    environment: &CartPageEnvironment,
) -> Effect<CartPageAction> {
    log::trace!("{action:?}");
    match action {
        CartPageAction::DidLoad => {
            state.is_loading = true;
            state.network_error = None;
            (environment.get_cart_data)().map(CartPageAction::ReceiveCartData)
        }
        CartPageAction::ReceiveCartData(result) => {
            state.is_loading = false;
            match result {
                Ok(products) => state.products = IdentifiedVec::from(products),
                Err(e) => {
                    log::error!("Could not load the cart: {e}");
                    state.network_error = Some(e);
                }
            }
            Effect::NONE
        }
        CartPageAction::Product {
            id,
            action: ShopProductAction::DidTapDelete,
        } => {
            state.products.remove(&id);
            Effect::NONE
        }
        CartPageAction::Product { .. } => Effect::NONE,
    }
}
