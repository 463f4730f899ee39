use crate::engine::{combine, from_fn, ActionCase, Combine, Effect, ReducerExt};
use crate::environment::{ProductCardEnvironment, PullbackDemoEnvironment};

use super::{ProductCardAction, ProductCardReducer, ProductCardState};
use super::{PullbackDemoAction, PullbackDemoState};

const PRODUCT_CARD: ActionCase<PullbackDemoAction, ProductCardAction> = ActionCase {
    extract: |action| match action {
        PullbackDemoAction::ProductCard(action) => Some(action),
        _ => None,
    },
    embed: PullbackDemoAction::ProductCard,
};

pub fn pullback_demo() -> Combine<PullbackDemoState, PullbackDemoAction, PullbackDemoEnvironment> {
    combine(vec![
        ProductCardReducer
            .pullback(
                |state: &mut PullbackDemoState| &mut state.product_card,
                PRODUCT_CARD,
                |environment: &PullbackDemoEnvironment| ProductCardEnvironment::from(environment),
            )
            .boxed(),
        from_fn(reduce).boxed(),
    ])
}

pub fn product_card(
    action: ProductCardAction,
    state: &mut ProductCardState,
    environment: &ProductCardEnvironment,
) -> Effect<ProductCardAction> {
    log::trace!("{action:?}");
    match action {
        ProductCardAction::DidTap => (environment.route)(state.url.clone()).fire_and_forget(),
        ProductCardAction::DidTapWishlist => {
            state.is_wishlist = !state.is_wishlist;
            Effect::NONE
        }
    }
}

/// Page logic, runs after the card reducer has updated its state.
pub fn reduce(
    action: PullbackDemoAction,
    state: &mut PullbackDemoState,
    environment: &PullbackDemoEnvironment,
) -> Effect<PullbackDemoAction> {
    log::trace!("{action:?}");
    match action {
        PullbackDemoAction::DidLoad | PullbackDemoAction::ProductCard(ProductCardAction::DidTap) => {
            Effect::NONE
        }
        PullbackDemoAction::ProductCard(ProductCardAction::DidTapWishlist) => {
            (environment.track_event)(format!(
                "Tracking wishlist to: {}",
                state.product_card.is_wishlist
            ))
            .fire_and_forget()
        }
    }
}
