use crate::engine::{Effect, IdentifiedVec};
use crate::environment::PromoListEnvironment;

use super::{PromoAction, PromoListAction, PromoListState};

pub fn reduce(
    action: PromoListAction,
    state: &mut PromoListState,
    environment: &PromoListEnvironment,
) -> Effect<PromoListAction> {
    log::trace!("{action:?}");
    match action {
        PromoListAction::DidLoad => {
            (environment.get_promo_list)().map(PromoListAction::ReceivePromoListResponse)
        }
        PromoListAction::ReceivePromoListResponse(promos) => {
            let selected = state.selected_promo_id.clone();
            state.promos = IdentifiedVec::from(promos);
            state.promos.for_each_mut(|promo| {
                promo.is_selected = Some(&promo.id) == selected.as_ref();
            });
            Effect::NONE
        }
        PromoListAction::Promo {
            id,
            action: PromoAction::DidTap,
        } => {
            state.promos.for_each_mut(|promo| {
                promo.is_selected = promo.id == id && !promo.is_selected;
            });
            Effect::NONE
        }
        PromoListAction::DidTapUsePromo => {
            state.selected_promo_id = state
                .promos
                .first_where(|promo| promo.is_selected)
                .map(|promo| promo.id.clone());
            Effect::NONE
        }
    }
}
