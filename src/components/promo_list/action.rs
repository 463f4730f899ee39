use super::PromoState;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PromoAction {
    DidTap,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PromoListAction {
    DidLoad,
    Promo { id: String, action: PromoAction },
    DidTapUsePromo,

    ReceivePromoListResponse(Vec<PromoState>),
}
