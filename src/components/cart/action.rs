use crate::environment::NetworkError;

use super::ShopProductState;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ShopProductAction {
    DidTapToggle,
    DidTapPlus,
    DidTapMinus,
    DidTapDelete,
    TextDidChange(String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CartPageAction {
    DidLoad,
    Product { id: i64, action: ShopProductAction },

    ReceiveCartData(Result<Vec<ShopProductState>, NetworkError>),
}
