use crate::components::counter::CounterAction;
use crate::environment::{NetworkError, ProductInfo};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OrderProductAction {
    DidTap,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProductDetailAction {
    DidTapWishlist,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OrderAction {
    DidLoad,
    Counter(CounterAction),
    DidTapAddOrder,
    ProductInfo(OrderProductAction),
    DismissBottomSheet,
    BottomSheet(ProductDetailAction),

    ReceiveAddOrderResponse(bool),
    ReceiveProductInfo(Result<ProductInfo, NetworkError>),
}
