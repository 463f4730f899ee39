#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProductCardAction {
    DidTap,
    DidTapWishlist,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PullbackDemoAction {
    DidLoad,
    ProductCard(ProductCardAction),
}
