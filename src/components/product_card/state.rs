#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductCardState {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub is_wishlist: bool,
    pub url: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PullbackDemoState {
    pub information: String,
    pub product_card: ProductCardState,
}
