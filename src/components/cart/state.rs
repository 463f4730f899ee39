use crate::engine::{Identifiable, IdentifiedVec};
use crate::environment::NetworkError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShopProductState {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub quantity: i64,
    pub is_active: bool,
}

impl ShopProductState {
    pub fn new(id: i64, name: impl Into<String>, price: i64, quantity: i64, is_active: bool) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
            is_active,
        }
    }
}

impl Identifiable for ShopProductState {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CartPageState {
    pub is_loading: bool,
    pub network_error: Option<NetworkError>,
    pub products: IdentifiedVec<ShopProductState>,
}

impl CartPageState {
    /// Sum over the rows that are ticked.
    pub fn total_price(&self) -> i64 {
        self.products
            .iter()
            .filter(|product| product.is_active)
            .map(|product| product.quantity.saturating_mul(product.price))
            .fold(0, i64::saturating_add)
    }
}

impl Default for CartPageState {
    fn default() -> Self {
        Self {
            is_loading: true,
            network_error: None,
            products: IdentifiedVec::new(),
        }
    }
}
