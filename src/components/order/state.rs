use crate::components::counter::CounterState;
use crate::environment::{NetworkError, ProductInfo};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductState {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub description: String,
}

impl From<ProductInfo> for ProductState {
    fn from(info: ProductInfo) -> Self {
        Self {
            id: info.id,
            name: info.name,
            price: info.price,
            description: info.description,
        }
    }
}

/// What the product detail bottom sheet shows.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductDetailState {
    pub name: String,
    pub price: i64,
    pub description: String,
    pub is_wishlist: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderState {
    pub is_loading: bool,
    pub product: Option<ProductState>,
    pub counter: CounterState,
    pub network_error: Option<NetworkError>,
    pub is_wishlist: bool,
    pub show_bottom_sheet: bool,
}

impl OrderState {
    pub fn new(number: i64) -> Self {
        Self {
            is_loading: true,
            product: None,
            counter: CounterState::new(number),
            network_error: None,
            is_wishlist: false,
            show_bottom_sheet: false,
        }
    }

    /// Only present while the sheet is shown for a loaded product.
    pub fn bottom_sheet_state(&self) -> Option<ProductDetailState> {
        if !self.show_bottom_sheet {
            return None;
        }
        self.product.as_ref().map(|product| ProductDetailState {
            name: product.name.clone(),
            price: product.price,
            description: product.description.clone(),
            is_wishlist: self.is_wishlist,
        })
    }
}

impl Default for OrderState {
    fn default() -> Self {
        Self::new(0)
    }
}
