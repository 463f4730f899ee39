use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub is_wishlist: bool,
}

impl ProductInfo {
    pub fn mock() -> Self {
        Self {
            id: 1,
            name: "iPhone 13 Pro Max 64GB".to_string(),
            price: 13_000_000,
            description: "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Curabitur vel elementum nisl, a consequat odio. Sed sed suscipit magna. Nulla non lorem non quam tristique dapibus sed et nulla.".to_string(),
            is_wishlist: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    #[error("Server error")]
    ServerError,
    #[error("Request timed out")]
    Timeout,
    #[error("No internet connection")]
    NoConnection,
}
