//! Canned environments for the demo session and the tests.

use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::components::product_card::ProductCardState;

/// Resolve to `value` after `latency` on the runtime clock.
pub fn delayed<T: Send + 'static>(latency: Duration, value: T) -> Effect<T> {
    Effect::task(async move {
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        value
    })
}

fn failing_request<O: Send + 'static>(name: &'static str) -> Request<O> {
    Arc::new(move || Effect::failing(format!("Should not called {name}")))
}

fn failing_operation<I: 'static, O: Send + 'static>(name: &'static str) -> Operation<I, O> {
    Arc::new(move |_: I| Effect::failing(format!("Should not called {name}")))
}

impl OrderEnvironment {
    pub fn mock_success(config: &AppConfig, toaster: &Notifier) -> Self {
        let latency = config.latency();
        Self {
            get_product_info: Arc::new(move || delayed(latency, Ok(ProductInfo::mock()))),
            submit_order: Arc::new(|_: i64| Effect::action(true)),
            show_toast: toaster.operation(),
        }
    }

    /// Orders with a quantity of `number` are rejected.
    pub fn mock_failed_if_number(number: i64, config: &AppConfig, toaster: &Notifier) -> Self {
        let latency = config.latency();
        Self {
            get_product_info: Arc::new(move || delayed(latency, Ok(ProductInfo::mock()))),
            submit_order: Arc::new(move |quantity: i64| delayed(latency, quantity != number)),
            show_toast: toaster.operation(),
        }
    }

    pub fn mock_failed(config: &AppConfig, toaster: &Notifier) -> Self {
        let latency = config.latency();
        Self {
            get_product_info: Arc::new(move || delayed(latency, Err(NetworkError::ServerError))),
            submit_order: Arc::new(move |_: i64| delayed(latency, false)),
            show_toast: toaster.operation(),
        }
    }

    pub fn failing() -> Self {
        Self {
            get_product_info: failing_request("getProductInfo"),
            submit_order: failing_operation("submitOrder"),
            show_toast: failing_operation("showToast"),
        }
    }
}

impl PromoState {
    pub fn mocks(count: usize) -> Vec<Self> {
        (1..=count as i64)
            .map(|n| Self::new(n.to_string(), format!("Discount Rp {}", n * 10_000), n * 10_000))
            .collect()
    }
}

impl PromoListEnvironment {
    pub fn mock(config: &AppConfig) -> Self {
        let latency = config.latency();
        let count = config.promo_count;
        Self {
            get_promo_list: Arc::new(move || delayed(latency, PromoState::mocks(count))),
        }
    }

    pub fn failing() -> Self {
        Self {
            get_promo_list: failing_request("getPromoList"),
        }
    }
}

impl ShopProductState {
    pub fn mocks() -> Vec<Self> {
        vec![
            Self::new(1, "iPhone 13", 10_000_000, 1, true),
            Self::new(2, "iPhone 13 Pro Max", 20_000_000, 2, false),
            Self::new(3, "iPhone X", 4_000_000, 1, true),
            Self::new(10, "Book number 1", 70_000, 2, true),
            Self::new(11, "Book number 2", 170_000, 1, false),
        ]
    }
}

impl CartPageEnvironment {
    pub fn mock_success(config: &AppConfig) -> Self {
        let latency = config.latency();
        Self {
            get_cart_data: Arc::new(move || delayed(latency, Ok(ShopProductState::mocks()))),
        }
    }

    pub fn mock_failed() -> Self {
        Self {
            get_cart_data: Arc::new(|| Effect::action(Err(NetworkError::ServerError))),
        }
    }

    pub fn failing() -> Self {
        Self {
            get_cart_data: failing_request("getCartData"),
        }
    }
}

impl DemoItemState {
    pub fn mocks(count: u64) -> Vec<Self> {
        (1..=count)
            .map(|id| Self::new(id, format!("Data {id}"), id % 2 == 1))
            .collect()
    }
}

impl ItemStackEnvironment {
    pub fn mock(config: &AppConfig) -> Self {
        let latency = config.latency();
        Self {
            load_data: Arc::new(move || delayed(latency, DemoItemState::mocks(5))),
        }
    }

    pub fn failing() -> Self {
        Self {
            load_data: failing_request("loadData"),
        }
    }
}

impl ProductCardState {
    pub fn mock() -> Self {
        Self {
            id: 1,
            name: "iPad Pro 13.3 inch".to_string(),
            price: 12_000_000,
            is_wishlist: false,
            url: "https://tokopedia.com/shop/iPad-Pro-13.3-inch".to_string(),
        }
    }
}

impl PullbackDemoEnvironment {
    pub fn mock(router: &Notifier, tracker: &Notifier) -> Self {
        Self {
            route: router.operation(),
            track_event: tracker.operation(),
        }
    }

    pub fn failing() -> Self {
        Self {
            route: failing_operation("route"),
            track_event: failing_operation("trackEvent"),
        }
    }
}
