//! Everything screens need from the outside world. Reducers only ever
//! reach these functions through the effects they return, so tests can
//! swap any of them for a controlled or failing implementation.

pub mod config;
pub mod mock;
pub mod model;
mod notifier;

use std::sync::Arc;

pub use config::{AppConfig, ConfigError};
pub use model::{NetworkError, ProductInfo};
pub use notifier::Notifier;

use crate::components::cart::ShopProductState;
use crate::components::item_stack::DemoItemState;
use crate::components::promo_list::PromoState;
use crate::engine::{Effect, Never};

/// An environment function taking one argument.
pub type Operation<I, O> = Arc<dyn Fn(I) -> Effect<O> + Send + Sync>;

/// An environment function without arguments.
pub type Request<O> = Arc<dyn Fn() -> Effect<O> + Send + Sync>;

#[derive(Clone)]
pub struct OrderEnvironment {
    pub get_product_info: Request<Result<ProductInfo, NetworkError>>,
    pub submit_order: Operation<i64, bool>,
    pub show_toast: Operation<String, Never>,
}

#[derive(Clone)]
pub struct PromoListEnvironment {
    pub get_promo_list: Request<Vec<PromoState>>,
}

#[derive(Clone)]
pub struct CartPageEnvironment {
    pub get_cart_data: Request<Result<Vec<ShopProductState>, NetworkError>>,
}

#[derive(Clone)]
pub struct ItemStackEnvironment {
    pub load_data: Request<Vec<DemoItemState>>,
}

#[derive(Clone)]
pub struct PullbackDemoEnvironment {
    pub route: Operation<String, Never>,
    pub track_event: Operation<String, Never>,
}

/// The part of [`PullbackDemoEnvironment`] a product card needs.
#[derive(Clone)]
pub struct ProductCardEnvironment {
    pub route: Operation<String, Never>,
}

impl From<&PullbackDemoEnvironment> for ProductCardEnvironment {
    fn from(environment: &PullbackDemoEnvironment) -> Self {
        Self {
            route: environment.route.clone(),
        }
    }
}

macro_rules! opaque_debug {
    ($($name:ident),*) => {
        $(impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name)).finish()
            }
        })*
    };
}

opaque_debug!(
    OrderEnvironment,
    PromoListEnvironment,
    CartPageEnvironment,
    ItemStackEnvironment,
    PullbackDemoEnvironment,
    ProductCardEnvironment
);
