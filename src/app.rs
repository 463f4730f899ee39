use std::str::FromStr;

use futures_util::{FutureExt, Stream, StreamExt};
use itertools::Itertools;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::components::cart::{CartPageAction, CartPageReducer, CartPageState, ShopProductAction};
use crate::components::counter::{CounterAction, CounterReducer, CounterState};
use crate::components::item_stack::{DemoItemAction, ItemStackAction, ItemStackReducer, ItemStackState};
use crate::components::order::{OrderAction, OrderProductAction, OrderReducer, OrderState, ProductDetailAction};
use crate::components::product_card::{
    ProductCardAction, ProductCardState, PullbackDemoAction, PullbackDemoReducer, PullbackDemoState,
};
use crate::components::promo_list::{PromoAction, PromoListAction, PromoListReducer, PromoListState};
use crate::engine::Store;
use crate::environment::{
    AppConfig, CartPageEnvironment, ItemStackEnvironment, Notifier, OrderEnvironment,
    PromoListEnvironment, PullbackDemoEnvironment,
};

/// The screens the demo session can drive.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Screen {
    Counter,
    Order,
    PromoList,
    Cart,
    ItemStack,
    ProductCard,
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Unknown screen '{0}', expected one of: {1}")]
    UnknownScreen(String, String),
    #[error("Could not start the runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Run a scripted session over the given screens, or all of them if
/// `screens` is empty.
pub fn run(screens: impl IntoIterator<Item = String>) -> Result<(), RunError> {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    setup_logging(&config.log_filter);
    if let Err(e) = loaded {
        log::error!("{e}, continuing with the default configuration");
    }

    let mut screens = screens
        .into_iter()
        .map(|name| {
            Screen::from_str(&name)
                .map_err(|_| RunError::UnknownScreen(name, Screen::iter().join(", ")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if screens.is_empty() {
        screens = Screen::iter().collect();
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        for screen in screens {
            log::info!("--- {screen} ---");
            session(screen, &config).await;
        }
    });
    Ok(())
}

fn setup_logging(filter: &str) {
    use env_logger::Env;
    use std::io::Write;
    let result = env_logger::Builder::from_env(Env::default().default_filter_or(filter))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stdout)
        .try_init();
    if let Err(e) = result {
        eprintln!("Logging is already set up: {e}");
    }
}

async fn session(screen: Screen, config: &AppConfig) {
    match screen {
        Screen::Counter => counter(config),
        Screen::Order => order(config).await,
        Screen::PromoList => promo_list(config).await,
        Screen::Cart => cart(config).await,
        Screen::ItemStack => item_stack(config).await,
        Screen::ProductCard => product_card().await,
    }
}

/// Everything the stream has buffered right now.
fn ready<T>(stream: &mut (impl Stream<Item = T> + Unpin)) -> Vec<T> {
    std::iter::from_fn(|| stream.next().now_or_never().flatten()).collect()
}

fn counter(config: &AppConfig) {
    let store = Store::new(CounterState::new(config.initial_quantity), CounterReducer, ());
    let mut numbers = store.subscribe(|state: &CounterState| state.number);
    store.send(CounterAction::TextDidChange("-2".to_string()));
    store.send(CounterAction::DidTapPlus);
    store.send(CounterAction::DidTapPlus);
    store.send(CounterAction::TextDidChange("abc".to_string()));
    log::info!("Numbers: {}", ready(&mut numbers).iter().join(" -> "));
    log::info!("Error: {:?}", store.with_state(|state| state.error_message.clone()));
}

async fn order(config: &AppConfig) {
    let (toaster, toasts) = Notifier::channel("toast");
    let environment =
        OrderEnvironment::mock_failed_if_number(config.failing_order_quantity, config, &toaster);
    let store = Store::new(OrderState::new(config.initial_quantity), OrderReducer::default(), environment);
    let counter = store.scope(|state| state.counter.clone(), OrderAction::Counter);
    let mut errors = counter.subscribe(|state: &CounterState| state.error_message.clone());

    store.send(OrderAction::DidLoad);
    store.run_until_idle().await;
    match store.with_state(|state| state.product.clone()) {
        Some(product) => log::info!("Loaded {} for {}", product.name, product.price),
        None => log::warn!("No product, {:?}", store.with_state(|state| state.network_error)),
    }

    counter.send(CounterAction::DidTapPlus);
    store.send(OrderAction::DidTapAddOrder);
    store.run_until_idle().await;

    counter.send(CounterAction::TextDidChange(config.failing_order_quantity.to_string()));
    store.send(OrderAction::DidTapAddOrder);
    store.run_until_idle().await;

    store.send(OrderAction::ProductInfo(OrderProductAction::DidTap));
    if let Some(sheet) =
        store.scope_optional(|state| state.bottom_sheet_state(), OrderAction::BottomSheet)
    {
        sheet.send(ProductDetailAction::DidTapWishlist);
        log::info!("Wishlisted from the sheet: {}", sheet.state().is_wishlist);
    }
    store.send(OrderAction::DismissBottomSheet);

    log::info!("Toasts: {}", toasts.try_iter().join(", "));
    log::info!("Errors: {:?}", ready(&mut errors));
}

async fn promo_list(config: &AppConfig) {
    let store = Store::new(
        PromoListState::default(),
        PromoListReducer,
        PromoListEnvironment::mock(config),
    );
    store.send(PromoListAction::DidLoad);
    store.run_until_idle().await;

    let promos = store.scope_each(
        |state| &state.promos,
        |id, action| PromoListAction::Promo { id, action },
    );
    log::info!("{} promos", promos.len());
    for promo in promos.iter().skip(1).step_by(2).take(2) {
        promo.send(PromoAction::DidTap);
    }
    store.send(PromoListAction::DidTapUsePromo);
    let selected = store.with_state(|state| state.selected_promo_state().map(|p| p.title.clone()));
    log::info!("Using {}", selected.as_deref().unwrap_or("no promo"));
}

async fn cart(config: &AppConfig) {
    let store = Store::new(
        CartPageState::default(),
        CartPageReducer::default(),
        CartPageEnvironment::mock_success(config),
    );
    let mut totals = store.subscribe(|state: &CartPageState| state.total_price());
    store.send(CartPageAction::DidLoad);
    store.run_until_idle().await;

    let rows = store.scope_each(
        |state| &state.products,
        |id, action| CartPageAction::Product { id, action },
    );
    if let [first, second, third, ..] = rows.as_slice() {
        first.send(ShopProductAction::DidTapPlus);
        second.send(ShopProductAction::DidTapToggle);
        third.send(ShopProductAction::DidTapDelete);
        log::info!("Removed {}, still showing {}", third.state().name, third.is_present());
    }
    let names = store.with_state(|state| {
        state
            .products
            .iter()
            .map(|p| format!("{} x{}", p.name, p.quantity))
            .join(", ")
    });
    log::info!("Cart: {names}");
    log::info!("Totals: {}", ready(&mut totals).iter().join(" -> "));
}

async fn item_stack(config: &AppConfig) {
    let store = Store::new(
        ItemStackState::with_seed(7),
        ItemStackReducer,
        ItemStackEnvironment::mock(config),
    );
    store.send(ItemStackAction::DidLoad);
    store.run_until_idle().await;
    store.send(ItemStackAction::AddItem);
    store.send(ItemStackAction::Shuffle);
    if let Some(id) = store.with_state(|state| state.items.ids().next().copied()) {
        store.send(ItemStackAction::Child {
            id,
            action: DemoItemAction::Toggle,
        });
    }
    let items = store.with_state(|state| {
        state
            .items
            .iter()
            .map(|item| format!("{}{}", item.text, if item.is_active { "*" } else { "" }))
            .join(", ")
    });
    log::info!("Stack: {items}");
}

async fn product_card() {
    let (router, routes) = Notifier::channel("route");
    let (tracker, events) = Notifier::channel("track");
    let store = Store::new(
        PullbackDemoState {
            information: "Tap the card or its wishlist button".to_string(),
            product_card: ProductCardState::mock(),
        },
        PullbackDemoReducer::default(),
        PullbackDemoEnvironment::mock(&router, &tracker),
    );
    let card = store.scope(|state| state.product_card.clone(), PullbackDemoAction::ProductCard);
    store.send(PullbackDemoAction::DidLoad);
    card.send(ProductCardAction::DidTapWishlist);
    card.send(ProductCardAction::DidTapWishlist);
    card.send(ProductCardAction::DidTap);
    store.run_until_idle().await;
    log::info!("Routes: {}", routes.try_iter().join(", "));
    log::info!("Events: {}", events.try_iter().join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screens_parse_from_kebab_case() {
        assert_eq!(Screen::from_str("promo-list"), Ok(Screen::PromoList));
        assert_eq!(Screen::ItemStack.to_string(), "item-stack");
    }

    #[test]
    fn unknown_screen_is_a_single_error() {
        let Err(e) = run(["checkout".to_string()]) else {
            panic!("expected an unknown screen error");
        };
        assert!(matches!(e, RunError::UnknownScreen(ref name, _) if name == "checkout"));
        assert!(e.to_string().contains("promo-list"));
    }
}
