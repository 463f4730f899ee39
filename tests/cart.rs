use futures_util::{FutureExt, StreamExt};

use storefront::components::cart::{
    CartPageAction, CartPageReducer, CartPageState, ShopProductAction, ShopProductState,
};
use storefront::environment::{AppConfig, CartPageEnvironment, NetworkError};
use storefront::{Store, TestStore};

fn loaded() -> CartPageState {
    CartPageState {
        is_loading: false,
        network_error: None,
        products: ShopProductState::mocks().into(),
    }
}

fn product(id: i64, action: ShopProductAction) -> CartPageAction {
    CartPageAction::Product { id, action }
}

#[test]
fn total_counts_active_rows_only() {
    assert_eq!(loaded().total_price(), 10_000_000 + 4_000_000 + 2 * 70_000);
    assert_eq!(CartPageState::default().total_price(), 0);
}

#[tokio::test(start_paused = true)]
async fn did_load_fetches_cart() {
    let config = AppConfig {
        latency_ms: 1_000,
        ..AppConfig::default()
    };
    let mut store = TestStore::new(
        CartPageState {
            is_loading: false,
            network_error: Some(NetworkError::Timeout),
            ..CartPageState::default()
        },
        CartPageReducer::default(),
        CartPageEnvironment::mock_success(&config),
    );
    store.send(CartPageAction::DidLoad, |state| {
        state.is_loading = true;
        state.network_error = None;
    });
    store
        .receive(
            CartPageAction::ReceiveCartData(Ok(ShopProductState::mocks())),
            |state| {
                state.is_loading = false;
                state.products = ShopProductState::mocks().into();
            },
        )
        .await;
}

#[tokio::test]
async fn failed_load_shows_error() {
    let mut store = TestStore::new(
        CartPageState::default(),
        CartPageReducer::default(),
        CartPageEnvironment::mock_failed(),
    );
    store.send(CartPageAction::DidLoad, |_| {});
    store
        .receive(
            CartPageAction::ReceiveCartData(Err(NetworkError::ServerError)),
            |state| {
                state.is_loading = false;
                state.network_error = Some(NetworkError::ServerError);
            },
        )
        .await;
    assert!(store.state().products.is_empty());
}

#[test]
fn row_actions_edit_their_row() {
    let mut store = TestStore::new(loaded(), CartPageReducer::default(), CartPageEnvironment::failing());
    store.send(product(2, ShopProductAction::DidTapToggle), |state| {
        state.products.get_mut(&2).unwrap().is_active = true;
    });
    store.send(product(1, ShopProductAction::DidTapPlus), |state| {
        state.products.get_mut(&1).unwrap().quantity = 2;
    });
    store.send(product(10, ShopProductAction::DidTapMinus), |state| {
        state.products.get_mut(&10).unwrap().quantity = 1;
    });
    store.send(
        product(3, ShopProductAction::TextDidChange("7".to_string())),
        |state| state.products.get_mut(&3).unwrap().quantity = 7,
    );
    store.send(
        product(3, ShopProductAction::TextDidChange("seven".to_string())),
        |state| state.products.get_mut(&3).unwrap().quantity = 0,
    );
    assert_eq!(
        store.state().total_price(),
        2 * 10_000_000 + 2 * 20_000_000 + 70_000
    );
}

#[test]
fn delete_removes_the_row() {
    let mut store = TestStore::new(loaded(), CartPageReducer::default(), CartPageEnvironment::failing());
    store.send(product(2, ShopProductAction::DidTapDelete), |state| {
        state.products.remove(&2);
    });
    let ids: Vec<_> = store.state().products.ids().copied().collect();
    assert_eq!(ids, vec![1, 3, 10, 11]);
    // gone rows ignore further actions
    store.send(product(2, ShopProductAction::DidTapPlus), |_| {});
}

#[test]
fn row_store_round_trip_matches_parent() {
    let scoped = Store::new(loaded(), CartPageReducer::default(), CartPageEnvironment::failing());
    let direct = Store::new(loaded(), CartPageReducer::default(), CartPageEnvironment::failing());
    let rows = scoped.scope_each(|state| &state.products, |id, action| product(id, action));

    for (index, action) in [
        (0, ShopProductAction::DidTapPlus),
        (1, ShopProductAction::DidTapToggle),
        (3, ShopProductAction::TextDidChange("4".to_string())),
        (2, ShopProductAction::DidTapDelete),
    ] {
        let id = rows[index].state().id;
        rows[index].send(action.clone());
        direct.send(product(id, action));
        assert_eq!(scoped.state(), direct.state());
    }
    assert!(!rows[2].is_present());
    assert_eq!(rows[2].state().name, "iPhone X");
}

#[test]
fn total_subscription_skips_unchanged_totals() {
    let store = Store::new(loaded(), CartPageReducer::default(), CartPageEnvironment::failing());
    let mut totals = store.subscribe(|state: &CartPageState| state.total_price());
    // inactive row, total stays the same
    store.send(product(11, ShopProductAction::DidTapPlus));
    store.send(product(1, ShopProductAction::DidTapToggle));
    store.send(product(1, ShopProductAction::DidTapToggle));

    let seen: Vec<_> = std::iter::from_fn(|| totals.next().now_or_never().flatten()).collect();
    assert_eq!(
        seen,
        vec![14_140_000, 4_140_000, 14_140_000]
    );
}

#[test]
fn huge_quantities_saturate_the_total() {
    let store = Store::new(loaded(), CartPageReducer::default(), CartPageEnvironment::failing());
    let mut totals = store.subscribe(|state: &CartPageState| state.total_price());
    store.send(product(
        1,
        ShopProductAction::TextDidChange(i64::MAX.to_string()),
    ));
    assert_eq!(store.with_state(|state| state.products.get(&1).map(|p| p.quantity)), Some(i64::MAX));
    assert_eq!(store.state().total_price(), i64::MAX);

    store.send(product(1, ShopProductAction::DidTapPlus));
    store.send(product(3, ShopProductAction::DidTapMinus));
    store.send(product(3, ShopProductAction::TextDidChange(i64::MIN.to_string())));
    let seen: Vec<_> = std::iter::from_fn(|| totals.next().now_or_never().flatten()).collect();
    assert_eq!(seen.first(), Some(&14_140_000));
    assert_eq!(seen.get(1), Some(&i64::MAX));
}
