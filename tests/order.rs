use std::sync::Arc;

use storefront::components::counter::{CounterAction, NEGATIVE_NUMBER_MESSAGE};
use storefront::components::order::{
    OrderAction, OrderProductAction, OrderReducer, OrderState, ProductDetailAction,
    ProductDetailState, ProductState, ORDER_CREATED_MESSAGE, SUBMIT_FAILED_MESSAGE,
};
use storefront::environment::{AppConfig, NetworkError, Notifier, OrderEnvironment, ProductInfo};
use storefront::{Effect, Store, TestStore};

fn config() -> AppConfig {
    AppConfig {
        latency_ms: 2_000,
        ..AppConfig::default()
    }
}

fn loaded(number: i64) -> OrderState {
    OrderState {
        is_loading: false,
        product: Some(ProductState::from(ProductInfo::mock())),
        ..OrderState::new(number)
    }
}

#[tokio::test(start_paused = true)]
async fn did_load_fetches_product_info() {
    let (toaster, _toasts) = Notifier::channel("toast");
    let mut store = TestStore::new(
        OrderState::new(1),
        OrderReducer::default(),
        OrderEnvironment::mock_success(&config(), &toaster),
    );
    store.send(OrderAction::DidLoad, |_| {});
    store
        .receive(
            OrderAction::ReceiveProductInfo(Ok(ProductInfo::mock())),
            |state| {
                state.is_loading = false;
                state.product = Some(ProductState::from(ProductInfo::mock()));
            },
        )
        .await;
}

#[tokio::test(start_paused = true)]
async fn failed_load_keeps_error() {
    let (toaster, _toasts) = Notifier::channel("toast");
    let mut store = TestStore::new(
        OrderState::new(1),
        OrderReducer::default(),
        OrderEnvironment::mock_failed(&config(), &toaster),
    );
    store.send(OrderAction::DidLoad, |_| {});
    store
        .receive(
            OrderAction::ReceiveProductInfo(Err(NetworkError::ServerError)),
            |state| {
                state.is_loading = false;
                state.network_error = Some(NetworkError::ServerError);
            },
        )
        .await;
}

#[tokio::test]
async fn successful_submit_shows_one_toast() {
    let (toaster, toasts) = Notifier::channel("toast");
    let mut store = TestStore::new(loaded(3), OrderReducer::default(), OrderEnvironment::failing());
    store.environment_mut().submit_order = Arc::new(|quantity: i64| {
        assert_eq!(quantity, 3);
        Effect::action(true)
    });
    store.environment_mut().show_toast = toaster.operation();

    store.send(OrderAction::DidTapAddOrder, |_| {});
    store
        .receive(OrderAction::ReceiveAddOrderResponse(true), |_| {})
        .await;
    store.finish().await;

    let toasts: Vec<_> = toasts.try_iter().collect();
    assert_eq!(toasts, vec![ORDER_CREATED_MESSAGE.to_string()]);
}

#[tokio::test]
async fn failed_submit_sets_error_without_toast() {
    let mut store = TestStore::new(loaded(3), OrderReducer::default(), OrderEnvironment::failing());
    store.environment_mut().submit_order = Arc::new(|_: i64| Effect::action(false));

    store.send(OrderAction::DidTapAddOrder, |_| {});
    store
        .receive(OrderAction::ReceiveAddOrderResponse(false), |state| {
            state.counter.error_message = Some(SUBMIT_FAILED_MESSAGE.to_string());
        })
        .await;
    store.finish().await;
}

#[tokio::test(start_paused = true)]
async fn configured_quantity_is_rejected() {
    let (toaster, toasts) = Notifier::channel("toast");
    let mut store = TestStore::new(
        loaded(5),
        OrderReducer::default(),
        OrderEnvironment::mock_failed_if_number(5, &config(), &toaster),
    );
    store.send(OrderAction::DidTapAddOrder, |_| {});
    store
        .receive(OrderAction::ReceiveAddOrderResponse(false), |state| {
            state.counter.error_message = Some(SUBMIT_FAILED_MESSAGE.to_string());
        })
        .await;

    store.send(OrderAction::Counter(CounterAction::DidTapMinus), |state| {
        state.counter.number = 4;
        state.counter.error_message = None;
    });
    store.send(OrderAction::DidTapAddOrder, |_| {});
    store
        .receive(OrderAction::ReceiveAddOrderResponse(true), |_| {})
        .await;
    store.finish().await;
    assert_eq!(toasts.try_iter().count(), 1);
}

#[test]
fn counter_changes_have_no_side_effects() {
    let mut store = TestStore::new(OrderState::new(1), OrderReducer::default(), OrderEnvironment::failing());
    store.send(
        OrderAction::Counter(CounterAction::TextDidChange("-2".to_string())),
        |state| {
            state.counter.number = -2;
            state.counter.error_message = Some(NEGATIVE_NUMBER_MESSAGE.to_string());
        },
    );
    store.send(OrderAction::Counter(CounterAction::DidTapPlus), |state| {
        state.counter.number = -1;
    });
}

#[test]
#[should_panic(expected = "Should not called submitOrder")]
fn submitting_with_failing_environment_fails() {
    let mut store = TestStore::new(loaded(1), OrderReducer::default(), OrderEnvironment::failing());
    store.send(OrderAction::DidTapAddOrder, |_| {});
}

#[test]
fn bottom_sheet_needs_a_product() {
    let mut store = TestStore::new(OrderState::new(1), OrderReducer::default(), OrderEnvironment::failing());
    store.send(OrderAction::ProductInfo(OrderProductAction::DidTap), |_| {});
    assert_eq!(store.state().bottom_sheet_state(), None);
}

#[test]
fn bottom_sheet_toggles_wishlist() {
    let mut store = TestStore::new(loaded(1), OrderReducer::default(), OrderEnvironment::failing());
    store.send(OrderAction::ProductInfo(OrderProductAction::DidTap), |state| {
        state.show_bottom_sheet = true;
    });
    store.send(
        OrderAction::BottomSheet(ProductDetailAction::DidTapWishlist),
        |state| state.is_wishlist = true,
    );
    let info = ProductInfo::mock();
    assert_eq!(
        store.state().bottom_sheet_state(),
        Some(ProductDetailState {
            name: info.name,
            price: info.price,
            description: info.description,
            is_wishlist: true,
        })
    );
    store.send(
        OrderAction::BottomSheet(ProductDetailAction::DidTapWishlist),
        |state| state.is_wishlist = false,
    );
    store.send(OrderAction::DismissBottomSheet, |state| {
        state.show_bottom_sheet = false;
    });
    assert_eq!(store.state().bottom_sheet_state(), None);
}

#[test]
fn scoped_counter_mutates_like_the_parent() {
    let scoped = Store::new(OrderState::new(1), OrderReducer::default(), OrderEnvironment::failing());
    let direct = Store::new(OrderState::new(1), OrderReducer::default(), OrderEnvironment::failing());
    let counter = scoped.scope(|state| state.counter.clone(), OrderAction::Counter);

    for action in [
        CounterAction::DidTapMinus,
        CounterAction::DidTapMinus,
        CounterAction::TextDidChange("7".to_string()),
    ] {
        counter.send(action.clone());
        direct.send(OrderAction::Counter(action));
        assert_eq!(scoped.state(), direct.state());
        assert_eq!(counter.state(), direct.state().counter);
    }
}

#[test]
fn bottom_sheet_scope_disappears_on_dismiss() {
    let store = Store::new(loaded(1), OrderReducer::default(), OrderEnvironment::failing());
    assert!(store
        .scope_optional(|state| state.bottom_sheet_state(), OrderAction::BottomSheet)
        .is_none());

    store.send(OrderAction::ProductInfo(OrderProductAction::DidTap));
    let Some(sheet) =
        store.scope_optional(|state| state.bottom_sheet_state(), OrderAction::BottomSheet)
    else {
        panic!("the sheet should be shown");
    };
    sheet.send(ProductDetailAction::DidTapWishlist);
    assert!(sheet.state().is_wishlist);
    assert!(store.state().is_wishlist);

    store.send(OrderAction::DismissBottomSheet);
    assert!(!sheet.is_present());
    assert!(sheet.state().is_wishlist);
}
