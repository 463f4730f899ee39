use std::time::Duration;

use futures_util::StreamExt;

use storefront::components::counter::{CounterAction, CounterReducer, CounterState};
use storefront::components::order::{OrderAction, OrderReducer, OrderState};
use storefront::engine::from_fn;
use storefront::environment::{AppConfig, Notifier, OrderEnvironment};
use storefront::{Effect, Store};

#[tokio::test]
async fn dispatcher_feeds_actions_from_other_threads() {
    let store = Store::new(CounterState::new(0), CounterReducer, ());
    let dispatcher = store.dispatcher();
    std::thread::spawn(move || {
        for _ in 0..3 {
            assert!(dispatcher.send(CounterAction::DidTapPlus));
        }
    })
    .join()
    .unwrap();

    store.run_until_idle().await;
    assert_eq!(store.state().number, 3);
    assert!(!store.next().await);
}

#[tokio::test(start_paused = true)]
async fn run_until_idle_waits_for_delayed_effects() {
    let config = AppConfig {
        latency_ms: 2_000,
        ..AppConfig::default()
    };
    let (toaster, _toasts) = Notifier::channel("toast");
    let store = Store::new(
        OrderState::new(1),
        OrderReducer::default(),
        OrderEnvironment::mock_success(&config, &toaster),
    );
    store.send(OrderAction::DidLoad);
    assert_eq!(store.in_flight(), 1);
    assert!(store.state().is_loading);

    store.run_until_idle().await;
    assert_eq!(store.in_flight(), 0);
    assert!(!store.state().is_loading);
    assert!(store.state().product.is_some());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_store_cancels_effects() {
    let (sender, receiver) = flume::unbounded();
    let reducer = from_fn(move |_: (), _: &mut (), _: &()| {
        let sender = sender.clone();
        Effect::fire_forget(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            let _ = sender.send("finished");
        })
    });
    let store = Store::new((), reducer, ());
    store.send(());
    assert_eq!(store.in_flight(), 1);
    drop(store);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(receiver.try_iter().next(), None);
}

#[tokio::test]
async fn subscriptions_replay_and_end_with_the_store() {
    let store = Store::new(CounterState::new(2), CounterReducer, ());
    let enabled = store.subscribe(|state: &CounterState| state.is_minus_button_enabled());
    // 2, 1, 0, 1
    store.send(CounterAction::DidTapMinus);
    store.send(CounterAction::DidTapMinus);
    store.send(CounterAction::DidTapPlus);
    drop(store);

    let seen: Vec<_> = enabled.collect().await;
    assert_eq!(seen, vec![true, false, true]);
}

#[tokio::test]
async fn scoped_subscription_sees_parent_changes() {
    let store = Store::new(OrderState::new(0), OrderReducer::default(), OrderEnvironment::failing());
    let counter = store.scope(|state| state.counter.clone(), OrderAction::Counter);
    let mut numbers = counter.subscribe(|state: &CounterState| state.number);

    store.send(OrderAction::Counter(CounterAction::DidTapPlus));
    counter.send(CounterAction::DidTapPlus);
    assert_eq!(numbers.next().await, Some(0));
    assert_eq!(numbers.next().await, Some(1));
    assert_eq!(numbers.next().await, Some(2));
}
