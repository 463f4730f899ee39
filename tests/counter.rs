use storefront::components::counter::{
    CounterAction, CounterReducer, CounterState, NEGATIVE_NUMBER_MESSAGE, NOT_A_NUMBER_MESSAGE,
};
use storefront::{Store, TestStore};

fn negative() -> Option<String> {
    Some(NEGATIVE_NUMBER_MESSAGE.to_string())
}

#[test]
fn minus_below_zero_sets_error() {
    let mut store = TestStore::new(CounterState::new(1), CounterReducer, ());
    store.send(CounterAction::DidTapMinus, |state| state.number = 0);
    store.send(CounterAction::DidTapMinus, |state| {
        state.number = -1;
        state.error_message = negative();
    });
    store.send(CounterAction::DidTapPlus, |state| {
        state.number = 0;
        state.error_message = None;
    });
}

#[test]
fn negative_text_then_plus_keeps_error() {
    let mut store = TestStore::new(CounterState::new(1), CounterReducer, ());
    store.send(CounterAction::TextDidChange("-2".to_string()), |state| {
        state.number = -2;
        state.error_message = negative();
    });
    store.send(CounterAction::DidTapPlus, |state| state.number = -1);
}

#[test]
fn non_numeric_text_resets_number() {
    let mut store = TestStore::new(CounterState::new(4), CounterReducer, ());
    store.send(CounterAction::TextDidChange("12a".to_string()), |state| {
        state.number = 0;
        state.error_message = Some(NOT_A_NUMBER_MESSAGE.to_string());
    });
    store.send(CounterAction::TextDidChange("12".to_string()), |state| {
        state.number = 12;
        state.error_message = None;
    });
    store.send(CounterAction::TextDidChange(String::new()), |state| {
        state.number = 0;
        state.error_message = Some(NOT_A_NUMBER_MESSAGE.to_string());
    });
}

#[test]
fn minus_button_follows_number() {
    assert!(!CounterState::new(0).is_minus_button_enabled());
    assert!(CounterState::new(1).is_minus_button_enabled());
    assert!(!CounterState::new(-3).is_minus_button_enabled());
}

#[test]
fn taps_add_up() {
    for (initial, taps) in [(0, "++-"), (1, "---"), (5, "-+-+--"), (-2, "++++")] {
        let store = Store::new(CounterState::new(initial), CounterReducer, ());
        for tap in taps.chars() {
            match tap {
                '+' => store.send(CounterAction::DidTapPlus),
                _ => store.send(CounterAction::DidTapMinus),
            }
        }
        let plus = taps.matches('+').count() as i64;
        let minus = taps.matches('-').count() as i64;
        let state = store.state();
        assert_eq!(state.number, initial + plus - minus, "{taps}");
        assert_eq!(state.error_message.is_some(), state.number < 0, "{taps}");
    }
}
