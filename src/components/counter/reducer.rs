use crate::engine::Effect;

use super::{CounterAction, CounterState};

pub const NEGATIVE_NUMBER_MESSAGE: &str = "Error, should >= 0";
pub const NOT_A_NUMBER_MESSAGE: &str = "Should only contains numeric";

pub fn reduce(
    action: CounterAction,
    state: &mut CounterState,
    _environment: &(),
) -> Effect<CounterAction> {
    log::trace!("{action:?}");
    match action {
        CounterAction::DidTapMinus => {
            state.number = state.number.saturating_sub(1);
            validate(state);
        }
        CounterAction::DidTapPlus => {
            state.number = state.number.saturating_add(1);
            validate(state);
        }
        CounterAction::TextDidChange(text) => match text.parse::<i64>() {
            Ok(number) => {
                state.number = number;
                validate(state);
            }
            Err(_) => {
                state.number = 0;
                state.error_message = Some(NOT_A_NUMBER_MESSAGE.to_string());
            }
        },
    }
    Effect::NONE
}

fn validate(state: &mut CounterState) {
    state.error_message = (state.number < 0).then(|| NEGATIVE_NUMBER_MESSAGE.to_string());
}
