#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CounterAction {
    DidTapMinus,
    DidTapPlus,
    TextDidChange(String),
}
