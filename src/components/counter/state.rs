#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CounterState {
    pub number: i64,
    pub error_message: Option<String>,
}

impl CounterState {
    pub fn new(number: i64) -> Self {
        Self {
            number,
            error_message: None,
        }
    }

    pub fn is_minus_button_enabled(&self) -> bool {
        self.number > 0
    }
}
