use crate::engine::{Identifiable, IdentifiedVec};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DemoItemState {
    pub id: u64,
    pub text: String,
    pub is_active: bool,
}

impl DemoItemState {
    pub fn new(id: u64, text: impl Into<String>, is_active: bool) -> Self {
        Self {
            id,
            text: text.into(),
            is_active,
        }
    }
}

impl Identifiable for DemoItemState {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ItemStackState {
    pub items: IdentifiedVec<DemoItemState>,
    pub last_id: u64,
    /// Seeds the next shuffle, so the same state always shuffles the same way.
    pub shuffle_seed: u64,
}

impl ItemStackState {
    pub fn with_seed(shuffle_seed: u64) -> Self {
        Self {
            shuffle_seed,
            ..Default::default()
        }
    }
}
