use super::DemoItemState;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DemoItemAction {
    Toggle,
    Remove,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ItemStackAction {
    DidLoad,
    Shuffle,
    AddItem,
    Child { id: u64, action: DemoItemAction },

    ReceiveData(Vec<DemoItemState>),
}
