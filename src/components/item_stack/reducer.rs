use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::{Effect, IdentifiedVec};
use crate::environment::ItemStackEnvironment;

use super::{DemoItemAction, DemoItemState, ItemStackAction, ItemStackState};

pub fn reduce(
    action: ItemStackAction,
    state: &mut ItemStackState,
    environment: &ItemStackEnvironment,
) -> Effect<ItemStackAction> {
    log::trace!("{action:?}");
    match action {
        ItemStackAction::DidLoad => (environment.load_data)().map(ItemStackAction::ReceiveData),
        ItemStackAction::ReceiveData(items) => {
            state.last_id = items.len() as u64;
            state.items = IdentifiedVec::from(items);
            Effect::NONE
        }
        ItemStackAction::Shuffle => {
            let mut rng = StdRng::seed_from_u64(state.shuffle_seed);
            state.items.shuffle(&mut rng);
            state.shuffle_seed = rng.gen();
            Effect::NONE
        }
        ItemStackAction::AddItem => {
            // loaded ids don't have to be contiguous
            state.last_id += 1;
            while state.items.contains(&state.last_id) {
                state.last_id += 1;
            }
            let id = state.last_id;
            state
                .items
                .push(DemoItemState::new(id, format!("Data {id}"), true));
            Effect::NONE
        }
        ItemStackAction::Child {
            id,
            action: DemoItemAction::Remove,
        } => {
            state.items.remove(&id);
            Effect::NONE
        }
        ItemStackAction::Child {
            id,
            action: DemoItemAction::Toggle,
        } => {
            if let Some(item) = state.items.get_mut(&id) {
                item.is_active = !item.is_active;
            }
            Effect::NONE
        }
    }
}
