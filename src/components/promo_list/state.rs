use crate::engine::{Identifiable, IdentifiedVec};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PromoState {
    pub id: String,
    pub title: String,
    pub amount: i64,
    pub is_selected: bool,
}

impl PromoState {
    pub fn new(id: impl Into<String>, title: impl Into<String>, amount: i64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            amount,
            is_selected: false,
        }
    }
}

impl Identifiable for PromoState {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PromoListState {
    /// The promo the user committed to, not the one currently ticked.
    pub selected_promo_id: Option<String>,
    pub promos: IdentifiedVec<PromoState>,
}

impl PromoListState {
    pub fn selected_promo_state(&self) -> Option<&PromoState> {
        self.selected_promo_id
            .as_ref()
            .and_then(|id| self.promos.get(id))
    }
}
