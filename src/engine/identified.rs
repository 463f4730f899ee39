use std::hash::Hash;

use rand::seq::SliceRandom;
use rand::Rng;

/// Elements that carry a stable identity.
pub trait Identifiable {
    type Id: Clone + Eq + Hash + std::fmt::Debug;
    fn id(&self) -> Self::Id;
}

/// An ordered collection addressable by element id. Ids are always
/// unique; inserting an element with a known id replaces the old one in
/// place.
///
/// Backed by persistent structures, so cloning a state that contains one
/// is cheap.
pub struct IdentifiedVec<T: Identifiable> {
    ids: im::Vector<T::Id>,
    elements: im::HashMap<T::Id, T>,
}

impl<T: Identifiable + Clone> IdentifiedVec<T> {
    pub fn new() -> Self {
        Self {
            ids: im::Vector::new(),
            elements: im::HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.elements.contains_key(id)
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.elements.get_mut(id)
    }

    pub fn index_of(&self, id: &T::Id) -> Option<usize> {
        self.ids.index_of(id)
    }

    /// Append `element`, or replace the element with the same id.
    /// Returns `true` if the element was new.
    pub fn push(&mut self, element: T) -> bool {
        let id = element.id();
        let inserted = self.elements.insert(id.clone(), element).is_none();
        if inserted {
            self.ids.push_back(id);
        }
        inserted
    }

    /// Insert at `index` (clamped to the length). An existing element with
    /// the same id is removed first.
    pub fn insert(&mut self, index: usize, element: T) {
        let id = element.id();
        if self.elements.contains_key(&id) {
            self.remove(&id);
        }
        let index = index.min(self.ids.len());
        self.ids.insert(index, id.clone());
        self.elements.insert(id, element);
    }

    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let element = self.elements.remove(id)?;
        if let Some(index) = self.ids.index_of(id) {
            self.ids.remove(index);
        }
        Some(element)
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        let elements = &mut self.elements;
        self.ids.retain(|id| {
            let Some(element) = elements.get(id) else { return false };
            if keep(element) {
                true
            } else {
                elements.remove(id);
                false
            }
        });
    }

    pub fn ids(&self) -> impl Iterator<Item = &T::Id> + '_ {
        self.ids.iter()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.ids.iter().filter_map(|id| self.elements.get(id))
    }

    pub fn first_where(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.iter().find(|element| predicate(element))
    }

    /// Mutate every element in order.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(&mut T)) {
        for id in self.ids.iter() {
            if let Some(element) = self.elements.get_mut(id) {
                f(element);
            }
        }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut ids: Vec<_> = self.ids.iter().cloned().collect();
        ids.shuffle(rng);
        self.ids = ids.into_iter().collect();
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Identifiable + Clone> Default for IdentifiedVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Identifiable + Clone> Clone for IdentifiedVec<T> {
    fn clone(&self) -> Self {
        Self {
            ids: self.ids.clone(),
            elements: self.elements.clone(),
        }
    }
}

impl<T: Identifiable + Clone + PartialEq> PartialEq for IdentifiedVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ids == other.ids && self.iter().eq(other.iter())
    }
}

impl<T: Identifiable + Clone + Eq> Eq for IdentifiedVec<T> {}

impl<T: Identifiable + Clone + std::fmt::Debug> std::fmt::Debug for IdentifiedVec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Identifiable + Clone> FromIterator<T> for IdentifiedVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Self::new();
        for element in iter {
            collection.push(element);
        }
        collection
    }
}

impl<T: Identifiable + Clone> From<Vec<T>> for IdentifiedVec<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}
