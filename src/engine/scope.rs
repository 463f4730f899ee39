use std::cell::RefCell;
use std::rc::Rc;

use super::identified::{Identifiable, IdentifiedVec};
use super::publisher::{projected, Observer, Subscription};

/// A store restricted to a slice of its parent's state and one case of
/// its parent's actions.
///
/// Reading goes through the parent on every call. When the slice
/// disappears (an optional child became `None`, an element was removed)
/// the last known value is returned and sent actions are dropped by the
/// parent reducer.
pub struct ScopedStore<S, A> {
    read: Rc<dyn Fn() -> Option<S>>,
    write: Rc<dyn Fn(A)>,
    observe: Rc<dyn Fn(Observer<S>)>,
    last: Rc<RefCell<S>>,
}

impl<S, A> Clone for ScopedStore<S, A> {
    fn clone(&self) -> Self {
        Self {
            read: self.read.clone(),
            write: self.write.clone(),
            observe: self.observe.clone(),
            last: self.last.clone(),
        }
    }
}

impl<S: Clone + 'static, A: 'static> ScopedStore<S, A> {
    pub(crate) fn with_initial(
        initial: S,
        read: Rc<dyn Fn() -> Option<S>>,
        write: Rc<dyn Fn(A)>,
        observe: Rc<dyn Fn(Observer<S>)>,
    ) -> Self {
        Self {
            read,
            write,
            observe,
            last: Rc::new(RefCell::new(initial)),
        }
    }

    pub fn state(&self) -> S {
        match (self.read)() {
            Some(state) => {
                *self.last.borrow_mut() = state.clone();
                state
            }
            None => self.last.borrow().clone(),
        }
    }

    /// `false` once the slice this store was scoped to is gone.
    pub fn is_present(&self) -> bool {
        (self.read)().is_some()
    }

    pub fn send(&self, action: A) {
        (self.write)(action)
    }

    pub fn subscribe<T, P>(&self, projection: P) -> Subscription<T>
    where
        T: PartialEq + Clone + Send + 'static,
        P: Fn(&S) -> T + 'static,
    {
        let initial = projection(&self.state());
        projected(initial, projection, |observer| (self.observe)(observer))
    }

    pub fn scope<LS, LA>(
        &self,
        to_local: impl Fn(&S) -> LS + 'static,
        from_local: impl Fn(LA) -> A + 'static,
    ) -> ScopedStore<LS, LA>
    where
        LS: Clone + 'static,
        LA: 'static,
    {
        let to_local = Rc::new(to_local);
        let initial = to_local(&self.state());
        let read = {
            let parent = self.clone();
            let to_local = to_local.clone();
            Rc::new(move || parent.is_present().then(|| to_local(&parent.state())))
        };
        let observe = {
            let observe = self.observe.clone();
            Rc::new(move |mut observer: Observer<LS>| {
                let to_local = to_local.clone();
                observe(Box::new(move |state: &S| observer(&to_local(state))))
            })
        };
        ScopedStore::with_initial(initial, read, self.forward(from_local), observe)
    }

    /// Scope to a slice that may not exist. Returns `None` if it is
    /// currently absent.
    pub fn scope_optional<LS, LA>(
        &self,
        to_local: impl Fn(&S) -> Option<LS> + 'static,
        from_local: impl Fn(LA) -> A + 'static,
    ) -> Option<ScopedStore<LS, LA>>
    where
        LS: Clone + 'static,
        LA: 'static,
    {
        let to_local = Rc::new(to_local);
        let initial = to_local(&self.state())?;
        let read = {
            let parent = self.clone();
            let to_local = to_local.clone();
            Rc::new(move || {
                if parent.is_present() {
                    to_local(&parent.state())
                } else {
                    None
                }
            })
        };
        let observe = {
            let observe = self.observe.clone();
            Rc::new(move |mut observer: Observer<LS>| {
                let to_local = to_local.clone();
                observe(Box::new(move |state: &S| match to_local(state) {
                    Some(local) => observer(&local),
                    None => true,
                }))
            })
        };
        Some(ScopedStore::with_initial(
            initial,
            read,
            self.forward(from_local),
            observe,
        ))
    }

    /// One scoped store per element currently in the collection.
    pub fn scope_each<C, CA>(
        &self,
        collection: impl Fn(&S) -> &IdentifiedVec<C> + 'static,
        embed: impl Fn(C::Id, CA) -> A + 'static,
    ) -> Vec<ScopedStore<C, CA>>
    where
        C: Identifiable + Clone + 'static,
        CA: 'static,
    {
        let collection = Rc::new(collection);
        let embed = Rc::new(embed);
        let ids: Vec<C::Id> = collection(&self.state()).ids().cloned().collect();
        ids.into_iter()
            .filter_map(|id| {
                let lookup = id.clone();
                let collection = collection.clone();
                let embed = embed.clone();
                self.scope_optional(
                    move |state| collection(state).get(&lookup).cloned(),
                    move |action| embed(id.clone(), action),
                )
            })
            .collect()
    }

    fn forward<LA: 'static>(&self, from_local: impl Fn(LA) -> A + 'static) -> Rc<dyn Fn(LA)> {
        let write = self.write.clone();
        Rc::new(move |action| write(from_local(action)))
    }
}
