use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use super::identified::{Identifiable, IdentifiedVec};
use super::publisher::{Publisher, Subscription};
use super::reducer::Reducer;
use super::runtime::{Dispatcher, Runner};
use super::scope::ScopedStore;

/// Owns the state of one screen, runs its reducer and executes the
/// returned effects.
///
/// A store has a single logical owner. All mutation happens on the thread
/// that calls [`Store::send`], effect results are fed back through
/// [`Store::next`]. Other tasks reach the same entry point through a
/// [`Dispatcher`]. Dropping the last handle cancels all running effects.
pub struct Store<R: Reducer> {
    inner: Rc<Inner<R>>,
}

struct Inner<R: Reducer> {
    reducer: R,
    environment: R::Environment,
    state: Publisher<R::State>,
    runner: Runner<R::Action>,
    queue: RefCell<VecDeque<R::Action>>,
    dispatching: Cell<bool>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<R> Store<R>
where
    R: Reducer + 'static,
    R::State: Clone + 'static,
    R::Action: std::fmt::Debug + Send + 'static,
    R::Environment: 'static,
{
    pub fn new(initial_state: R::State, reducer: R, environment: R::Environment) -> Self {
        Self {
            inner: Rc::new(Inner {
                reducer,
                environment,
                state: Publisher::new(initial_state),
                runner: Runner::new(),
                queue: RefCell::default(),
                dispatching: Cell::new(false),
            }),
        }
    }

    pub fn state(&self) -> R::State {
        self.inner.state.get()
    }

    pub fn with_state<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        self.inner.state.with(f)
    }

    pub fn environment(&self) -> &R::Environment {
        &self.inner.environment
    }

    /// Reduce `action`, commit and publish the new state, then run the
    /// effect. Synchronous follow-up actions, and actions sent by
    /// observers while publishing, are processed before this returns.
    pub fn send(&self, action: R::Action) {
        let inner = &*self.inner;
        inner.queue.borrow_mut().push_back(action);
        if inner.dispatching.replace(true) {
            return;
        }
        let _dispatching = Dispatching(&inner.dispatching);
        loop {
            let next = inner.queue.borrow_mut().pop_front();
            let Some(action) = next else { break };
            log::debug!("{action:?}");
            let effect = inner
                .state
                .with_mutation(|state| inner.reducer.reduce(action, state, &inner.environment));
            inner.state.publish();
            let mut follow_ups = VecDeque::new();
            inner.runner.execute(effect, &mut follow_ups);
            inner.queue.borrow_mut().extend(follow_ups);
        }
    }

    pub fn subscribe<T, P>(&self, projection: P) -> Subscription<T>
    where
        T: PartialEq + Clone + Send + 'static,
        P: Fn(&R::State) -> T + 'static,
    {
        self.inner.state.subscribe(projection)
    }

    /// The whole store as a [`ScopedStore`], the root every scope
    /// derives from.
    pub fn view(&self) -> ScopedStore<R::State, R::Action> {
        let read = {
            let state = self.inner.state.clone();
            Rc::new(move || Some(state.get()))
        };
        let write = {
            let store = self.clone();
            Rc::new(move |action| store.send(action))
        };
        let observe = {
            let state = self.inner.state.clone();
            Rc::new(move |observer| state.observe(observer))
        };
        ScopedStore::with_initial(self.state(), read, write, observe)
    }

    pub fn scope<LS, LA>(
        &self,
        to_local: impl Fn(&R::State) -> LS + 'static,
        from_local: impl Fn(LA) -> R::Action + 'static,
    ) -> ScopedStore<LS, LA>
    where
        LS: Clone + 'static,
        LA: 'static,
    {
        self.view().scope(to_local, from_local)
    }

    pub fn scope_optional<LS, LA>(
        &self,
        to_local: impl Fn(&R::State) -> Option<LS> + 'static,
        from_local: impl Fn(LA) -> R::Action + 'static,
    ) -> Option<ScopedStore<LS, LA>>
    where
        LS: Clone + 'static,
        LA: 'static,
    {
        self.view().scope_optional(to_local, from_local)
    }

    pub fn scope_each<C, CA>(
        &self,
        collection: impl Fn(&R::State) -> &IdentifiedVec<C> + 'static,
        embed: impl Fn(C::Id, CA) -> R::Action + 'static,
    ) -> Vec<ScopedStore<C, CA>>
    where
        C: Identifiable + Clone + 'static,
        CA: 'static,
    {
        self.view().scope_each(collection, embed)
    }

    pub fn dispatcher(&self) -> Dispatcher<R::Action> {
        self.inner.runner.dispatcher()
    }

    /// Number of effects that have not completed yet.
    pub fn in_flight(&self) -> usize {
        self.inner.runner.in_flight()
    }

    /// Wait for the next effect result or dispatched action and send it.
    /// Returns `false` if the store is idle.
    pub async fn next(&self) -> bool {
        match self.inner.runner.next().await {
            Some(action) => {
                self.send(action);
                true
            }
            None => false,
        }
    }

    /// Process effect results until no effect is running anymore.
    pub async fn run_until_idle(&self) {
        while self.next().await {}
    }
}

struct Dispatching<'a>(&'a Cell<bool>);

impl Drop for Dispatching<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
