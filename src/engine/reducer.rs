use std::marker::PhantomData;

use super::effect::Effect;
use super::identified::{Identifiable, IdentifiedVec};

/// Computes the next state for an action and describes the side effects
/// that should follow.
///
/// Reducers never perform I/O themselves. Everything impure goes through
/// the `Environment` and is returned as an [`Effect`].
pub trait Reducer {
    type State;
    type Action;
    type Environment;

    fn reduce(
        &self,
        action: Self::Action,
        state: &mut Self::State,
        environment: &Self::Environment,
    ) -> Effect<Self::Action>;
}

impl<R: Reducer + ?Sized> Reducer for Box<R> {
    type State = R::State;
    type Action = R::Action;
    type Environment = R::Environment;

    fn reduce(
        &self,
        action: Self::Action,
        state: &mut Self::State,
        environment: &Self::Environment,
    ) -> Effect<Self::Action> {
        (**self).reduce(action, state, environment)
    }
}

pub type BoxedReducer<S, A, E> = Box<dyn Reducer<State = S, Action = A, Environment = E>>;

/// Selects one case of a parent action and rebuilds it from the child.
pub struct ActionCase<A, C> {
    pub extract: fn(A) -> Option<C>,
    pub embed: fn(C) -> A,
}

impl<A, C> Clone for ActionCase<A, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, C> Copy for ActionCase<A, C> {}

/// Like [`ActionCase`] for actions addressed to one element of a collection.
pub struct ElementCase<A, Id, C> {
    pub extract: fn(A) -> Option<(Id, C)>,
    pub embed: fn(Id, C) -> A,
}

impl<A, Id, C> Clone for ElementCase<A, Id, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, Id, C> Copy for ElementCase<A, Id, C> {}

pub struct FnReducer<S, A, E, F> {
    f: F,
    _marker: PhantomData<fn(A, &mut S, &E)>,
}

/// Use a plain function as a reducer.
pub fn from_fn<S, A, E, F>(f: F) -> FnReducer<S, A, E, F>
where
    F: Fn(A, &mut S, &E) -> Effect<A>,
{
    FnReducer {
        f,
        _marker: PhantomData,
    }
}

impl<S, A, E, F> Reducer for FnReducer<S, A, E, F>
where
    F: Fn(A, &mut S, &E) -> Effect<A>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, action: A, state: &mut S, environment: &E) -> Effect<A> {
        (self.f)(action, state, environment)
    }
}

/// Several reducers over the same state, see [`combine`].
pub struct Combine<S, A, E> {
    reducers: Vec<BoxedReducer<S, A, E>>,
}

/// Run every reducer in order against the same state and action, merging
/// their effects into one batch.
pub fn combine<S, A, E>(reducers: Vec<BoxedReducer<S, A, E>>) -> Combine<S, A, E> {
    Combine { reducers }
}

impl<S, A, E> Reducer for Combine<S, A, E>
where
    A: Clone + Send + 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, action: A, state: &mut S, environment: &E) -> Effect<A> {
        Effect::merge(
            self.reducers
                .iter()
                .map(|reducer| reducer.reduce(action.clone(), state, environment)),
        )
    }
}

/// A child reducer lifted onto a field of its parent, see
/// [`ReducerExt::pullback`].
pub struct Pullback<R: Reducer, S, A, E, L> {
    child: R,
    state: L,
    action: ActionCase<A, R::Action>,
    environment: fn(&E) -> R::Environment,
    _marker: PhantomData<fn(&mut S)>,
}

impl<R, S, A, E, L> Reducer for Pullback<R, S, A, E, L>
where
    R: Reducer,
    R::Action: Send + 'static,
    A: Send + 'static,
    L: Fn(&mut S) -> &mut R::State,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, action: A, state: &mut S, environment: &E) -> Effect<A> {
        let Some(action) = (self.action.extract)(action) else {
            return Effect::NONE;
        };
        let environment = (self.environment)(environment);
        self.child
            .reduce(action, (self.state)(state), &environment)
            .map(self.action.embed)
    }
}

/// A child reducer lifted onto an optional field, see
/// [`ReducerExt::optional`].
pub struct Optional<R: Reducer, S, A, E, L> {
    child: R,
    state: L,
    action: ActionCase<A, R::Action>,
    environment: fn(&E) -> R::Environment,
    _marker: PhantomData<fn(&mut S)>,
}

impl<R, S, A, E, L> Reducer for Optional<R, S, A, E, L>
where
    R: Reducer,
    R::Action: Send + 'static,
    A: Send + 'static,
    L: Fn(&mut S) -> &mut Option<R::State>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, action: A, state: &mut S, environment: &E) -> Effect<A> {
        let Some(action) = (self.action.extract)(action) else {
            return Effect::NONE;
        };
        let Some(child_state) = (self.state)(state).as_mut() else {
            log::debug!("optional state is absent, dropping child action");
            return Effect::NONE;
        };
        let environment = (self.environment)(environment);
        self.child
            .reduce(action, child_state, &environment)
            .map(self.action.embed)
    }
}

/// A child reducer lifted onto every element of a collection, see
/// [`ReducerExt::for_each`].
pub struct ForEach<R, S, A, E, L>
where
    R: Reducer,
    R::State: Identifiable,
{
    child: R,
    state: L,
    action: ElementCase<A, <R::State as Identifiable>::Id, R::Action>,
    environment: fn(&E) -> R::Environment,
    _marker: PhantomData<fn(&mut S)>,
}

impl<R, S, A, E, L> Reducer for ForEach<R, S, A, E, L>
where
    R: Reducer,
    R::State: Identifiable + Clone,
    <R::State as Identifiable>::Id: Send + 'static,
    R::Action: Send + 'static,
    A: Send + 'static,
    L: Fn(&mut S) -> &mut IdentifiedVec<R::State>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, action: A, state: &mut S, environment: &E) -> Effect<A> {
        let Some((id, action)) = (self.action.extract)(action) else {
            return Effect::NONE;
        };
        let Some(element) = (self.state)(state).get_mut(&id) else {
            log::debug!("no element with id {id:?}, dropping child action");
            return Effect::NONE;
        };
        let environment = (self.environment)(environment);
        let embed = self.action.embed;
        self.child
            .reduce(action, element, &environment)
            .map(move |action| embed(id.clone(), action))
    }
}

/// Composition helpers available on every reducer.
pub trait ReducerExt: Reducer + Sized {
    /// Restrict this reducer to one field of a parent state, one case of
    /// a parent action and a narrower view of the parent environment.
    fn pullback<S, A, E, L>(
        self,
        state: L,
        action: ActionCase<A, Self::Action>,
        environment: fn(&E) -> Self::Environment,
    ) -> Pullback<Self, S, A, E, L>
    where
        L: Fn(&mut S) -> &mut Self::State,
    {
        Pullback {
            child: self,
            state,
            action,
            environment,
            _marker: PhantomData,
        }
    }

    /// Like `pullback`, for state that may not exist. Actions arriving
    /// while the state is `None` are dropped.
    fn optional<S, A, E, L>(
        self,
        state: L,
        action: ActionCase<A, Self::Action>,
        environment: fn(&E) -> Self::Environment,
    ) -> Optional<Self, S, A, E, L>
    where
        L: Fn(&mut S) -> &mut Option<Self::State>,
    {
        Optional {
            child: self,
            state,
            action,
            environment,
            _marker: PhantomData,
        }
    }

    /// Run this reducer on the collection element an action is addressed
    /// to. Effects are tagged with the same id again.
    fn for_each<S, A, E, L>(
        self,
        state: L,
        action: ElementCase<A, <Self::State as Identifiable>::Id, Self::Action>,
        environment: fn(&E) -> Self::Environment,
    ) -> ForEach<Self, S, A, E, L>
    where
        Self::State: Identifiable,
        L: Fn(&mut S) -> &mut IdentifiedVec<Self::State>,
    {
        ForEach {
            child: self,
            state,
            action,
            environment,
            _marker: PhantomData,
        }
    }

    fn boxed(self) -> BoxedReducer<Self::State, Self::Action, Self::Environment>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<R: Reducer> ReducerExt for R {}
