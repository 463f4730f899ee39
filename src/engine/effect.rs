use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use futures_util::FutureExt;

/// The output type of effects that never produce an action, e.g. a toast.
pub type Never = std::convert::Infallible;

pub(crate) type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// A description of work the store performs after a reducer returns.
///
/// Effects are plain data until a store executes them. Value producing
/// effects feed their output back into the store as a new action.
#[must_use = "effects do nothing unless returned to a store"]
pub struct Effect<T> {
    pub(crate) kind: Kind<T>,
}

pub(crate) enum Kind<T> {
    None,
    Action(T),
    Future(BoxFuture<T>),
    FireForget(BoxFuture<()>),
    Merge(Vec<Effect<T>>),
    Failing(String),
}

impl<T> Effect<T> {
    pub const NONE: Self = Effect { kind: Kind::None };

    pub fn is_none(&self) -> bool {
        match &self.kind {
            Kind::None => true,
            Kind::Merge(effects) => effects.iter().all(Effect::is_none),
            _ => false,
        }
    }
}

impl<T: Send + 'static> Effect<T> {
    /// Feed `action` back into the store right after the current one.
    pub fn action(action: T) -> Self {
        Effect {
            kind: Kind::Action(action),
        }
    }

    /// Run `future` and map its output into an action.
    pub fn future<F, O, M>(future: F, mapper: M) -> Self
    where
        F: Future<Output = O> + Send + 'static,
        M: FnOnce(O) -> T + Send + 'static,
    {
        Effect {
            kind: Kind::Future(Box::pin(future.map(mapper))),
        }
    }

    /// Run `future` and use its output as is.
    pub fn task<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Effect {
            kind: Kind::Future(Box::pin(future)),
        }
    }

    /// Run `future` and ignore whatever it does.
    pub fn fire_forget<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Effect {
            kind: Kind::FireForget(Box::pin(future)),
        }
    }

    /// Emit `action` once `duration` has passed on the runtime clock.
    pub fn timer(duration: Duration, action: T) -> Self {
        Self::task(async move {
            tokio::time::sleep(duration).await;
            action
        })
    }

    pub fn merge(effects: impl IntoIterator<Item = Effect<T>>) -> Self {
        let mut effects: Vec<_> = effects.into_iter().filter(|e| !e.is_none()).collect();
        match effects.len() {
            0 => Self::NONE,
            1 => effects.pop().unwrap_or(Self::NONE),
            _ => Effect {
                kind: Kind::Merge(effects),
            },
        }
    }

    /// An effect that fails the current test when a store executes it.
    ///
    /// Used by environments that assert a code path has no side effects.
    pub fn failing(message: impl Into<String>) -> Self {
        Effect {
            kind: Kind::Failing(message.into()),
        }
    }

    /// Translate the output of this effect, e.g. to lift an environment
    /// result into an action, or a child action into its parent.
    pub fn map<U, F>(self, f: F) -> Effect<U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Clone + Send + 'static,
    {
        let kind = match self.kind {
            Kind::None => Kind::None,
            Kind::Action(action) => Kind::Action(f(action)),
            Kind::Future(future) => Kind::Future(Box::pin(future.map(f))),
            Kind::FireForget(future) => Kind::FireForget(future),
            Kind::Merge(effects) => {
                Kind::Merge(effects.into_iter().map(|e| e.map(f.clone())).collect())
            }
            Kind::Failing(message) => Kind::Failing(message),
        };
        Effect { kind }
    }

    /// Run this effect for its side effects only. Its output never reaches
    /// the store, but a failing effect keeps failing.
    pub fn fire_and_forget<U: Send + 'static>(self) -> Effect<U> {
        let kind = match self.kind {
            Kind::None | Kind::Action(_) => Kind::None,
            Kind::Future(future) => Kind::FireForget(Box::pin(future.map(|_| ()))),
            Kind::FireForget(future) => Kind::FireForget(future),
            Kind::Merge(effects) => {
                Kind::Merge(effects.into_iter().map(Effect::fire_and_forget).collect())
            }
            Kind::Failing(message) => Kind::Failing(message),
        };
        Effect { kind }
    }
}

impl<T> std::fmt::Debug for Effect<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            Kind::None => write!(f, "None"),
            Kind::Action(_) => write!(f, "Action"),
            Kind::Future(_) => write!(f, "Future"),
            Kind::FireForget(_) => write!(f, "FireForget"),
            Kind::Merge(effects) => f.debug_list().entries(effects).finish(),
            Kind::Failing(message) => f.debug_tuple("Failing").field(message).finish(),
        }
    }
}
