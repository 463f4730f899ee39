use std::cell::RefCell;
use std::rc::Rc;

/// A stream of projected state values, see [`Publisher::subscribe`].
pub type Subscription<T> = flume::r#async::RecvStream<'static, T>;

/// Called with every published state. Returning `false` unregisters it.
pub type Observer<S> = Box<dyn FnMut(&S) -> bool>;

/// Shared current value plus the observers interested in it.
pub struct Publisher<S> {
    value: Rc<RefCell<S>>,
    observers: Rc<RefCell<Vec<Observer<S>>>>,
}

impl<S> Clone for Publisher<S> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            observers: self.observers.clone(),
        }
    }
}

impl<S: Default> Default for Publisher<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> Publisher<S> {
    pub fn new(value: S) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            observers: Rc::default(),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.value.borrow())
    }

    /// Mutate the value without notifying anyone. Call [`Self::publish`]
    /// once the mutation is committed.
    pub fn with_mutation<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.value.borrow_mut())
    }

    pub fn observe(&self, observer: Observer<S>) {
        self.observers.borrow_mut().push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }
}

impl<S: Clone> Publisher<S> {
    pub fn get(&self) -> S {
        self.value.borrow().clone()
    }

    /// Notify observers in registration order. Observers may send new
    /// actions or register further observers while being notified.
    pub fn publish(&self) {
        let snapshot = self.get();
        let mut notified = std::mem::take(&mut *self.observers.borrow_mut());
        notified.retain_mut(|observer| observer(&snapshot));
        let mut observers = self.observers.borrow_mut();
        notified.append(&mut observers);
        *observers = notified;
    }

    /// Stream `projection` of the state. The current value is replayed
    /// immediately, afterwards only distinct values are emitted. The
    /// stream ends when the publisher is dropped.
    pub fn subscribe<T, P>(&self, projection: P) -> Subscription<T>
    where
        T: PartialEq + Clone + Send + 'static,
        P: Fn(&S) -> T + 'static,
    {
        let initial = self.with(&projection);
        projected(initial, projection, |observer| self.observe(observer))
    }
}

/// Builds a de-duplicating stream over any observable source.
pub(crate) fn projected<S, T, P>(
    initial: T,
    projection: P,
    register: impl FnOnce(Observer<S>),
) -> Subscription<T>
where
    T: PartialEq + Clone + Send + 'static,
    P: Fn(&S) -> T + 'static,
{
    let (sender, receiver) = flume::unbounded();
    let _ = sender.send(initial.clone());
    let mut last = initial;
    register(Box::new(move |state: &S| {
        let next = projection(state);
        if next == last {
            return true;
        }
        last = next.clone();
        sender.send(next).is_ok()
    }));
    receiver.into_stream()
}
