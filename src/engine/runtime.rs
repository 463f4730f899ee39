use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;

use flume::{Receiver, Sender};
use tokio::task::AbortHandle;

use super::effect::{Effect, Kind};

pub(crate) enum Completion<A> {
    /// Output of a value producing effect
    Effect(A),
    /// A fire-and-forget effect ended, or a value producing one died
    Finished,
    /// Sent from outside the store through a `Dispatcher`
    Dispatched(A),
}

/// Executes effects on the current tokio runtime and funnels their results
/// back to the single owner of a store.
pub(crate) struct Runner<A> {
    sender: Sender<Completion<A>>,
    receiver: Receiver<Completion<A>>,
    in_flight: Cell<usize>,
    tasks: RefCell<Vec<AbortHandle>>,
}

impl<A> Runner<A> {
    pub fn in_flight(&self) -> usize {
        self.in_flight.get()
    }
}

impl<A: Send + 'static> Runner<A> {
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            sender,
            receiver,
            in_flight: Cell::new(0),
            tasks: RefCell::default(),
        }
    }

    pub fn dispatcher(&self) -> Dispatcher<A> {
        Dispatcher {
            sender: self.sender.clone(),
        }
    }

    /// Synchronous actions are appended to `queue`, everything else is
    /// spawned. Panics on a failing effect.
    pub fn execute(&self, effect: Effect<A>, queue: &mut VecDeque<A>) {
        match effect.kind {
            Kind::None => {}
            Kind::Action(action) => queue.push_back(action),
            Kind::Merge(effects) => {
                for effect in effects {
                    self.execute(effect, queue);
                }
            }
            Kind::Failing(message) => panic!("{message}"),
            Kind::Future(future) => {
                let mut settle = Settle::new(self.sender.clone());
                self.spawn(async move {
                    let action = future.await;
                    settle.deliver(action);
                });
            }
            Kind::FireForget(future) => {
                let settle = Settle::new(self.sender.clone());
                self.spawn(async move {
                    future.await;
                    drop(settle);
                });
            }
        }
    }

    fn spawn(&self, task: impl Future<Output = ()> + Send + 'static) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            log::error!("Dropping effect: no tokio runtime is running");
            return;
        };
        let join = handle.spawn(task);
        self.in_flight.set(self.in_flight.get() + 1);
        let mut tasks = self.tasks.borrow_mut();
        tasks.retain(|task| !task.is_finished());
        tasks.push(join.abort_handle());
    }

    /// Wait for the next action produced by an effect or a dispatcher.
    ///
    /// Returns `None` once no effect is running and nothing is queued.
    pub async fn next(&self) -> Option<A> {
        loop {
            let completion = if self.in_flight.get() == 0 {
                self.receiver.try_recv().ok()?
            } else {
                self.receiver.recv_async().await.ok()?
            };
            match completion {
                Completion::Dispatched(action) => return Some(action),
                Completion::Effect(action) => {
                    self.settled();
                    return Some(action);
                }
                Completion::Finished => self.settled(),
            }
        }
    }

    fn settled(&self) {
        self.in_flight.set(self.in_flight.get().saturating_sub(1));
    }
}

impl<A> Drop for Runner<A> {
    fn drop(&mut self) {
        let tasks = self.tasks.get_mut();
        if !tasks.is_empty() {
            log::trace!("aborting {} effect task(s)", tasks.len());
        }
        for task in tasks.drain(..) {
            task.abort();
        }
    }
}

/// Reports exactly one completion per spawned task, even if the task
/// panics or gets aborted.
struct Settle<A> {
    sender: Option<Sender<Completion<A>>>,
}

impl<A> Settle<A> {
    fn new(sender: Sender<Completion<A>>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    fn deliver(&mut self, action: A) {
        if let Some(sender) = self.sender.take() {
            // The store is gone, nobody is interested anymore
            let _ = sender.send(Completion::Effect(action));
        }
    }
}

impl<A> Drop for Settle<A> {
    fn drop(&mut self) {
        if let Some(sender) = self.sender.take() {
            let _ = sender.send(Completion::Finished);
        }
    }
}

/// A sendable handle that serializes actions from other tasks or threads
/// into the same entry point as the store's own effects.
pub struct Dispatcher<A> {
    sender: Sender<Completion<A>>,
}

impl<A> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<A> std::fmt::Debug for Dispatcher<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish()
    }
}

impl<A> Dispatcher<A> {
    /// Returns `false` if the store has been dropped.
    pub fn send(&self, action: A) -> bool {
        self.sender.send(Completion::Dispatched(action)).is_ok()
    }
}
