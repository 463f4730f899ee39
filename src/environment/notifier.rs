use std::sync::Arc;

use flume::{Receiver, Sender};

use super::Operation;
use crate::engine::{Effect, Never};

/// A sink for outgoing messages such as toasts, routes or tracking events.
/// Whoever holds the receiving end decides what "displaying" means.
#[derive(Clone, Debug)]
pub struct Notifier {
    kind: &'static str,
    sender: Sender<String>,
}

impl Notifier {
    pub fn channel(kind: &'static str) -> (Self, Receiver<String>) {
        let (sender, receiver) = flume::unbounded();
        (Self { kind, sender }, receiver)
    }

    pub fn notify(&self, message: String) -> Effect<Never> {
        let kind = self.kind;
        let sender = self.sender.clone();
        Effect::fire_forget(async move {
            log::debug!("{kind}: {message}");
            if sender.send(message).is_err() {
                log::warn!("No one is listening for {kind} messages");
            }
        })
    }

    /// The notifier as an environment function.
    pub fn operation(&self) -> Operation<String, Never> {
        let notifier = self.clone();
        Arc::new(move |message: String| notifier.notify(message))
    }
}
