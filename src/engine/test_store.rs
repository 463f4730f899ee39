use std::collections::VecDeque;
use std::fmt::Debug;

use super::reducer::Reducer;
use super::runtime::Runner;

/// Drives a reducer step by step and asserts every state change and every
/// action its effects feed back.
///
/// `send` and `receive` take a closure that applies the expected changes
/// to a copy of the previous state; the result has to match the state the
/// reducer produced. Actions produced by effects have to be received
/// explicitly, and a test store that is dropped with unreceived actions or
/// running effects fails the test.
pub struct TestStore<R: Reducer> {
    reducer: R,
    state: R::State,
    environment: R::Environment,
    runner: Runner<R::Action>,
    received: VecDeque<R::Action>,
}

impl<R> TestStore<R>
where
    R: Reducer,
    R::State: Clone + PartialEq + Debug,
    R::Action: PartialEq + Debug + Send + 'static,
{
    pub fn new(initial_state: R::State, reducer: R, environment: R::Environment) -> Self {
        Self {
            reducer,
            state: initial_state,
            environment,
            runner: Runner::new(),
            received: VecDeque::new(),
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    pub fn environment(&self) -> &R::Environment {
        &self.environment
    }

    /// Swap out environment functions before exercising a code path.
    pub fn environment_mut(&mut self) -> &mut R::Environment {
        &mut self.environment
    }

    #[track_caller]
    pub fn send(&mut self, action: R::Action, update: impl FnOnce(&mut R::State)) {
        assert!(
            self.received.is_empty(),
            "Must handle {} received action(s) before sending {action:?}: {:?}",
            self.received.len(),
            self.received
        );
        self.step(action, update);
    }

    /// Wait for the next action fed back by an effect and assert it equals
    /// `expected`.
    pub async fn receive(&mut self, expected: R::Action, update: impl FnOnce(&mut R::State)) {
        let action = match self.received.pop_front() {
            Some(action) => action,
            None => match self.runner.next().await {
                Some(action) => action,
                None => panic!("Expected to receive {expected:?}, but no effect is running"),
            },
        };
        assert_eq!(action, expected, "Received an unexpected action");
        self.step(action, update);
    }

    /// Wait for every running effect to complete. Fails if any of them
    /// produces an action.
    pub async fn finish(&mut self) {
        if let Some(action) = self.received.front() {
            panic!("Received action was never asserted: {action:?}");
        }
        if let Some(action) = self.runner.next().await {
            panic!("An effect produced an action that was never asserted: {action:?}");
        }
    }

    fn step(&mut self, action: R::Action, update: impl FnOnce(&mut R::State)) {
        let description = format!("{action:?}");
        let mut expected = self.state.clone();
        update(&mut expected);
        let effect = self
            .reducer
            .reduce(action, &mut self.state, &self.environment);
        self.runner.execute(effect, &mut self.received);
        assert_eq!(self.state, expected, "State mismatch after {description}");
    }
}

impl<R: Reducer> Drop for TestStore<R> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }
        if !self.received.is_empty() {
            panic!(
                "{} received action(s) were never asserted",
                self.received.len()
            );
        }
        let running = self.runner.in_flight();
        if running > 0 {
            panic!("{running} effect(s) are still running, await them with `receive` or `finish`");
        }
    }
}
