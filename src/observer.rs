//! Minimal synchronous publish/subscribe channel.
//!
//! Decouples the rules engine from its presentation collaborator: the board
//! publishes each committed move and subscribers react to it. Delivery is
//! synchronous and in registration order; a handler must not trigger another
//! move commit from within its notification (reentrancy is unsupported).

use crate::move_description::MoveDescription;

/// Handle returned by `Subject::attach`, used to detach later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriberId(usize);

type ActionHandler = Box<dyn FnMut(&MoveDescription)>;

/// A list of committed-move handlers.
#[derive(Default)]
pub struct Subject {
    observers: Vec<(SubscriberId, ActionHandler)>,
    next_id: usize,
}

impl Subject {
    pub fn new() -> Self {
        Subject::default()
    }

    /// Registers a handler and returns its id.
    pub fn attach<F>(&mut self, handler: F) -> SubscriberId
    where
        F: FnMut(&MoveDescription) + 'static,
    {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(handler)));
        id
    }

    /// Removes a handler. Returns false if the id was never attached or was
    /// already detached.
    pub fn detach(&mut self, id: SubscriberId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() < before
    }

    /// Delivers a committed move to every handler in registration order.
    pub fn notify(&mut self, value: &MoveDescription) {
        for (_, handler) in &mut self.observers {
            handler(value);
        }
    }
}
