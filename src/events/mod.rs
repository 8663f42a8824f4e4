//! Event reporting.
//!
//! ## Key Types
//!
//! - `GameEvent`: One observable state change
//! - `EventLog`: Ordered buffer the match appends to and observers drain

pub mod event;

pub use event::{EffectPayload, GameEvent};

/// Ordered buffer of events not yet drained.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take every buffered event, oldest first.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drop events past `len`. Used to discard the events of a command
    /// that was rolled back.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.events.truncate(len);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }
}
