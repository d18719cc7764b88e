//! One-slot mailbox between the button and the game tick.
//!
//! The button side only ever records that a press happened. Deciding what
//! the press means (jump or round start) and every state change that
//! follows happen in [`Game::tick`](crate::Game::tick), so the two sides
//! never race on game state.

use embassy_sync::{
    blocking_mutex::raw::CriticalSectionRawMutex,
    signal::Signal,
};

pub struct ButtonLatch {
    pressed: Signal<CriticalSectionRawMutex, ()>,
}

impl Default for ButtonLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonLatch {
    pub const fn new() -> Self {
        Self {
            pressed: Signal::new(),
        }
    }

    /// Record an edge. Presses arriving before the next tick collapse into one.
    pub fn press(&self) {
        self.pressed.signal(());
    }

    /// Drain the pending press, if any.
    pub fn take(&self) -> bool {
        self.pressed.try_take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pressed.signaled()
    }
}
