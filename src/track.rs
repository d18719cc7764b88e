//! The four scrolling trees.
//!
//! Slots form a cycle: slot `i` respawns ahead of slot `i - 1` (slot 0 ahead
//! of slot 3), so the trees keep their order and spacing forever.

use crate::{
    config::{
        DISPLAY_WIDTH,
        OBSTACLE_COUNT,
        Position,
        ROUND_START_POSITION,
    },
    spawner::Spawner,
};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ObstacleTrack {
    positions: [Position; OBSTACLE_COUNT],
}

impl Default for ObstacleTrack {
    fn default() -> Self {
        Self::new()
    }
}

impl ObstacleTrack {
    pub const fn new() -> Self {
        Self {
            positions: [0; OBSTACLE_COUNT],
        }
    }

    const fn predecessor(slot: usize) -> usize {
        (slot + OBSTACLE_COUNT - 1) % OBSTACLE_COUNT
    }

    /// Round-start layout: tree 0 at the right edge, the rest chained behind it.
    pub fn reset(&mut self, spawner: &mut Spawner) {
        self.positions[0] = ROUND_START_POSITION;
        for slot in 1..OBSTACLE_COUNT {
            self.positions[slot] = spawner.spawn(self.positions[slot - 1]);
        }
    }

    /// Scroll every tree one column left, respawning any that has expired.
    ///
    /// Slots are processed in order, so a respawn reads its predecessor's
    /// value from this same tick when the predecessor comes earlier.
    /// Returns how many trees respawned.
    pub fn advance(&mut self, spawner: &mut Spawner) -> usize {
        let mut respawned = 0;
        for slot in 0..OBSTACLE_COUNT {
            if self.positions[slot] <= 0 {
                let ahead = self.positions[Self::predecessor(slot)];
                self.positions[slot] = spawner.spawn(ahead);
                respawned += 1;
                debug!("tree {} respawned at {}", slot, self.positions[slot]);
            } else {
                self.positions[slot] -= 1;
            }
        }
        respawned
    }

    pub const fn positions(&self) -> &[Position; OBSTACLE_COUNT] {
        &self.positions
    }

    /// Columns of the trees currently on screen. Trees still off to the
    /// right are skipped, not clamped.
    pub fn visible_columns(&self) -> impl Iterator<Item = u8> + '_ {
        self.positions
            .iter()
            .filter(|&&p| (0..DISPLAY_WIDTH as Position).contains(&p))
            .map(|&p| p as u8)
    }

    #[cfg(test)]
    pub(crate) fn set(&mut self, positions: [Position; OBSTACLE_COUNT]) {
        self.positions = positions;
    }
}
