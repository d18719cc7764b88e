//! The dinosaur: fixed column, one-shot jump, two-frame walk cycle.

use crate::{
    config::{
        PLAYER_COLUMN,
        Position,
    },
    glyph::Glyph,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Jump {
    Grounded,
    Jumping,
}

/// Walk animation frame. Cosmetic only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Facing {
    Left,
    Right,
}

#[derive(Clone, Debug)]
pub struct Player {
    jump: Jump,
    facing: Facing,
    collision_point: Option<Position>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub const fn new() -> Self {
        Self {
            jump: Jump::Grounded,
            facing: Facing::Left,
            collision_point: None,
        }
    }

    /// Fresh round: grounded, no collision on record. Facing carries over.
    pub fn reset(&mut self) {
        self.jump = Jump::Grounded;
        self.collision_point = None;
    }

    pub const fn jump(&self) -> Jump {
        self.jump
    }

    pub const fn facing(&self) -> Facing {
        self.facing
    }

    pub fn request_jump(&mut self) {
        self.jump = Jump::Jumping;
    }

    /// Consume a pending jump. True at most once per request.
    pub fn take_jump(&mut self) -> bool {
        core::mem::replace(&mut self.jump, Jump::Grounded) == Jump::Jumping
    }

    /// True when a tree at `position` is in the player's column. A hit is
    /// remembered as the collision point.
    pub fn check_collision(&mut self, position: Position) -> bool {
        let hit = position == PLAYER_COLUMN;
        if hit {
            self.collision_point = Some(position);
        }
        hit
    }

    pub const fn collision_point(&self) -> Option<Position> {
        self.collision_point
    }

    /// Glyph for this frame; flips facing for the next one.
    pub fn next_glyph(&mut self) -> Glyph {
        match self.facing {
            Facing::Left => {
                self.facing = Facing::Right;
                Glyph::DinoLeft
            }
            Facing::Right => {
                self.facing = Facing::Left;
                Glyph::DinoRight
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_is_one_shot() {
        let mut player = Player::new();
        assert!(!player.take_jump());
        player.request_jump();
        player.request_jump();
        assert_eq!(player.jump(), Jump::Jumping);
        assert!(player.take_jump());
        assert!(!player.take_jump());
        assert_eq!(player.jump(), Jump::Grounded);
    }

    #[test]
    fn collision_only_in_player_column() {
        let mut player = Player::new();
        for p in [-1, 0, 1, 3, 15] {
            assert!(!player.check_collision(p));
        }
        assert_eq!(player.collision_point(), None);
        assert!(player.check_collision(PLAYER_COLUMN));
        assert_eq!(player.collision_point(), Some(PLAYER_COLUMN));
    }

    #[test]
    fn walk_cycle_alternates_starting_left() {
        let mut player = Player::new();
        assert_eq!(player.next_glyph(), Glyph::DinoLeft);
        assert_eq!(player.next_glyph(), Glyph::DinoRight);
        assert_eq!(player.next_glyph(), Glyph::DinoLeft);
    }

    #[test]
    fn reset_forgets_jump_and_collision() {
        let mut player = Player::new();
        player.request_jump();
        player.check_collision(PLAYER_COLUMN);
        player.reset();
        assert_eq!(player.jump(), Jump::Grounded);
        assert_eq!(player.collision_point(), None);
    }
}
