//! Compile-time game configuration.

use embassy_time::Duration;

/// A column on the track. Signed so the respawn check can see `<= 0`.
pub type Position = i16;

// LCD geometry
pub const DISPLAY_WIDTH: u8 = 16;
pub const DISPLAY_HEIGHT: u8 = 2;
pub const DISPLAY_TOP: u8 = 0;
pub const DISPLAY_BOTTOM: u8 = 1;

/// Fixed column of the dinosaur.
pub const PLAYER_COLUMN: Position = 2;

/// Spawn gap range between chain-adjacent trees, `[MIN_GAP, MAX_GAP)`.
pub const MIN_GAP: Position = 4;
pub const MAX_GAP: Position = 12;

/// Number of tree slots on the track.
pub const OBSTACLE_COUNT: usize = 4;

/// Where tree 0 appears when a round starts.
pub const ROUND_START_POSITION: Position = DISPLAY_WIDTH as Position - 1;

/// One simulation tick. Lower is faster.
pub const GAME_SPEED: Duration = Duration::from_millis(300);

pub const PROMPT_START: &str = "Press to start";
pub const PROMPT_AGAIN: [&str; 2] = ["Press Again to", "Play"];

const _: () = assert!(MIN_GAP > 0);
const _: () = assert!(MIN_GAP < MAX_GAP);
const _: () = assert!(PLAYER_COLUMN >= 0 && PLAYER_COLUMN < DISPLAY_WIDTH as Position);
const _: () = assert!(DISPLAY_BOTTOM < DISPLAY_HEIGHT);
