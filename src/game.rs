//! The game state machine.
//!
//! ```text
//! FirstStart ──prompt──▶ Idle ──press──▶ Playing ──hit──▶ GameOver ──▶ Idle
//!                                          ▲  │press = jump
//!                                          └──┘
//! ```
//!
//! [`Game::tick`] is called once per [`GAME_SPEED`](crate::config::GAME_SPEED)
//! period by the owner of the display. It drains the button latch, runs one
//! step of whatever the current state does and draws the result.

use crate::{
    config::{
        DISPLAY_BOTTOM,
        DISPLAY_TOP,
        PLAYER_COLUMN,
        PROMPT_START,
    },
    game_over::{
        GameOverAnimation,
        RoundResult,
    },
    glyph::Glyph,
    latch::ButtonLatch,
    lcd::CharDisplay,
    player::Player,
    spawner::Spawner,
    track::ObstacleTrack,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    /// Power-on; shows the prompt once.
    FirstStart,
    /// Waiting for a press to start a round.
    Idle,
    Playing,
    /// Round over; the animation for `RoundResult` is due.
    GameOver(RoundResult),
}

pub struct Game {
    state: GameState,
    track: ObstacleTrack,
    spawner: Spawner,
    player: Player,
    score: u32,
    high_score: u32,
}

impl Game {
    pub const fn new(seed: u32) -> Self {
        Self {
            state: GameState::FirstStart,
            track: ObstacleTrack::new(),
            spawner: Spawner::new(seed),
            player: Player::new(),
            score: 0,
            high_score: 0,
        }
    }

    pub const fn state(&self) -> GameState {
        self.state
    }

    pub const fn score(&self) -> u32 {
        self.score
    }

    pub const fn high_score(&self) -> u32 {
        self.high_score
    }

    pub const fn track(&self) -> &ObstacleTrack {
        &self.track
    }

    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Advance the game by one period.
    ///
    /// A pending press means "jump" while playing and "start a round"
    /// otherwise. The press is left in the latch during `FirstStart` so it
    /// starts the round on the following tick. Reaching `GameOver` here
    /// without having played [`game_over_animation`](Self::game_over_animation)
    /// finishes the round silently.
    pub fn tick<D: CharDisplay>(&mut self, latch: &ButtonLatch, display: &mut D) -> Result<(), D::Error> {
        match self.state {
            GameState::FirstStart => self.show_prompt(display),
            GameState::Idle => {
                if latch.take() {
                    self.start_round();
                }
                Ok(())
            }
            GameState::Playing => {
                if latch.take() {
                    self.player.request_jump();
                }
                self.step(display)
            }
            GameState::GameOver(_) => {
                self.finish_round();
                Ok(())
            }
        }
    }

    fn show_prompt<D: CharDisplay>(&mut self, display: &mut D) -> Result<(), D::Error> {
        display.clear()?;
        display.set_cursor(0, DISPLAY_TOP)?;
        display.print(PROMPT_START)?;
        self.state = GameState::Idle;
        info!("prompt shown, waiting for first press");
        Ok(())
    }

    /// Lay out fresh trees and start playing.
    pub fn start_round(&mut self) {
        self.track.reset(&mut self.spawner);
        self.player.reset();
        self.score = 0;
        self.state = GameState::Playing;
        info!("round started, trees at {}", self.track.positions());
    }

    /// One simulation tick, then the frame for it. The game state is
    /// settled before the display is touched, so a failed draw loses only
    /// the picture.
    fn step<D: CharDisplay>(&mut self, display: &mut D) -> Result<(), D::Error> {
        self.track.advance(&mut self.spawner);

        // A jump clears every tree this tick; collisions are not even tested.
        let jumped = self.player.take_jump();
        if !jumped && self.collides() {
            self.end_round();
            return Ok(());
        }
        self.score = self.score.saturating_add(1);
        let dino = self.player.next_glyph();

        display.clear()?;
        let row = if jumped { DISPLAY_TOP } else { DISPLAY_BOTTOM };
        display.set_cursor(PLAYER_COLUMN as u8, row)?;
        display.write_glyph(dino)?;
        for column in self.track.visible_columns() {
            display.set_cursor(column, DISPLAY_BOTTOM)?;
            display.write_glyph(Glyph::Tree)?;
        }
        Ok(())
    }

    /// Test every tree, in slot order.
    fn collides(&mut self) -> bool {
        let mut hit = false;
        for &position in self.track.positions() {
            hit |= self.player.check_collision(position);
        }
        hit
    }

    fn end_round(&mut self) {
        let collision_point = self.player.collision_point().unwrap_or(PLAYER_COLUMN);
        self.high_score = self.high_score.max(self.score);
        let result = RoundResult {
            score: self.score,
            high_score: self.high_score,
            collision_point,
        };
        self.state = GameState::GameOver(result);
        info!(
            "game over at column {}: score {}, high score {}",
            collision_point, result.score, result.high_score
        );
    }

    /// Frames to play for the round that just ended, if one did.
    pub fn game_over_animation(&self) -> Option<GameOverAnimation> {
        match self.state {
            GameState::GameOver(result) => Some(GameOverAnimation::new(result)),
            _ => None,
        }
    }

    /// Close a finished round: zero the score and go idle.
    pub fn finish_round(&mut self) {
        if !matches!(self.state, GameState::GameOver(_)) {
            warn!("finish_round called in {}", self.state);
            return;
        }
        self.score = 0;
        self.state = GameState::Idle;
        debug!("idle, high score {}", self.high_score);
    }
}
