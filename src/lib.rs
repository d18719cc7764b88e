//! # lcd-dino
//!
//! Jump-the-trees dinosaur game for a 16x2 character LCD, driven by a
//! single button.
//!
//! The game core is hardware independent and runs anywhere:
//! - **Game**: the state machine, ticked once per [`config::GAME_SPEED`]
//! - **ObstacleTrack** / **Spawner**: four trees scrolling left, respawned
//!   ahead of each other at random gaps
//! - **Player**: fixed column, one-shot jump, collision check
//! - **ButtonLatch**: one-slot mailbox from the button to the tick
//! - **GameOverAnimation**: the end-of-round frames with their hold times
//! - **CharDisplay**: the LCD surface; [`CharLcd`] emulates one on any
//!   `Rgb565` pixel display, [`ShadowLcd`] keeps one in memory
//!
//! With the `board` feature the crate also brings up the Disobey 2026
//! badge (ESP32-S3, ST7789, buttons) and builds the `dino` firmware.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! static BUTTON: ButtonLatch = ButtonLatch::new();
//!
//! let mut lcd = CharLcd::new(screen);
//! register_glyphs(&mut lcd)?;
//! let mut game = Game::new(seed);
//! loop {
//!     game.tick(&BUTTON, &mut lcd)?;
//!     if let Some(animation) = game.game_over_animation() {
//!         for step in animation {
//!             step.frame.draw(&mut lcd)?;
//!             Timer::after(step.hold).await;
//!         }
//!         game.finish_round();
//!     }
//!     Timer::after(GAME_SPEED).await;
//! }
//! ```

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
mod emulator;
mod game;
mod game_over;
mod glyph;
mod latch;
mod lcd;
mod player;
mod spawner;
mod track;

#[cfg(feature = "board")]
mod backlight;
#[cfg(feature = "board")]
mod board;
#[cfg(feature = "board")]
mod buttons;
#[cfg(feature = "board")]
mod display;

pub use emulator::CharLcd;
pub use game::{
    Game,
    GameState,
};
pub use game_over::{
    AnimationStep,
    Frame,
    GameOverAnimation,
    RoundResult,
};
pub use glyph::{
    Bitmap,
    Glyph,
    register_glyphs,
};
pub use latch::ButtonLatch;
pub use lcd::{
    Cell,
    CharDisplay,
    ShadowLcd,
};
pub use player::{
    Facing,
    Jump,
    Player,
};
pub use spawner::{
    Rng,
    Spawner,
};
pub use track::ObstacleTrack;

#[cfg(feature = "board")]
pub use backlight::Backlight;
#[cfg(feature = "board")]
pub use board::*;
#[cfg(feature = "board")]
pub use buttons::JumpButton;
#[cfg(feature = "board")]
pub use display::{
    BadgeLcd,
    Screen,
};
