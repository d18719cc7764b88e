//! Game-over sequence as a list of timed frames.
//!
//! The game never sleeps; it hands out [`AnimationStep`]s and the caller
//! draws each one and waits `hold` before asking for the next. Tests walk
//! the frames without any real delay.

use embassy_time::Duration;

use crate::{
    config::{
        DISPLAY_BOTTOM,
        DISPLAY_TOP,
        DISPLAY_WIDTH,
        PLAYER_COLUMN,
        PROMPT_AGAIN,
        Position,
    },
    glyph::Glyph,
    lcd::CharDisplay,
};

/// Snapshot taken the moment the round ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RoundResult {
    pub score: u32,
    /// Already includes this round's score.
    pub high_score: u32,
    pub collision_point: Position,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Frame {
    /// Dino and the tree it ran into, side by side on the bottom row.
    Impact { tree: Position, dino: Position },
    Blank,
    Scores { high_score: u32, score: u32 },
    PlayAgain,
}

impl Frame {
    pub fn draw<D: CharDisplay>(&self, display: &mut D) -> Result<(), D::Error> {
        display.clear()?;
        match *self {
            Self::Impact { tree, dino } => {
                put_glyph(display, tree, Glyph::Tree)?;
                put_glyph(display, dino, Glyph::DinoRight)?;
            }
            Self::Blank => {}
            Self::Scores { high_score, score } => {
                display.set_cursor(0, DISPLAY_TOP)?;
                display.print_fmt(format_args!("High Score: {high_score}"))?;
                display.set_cursor(0, DISPLAY_BOTTOM)?;
                display.print_fmt(format_args!("Score: {score}"))?;
            }
            Self::PlayAgain => {
                for (row, line) in (DISPLAY_TOP..).zip(PROMPT_AGAIN) {
                    display.set_cursor(0, row)?;
                    display.print(line)?;
                }
            }
        }
        Ok(())
    }
}

fn put_glyph<D: CharDisplay>(display: &mut D, column: Position, glyph: Glyph) -> Result<(), D::Error> {
    if !(0..DISPLAY_WIDTH as Position).contains(&column) {
        return Ok(());
    }
    display.set_cursor(column as u8, DISPLAY_BOTTOM)?;
    display.write_glyph(glyph)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationStep {
    pub frame: Frame,
    /// How long the frame stays up before the next step.
    pub hold: Duration,
}

#[derive(Clone, Copy)]
enum Beat {
    /// Dino drawn where the tree hit it.
    Impact,
    /// Dino drawn back in its own column.
    Flash,
    Blank,
    Scores,
    PlayAgain,
}

const SCRIPT: [(Beat, u64); 9] = [
    (Beat::Impact, 300),
    (Beat::Blank, 600),
    (Beat::Flash, 600),
    (Beat::Blank, 500),
    (Beat::Flash, 600),
    (Beat::Blank, 600),
    (Beat::Scores, 1500),
    (Beat::Blank, 400),
    (Beat::PlayAgain, 0),
];

/// Iterator over the game-over frames for one round.
#[derive(Clone, Debug)]
pub struct GameOverAnimation {
    result: RoundResult,
    next: usize,
}

impl GameOverAnimation {
    pub const fn new(result: RoundResult) -> Self {
        Self { result, next: 0 }
    }

    pub const fn result(&self) -> &RoundResult {
        &self.result
    }

    /// Sum of all holds.
    pub fn duration() -> Duration {
        Duration::from_millis(SCRIPT.iter().map(|&(_, ms)| ms).sum())
    }

    fn frame(&self, beat: Beat) -> Frame {
        let tree = self.result.collision_point.saturating_add(1);
        match beat {
            Beat::Impact => Frame::Impact {
                tree,
                dino: self.result.collision_point,
            },
            Beat::Flash => Frame::Impact {
                tree,
                dino: PLAYER_COLUMN,
            },
            Beat::Blank => Frame::Blank,
            Beat::Scores => Frame::Scores {
                high_score: self.result.high_score,
                score: self.result.score,
            },
            Beat::PlayAgain => Frame::PlayAgain,
        }
    }
}

impl Iterator for GameOverAnimation {
    type Item = AnimationStep;

    fn next(&mut self) -> Option<AnimationStep> {
        let &(beat, ms) = SCRIPT.get(self.next)?;
        self.next += 1;
        Some(AnimationStep {
            frame: self.frame(beat),
            hold: Duration::from_millis(ms),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = SCRIPT.len().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for GameOverAnimation {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lcd::ShadowLcd;

    const RESULT: RoundResult = RoundResult {
        score: 12,
        high_score: 40,
        collision_point: 2,
    };

    fn text(lcd: &ShadowLcd, row: u8) -> String {
        let s: String = lcd.row(row).iter().map(|c| c.to_ascii()).collect();
        s.trim_end().to_owned()
    }

    #[test]
    fn script_timing() {
        let holds: Vec<u64> = GameOverAnimation::new(RESULT)
            .map(|step| step.hold.as_millis())
            .collect();
        assert_eq!(holds, [300, 600, 600, 500, 600, 600, 1500, 400, 0]);
        assert_eq!(GameOverAnimation::duration(), Duration::from_millis(5100));
        assert_eq!(GameOverAnimation::new(RESULT).len(), 9);
    }

    #[test]
    fn impact_shows_tree_right_of_the_dino() {
        let mut steps = GameOverAnimation::new(RESULT);
        let first = steps.next().unwrap();
        assert_eq!(first.frame, Frame::Impact { tree: 3, dino: 2 });

        let mut lcd = ShadowLcd::new();
        first.frame.draw(&mut lcd).unwrap();
        assert_eq!(text(&lcd, DISPLAY_BOTTOM), "  D^");
        assert_eq!(lcd.cell(2, DISPLAY_BOTTOM), crate::lcd::Cell::Glyph(Glyph::DinoRight));
    }

    #[test]
    fn impact_is_redrawn_twice_more() {
        let impacts = GameOverAnimation::new(RESULT)
            .filter(|s| matches!(s.frame, Frame::Impact { .. }))
            .count();
        assert_eq!(impacts, 3);
    }

    #[test]
    fn scores_then_prompt() {
        let frames: Vec<Frame> = GameOverAnimation::new(RESULT).map(|s| s.frame).collect();
        assert_eq!(frames[6], Frame::Scores { high_score: 40, score: 12 });
        assert_eq!(frames[8], Frame::PlayAgain);

        let mut lcd = ShadowLcd::new();
        frames[6].draw(&mut lcd).unwrap();
        assert_eq!(text(&lcd, 0), "High Score: 40");
        assert_eq!(text(&lcd, 1), "Score: 12");

        frames[8].draw(&mut lcd).unwrap();
        assert_eq!(text(&lcd, 0), "Press Again to");
        assert_eq!(text(&lcd, 1), "Play");
    }

    #[test]
    fn every_frame_starts_from_a_clean_screen() {
        let mut lcd = ShadowLcd::new();
        for step in GameOverAnimation::new(RESULT) {
            step.frame.draw(&mut lcd).unwrap();
        }
        assert_eq!(lcd.clears(), 9);
    }

    #[test]
    fn off_screen_impact_column_is_skipped() {
        let mut lcd = ShadowLcd::new();
        Frame::Impact { tree: 16, dino: 15 }.draw(&mut lcd).unwrap();
        assert_eq!(lcd.glyph_columns(Glyph::DinoRight, DISPLAY_BOTTOM).collect::<Vec<_>>(), [15]);
        assert_eq!(lcd.glyph_columns(Glyph::Tree, DISPLAY_BOTTOM).count(), 0);
    }
}
