//! Custom 5x8 character glyphs.
//!
//! Each bitmap row uses the low five bits, bit 4 being the leftmost dot,
//! the same layout as HD44780 CGRAM.

use crate::lcd::CharDisplay;

/// Custom characters uploaded at startup. The discriminant is the CGRAM slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Glyph {
    Tree = 0,
    DinoRight = 1,
    DinoLeft = 2,
}

pub type Bitmap = [u8; 8];

pub const TREE: Bitmap = [
    0b00100, 0b00101, 0b00101, 0b10101, 0b10110, 0b01100, 0b00100, 0b00100,
];

pub const DINO_RIGHT: Bitmap = [
    0b00111, 0b00100, 0b00111, 0b00100, 0b00100, 0b01100, 0b10010, 0b00010,
];

pub const DINO_LEFT: Bitmap = [
    0b00111, 0b00100, 0b00111, 0b00100, 0b00100, 0b01100, 0b10010, 0b10000,
];

impl Glyph {
    pub const ALL: [Self; 3] = [Self::Tree, Self::DinoRight, Self::DinoLeft];

    pub const fn slot(self) -> u8 {
        self as u8
    }

    pub const fn bitmap(self) -> &'static Bitmap {
        match self {
            Self::Tree => &TREE,
            Self::DinoRight => &DINO_RIGHT,
            Self::DinoLeft => &DINO_LEFT,
        }
    }
}

/// Upload every game glyph to the display. Call once after power-on.
pub fn register_glyphs<D: CharDisplay>(display: &mut D) -> Result<(), D::Error> {
    for glyph in Glyph::ALL {
        display.create_glyph(glyph, glyph.bitmap())?;
    }
    Ok(())
}
