//! The character LCD the game draws on.
//!
//! [`CharDisplay`] is the whole surface the game needs: clear, move the
//! cursor, write a custom glyph, print text. Writes advance the cursor one
//! column per character and anything landing outside the 16x2 grid is
//! dropped, like on an HD44780.

use core::{
    convert::Infallible,
    fmt,
};

use crate::{
    config::{
        DISPLAY_HEIGHT,
        DISPLAY_WIDTH,
    },
    glyph::{
        Bitmap,
        Glyph,
    },
};

pub trait CharDisplay {
    type Error;

    /// Blank every cell and home the cursor.
    fn clear(&mut self) -> Result<(), Self::Error>;

    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), Self::Error>;

    /// Write a custom glyph at the cursor and advance it.
    fn write_glyph(&mut self, glyph: Glyph) -> Result<(), Self::Error>;

    /// Write text at the cursor and advance past it.
    fn print(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Store a bitmap in the glyph's character-generator slot.
    fn create_glyph(&mut self, glyph: Glyph, bitmap: &Bitmap) -> Result<(), Self::Error>;

    /// Print formatted text without allocating.
    fn print_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        let mut writer = Writer {
            display: self,
            error: None,
        };
        match fmt::write(&mut writer, args) {
            Ok(()) => Ok(()),
            Err(fmt::Error) => writer.error.map_or(Ok(()), Err),
        }
    }
}

struct Writer<'a, D: CharDisplay> {
    display: &'a mut D,
    error: Option<D::Error>,
}

impl<D: CharDisplay> fmt::Write for Writer<'_, D> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.display.print(s).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}

/// Contents of one character cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cell {
    #[default]
    Blank,
    Glyph(Glyph),
    Char(char),
}

impl Cell {
    /// Best-effort ASCII rendering, for logs and test assertions.
    pub const fn to_ascii(self) -> char {
        match self {
            Self::Blank => ' ',
            Self::Glyph(Glyph::Tree) => '^',
            Self::Glyph(Glyph::DinoRight | Glyph::DinoLeft) => 'D',
            Self::Char(ch) => ch,
        }
    }
}

const COLUMNS: usize = DISPLAY_WIDTH as usize;
const ROWS: usize = DISPLAY_HEIGHT as usize;

/// In-memory 16x2 display. Never fails.
///
/// Mirrors what a real panel would show, cell by cell. Useful headless and
/// as the display in tests.
#[derive(Clone, Debug, Default)]
pub struct ShadowLcd {
    cells: [[Cell; COLUMNS]; ROWS],
    cursor: (u8, u8),
    clears: u32,
}

impl ShadowLcd {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, column: u8, row: u8) -> Cell {
        self.cells
            .get(usize::from(row))
            .and_then(|r| r.get(usize::from(column)))
            .copied()
            .unwrap_or_default()
    }

    pub fn row(&self, row: u8) -> &[Cell; COLUMNS] {
        &self.cells[usize::from(row).min(ROWS - 1)]
    }

    /// Columns holding `glyph` on the given row, left to right.
    pub fn glyph_columns(&self, glyph: Glyph, row: u8) -> impl Iterator<Item = u8> + '_ {
        (0..DISPLAY_WIDTH).filter(move |&c| self.cell(c, row) == Cell::Glyph(glyph))
    }

    /// Number of `clear()` calls so far.
    pub const fn clears(&self) -> u32 {
        self.clears
    }

    pub const fn cursor(&self) -> (u8, u8) {
        self.cursor
    }

    fn put(&mut self, cell: Cell) {
        let (column, row) = self.cursor;
        if let Some(slot) = self
            .cells
            .get_mut(usize::from(row))
            .and_then(|r| r.get_mut(usize::from(column)))
        {
            *slot = cell;
        }
        self.cursor.0 = column.saturating_add(1);
    }
}

impl CharDisplay for ShadowLcd {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Infallible> {
        self.cells = [[Cell::Blank; COLUMNS]; ROWS];
        self.cursor = (0, 0);
        self.clears += 1;
        Ok(())
    }

    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), Infallible> {
        self.cursor = (column, row);
        Ok(())
    }

    fn write_glyph(&mut self, glyph: Glyph) -> Result<(), Infallible> {
        self.put(Cell::Glyph(glyph));
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), Infallible> {
        for ch in text.chars() {
            self.put(Cell::Char(ch));
        }
        Ok(())
    }

    fn create_glyph(&mut self, _glyph: Glyph, _bitmap: &Bitmap) -> Result<(), Infallible> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lcd: &ShadowLcd, row: u8) -> String {
        let s: String = lcd.row(row).iter().map(|c| c.to_ascii()).collect();
        s.trim_end().to_owned()
    }

    #[test]
    fn print_advances_cursor_and_clips_at_the_edge() {
        let mut lcd = ShadowLcd::new();
        lcd.set_cursor(10, 1).unwrap();
        lcd.print("abcdefghij").unwrap();
        assert_eq!(text(&lcd, 1), "          abcdef");
        assert_eq!(lcd.cursor(), (20, 1));
        assert_eq!(text(&lcd, 0), "");
    }

    #[test]
    fn writes_to_a_missing_row_are_dropped() {
        let mut lcd = ShadowLcd::new();
        lcd.set_cursor(0, 5).unwrap();
        lcd.write_glyph(Glyph::Tree).unwrap();
        assert!((0..DISPLAY_HEIGHT).all(|r| lcd.row(r).iter().all(|c| *c == Cell::Blank)));
    }

    #[test]
    fn clear_blanks_and_homes() {
        let mut lcd = ShadowLcd::new();
        lcd.set_cursor(3, 1).unwrap();
        lcd.write_glyph(Glyph::DinoLeft).unwrap();
        lcd.clear().unwrap();
        assert_eq!(lcd.cell(3, 1), Cell::Blank);
        assert_eq!(lcd.cursor(), (0, 0));
        assert_eq!(lcd.clears(), 1);
    }

    #[test]
    fn print_fmt_formats_numbers() {
        let mut lcd = ShadowLcd::new();
        lcd.print_fmt(format_args!("Score: {}", 1234)).unwrap();
        assert_eq!(text(&lcd, 0), "Score: 1234");
    }

    struct Broken;

    impl CharDisplay for Broken {
        type Error = &'static str;

        fn clear(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }

        fn set_cursor(&mut self, _: u8, _: u8) -> Result<(), Self::Error> {
            Ok(())
        }

        fn write_glyph(&mut self, _: Glyph) -> Result<(), Self::Error> {
            Ok(())
        }

        fn print(&mut self, _: &str) -> Result<(), Self::Error> {
            Err("bus fault")
        }

        fn create_glyph(&mut self, _: Glyph, _: &Bitmap) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn print_fmt_surfaces_the_display_error() {
        assert_eq!(Broken.print_fmt(format_args!("{}", 7)), Err("bus fault"));
    }
}
