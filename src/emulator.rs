//! 16x2 character LCD emulated on a pixel display.
//!
//! Every cell is a 5x8 dot matrix scaled up to `SCALE` pixels per dot.
//! Custom glyphs are drawn dot by dot from their bitmap; plain text uses an
//! `embedded-graphics` monospace font. Works on any `Rgb565` draw target,
//! in practice the badge's ST7789.

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::FONT_10X20,
    },
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
    text::{
        Baseline,
        Text,
    },
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
    lcd::CharDisplay,
};

const DOT_COLUMNS: u32 = 5;
const DOT_ROWS: u32 = 8;
pub const SCALE: u32 = 3;

pub const CELL_W: u32 = DOT_COLUMNS * SCALE;
pub const CELL_H: u32 = DOT_ROWS * SCALE;
const COLUMN_GAP: u32 = 3;
const ROW_GAP: u32 = 6;

pub const PANEL_W: u32 = DISPLAY_WIDTH as u32 * (CELL_W + COLUMN_GAP) - COLUMN_GAP;
pub const PANEL_H: u32 = DISPLAY_HEIGHT as u32 * (CELL_H + ROW_GAP) - ROW_GAP;

// Yellow-green STN look
pub const BEZEL: Rgb565 = Rgb565::new(12, 34, 2);
pub const UNLIT: Rgb565 = Rgb565::new(16, 44, 3);
pub const INK: Rgb565 = Rgb565::new(2, 8, 4);

const TEXT_OFFSET: Point = Point::new(2, 2);

pub struct CharLcd<D> {
    target: D,
    origin: Point,
    cursor: (u8, u8),
    cgram: [Bitmap; 8],
}

impl<D> CharLcd<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Wrap `target`, centering the panel in its bounding box.
    ///
    /// Nothing is drawn until the first [`clear`](CharDisplay::clear).
    pub fn new(target: D) -> Self {
        let bounds = target.bounding_box();
        let spare_w = bounds.size.width.saturating_sub(PANEL_W) / 2;
        let spare_h = bounds.size.height.saturating_sub(PANEL_H) / 2;
        let origin = bounds.top_left + Point::new(spare_w as i32, spare_h as i32);
        Self {
            target,
            origin,
            cursor: (0, 0),
            cgram: [[0; 8]; 8],
        }
    }

    pub fn release(self) -> D {
        self.target
    }

    pub const fn target(&self) -> &D {
        &self.target
    }

    /// Top-left pixel of the panel.
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Pixel rectangle of a cell, or `None` when off the grid.
    pub fn cell_area(&self, column: u8, row: u8) -> Option<Rectangle> {
        if column >= DISPLAY_WIDTH || row >= DISPLAY_HEIGHT {
            return None;
        }
        let x = u32::from(column) * (CELL_W + COLUMN_GAP);
        let y = u32::from(row) * (CELL_H + ROW_GAP);
        Some(Rectangle::new(
            self.origin + Point::new(x as i32, y as i32),
            Size::new(CELL_W, CELL_H),
        ))
    }

    fn panel_area(&self) -> Rectangle {
        Rectangle::new(self.origin, Size::new(PANEL_W, PANEL_H))
    }

    /// Cell under the cursor, advancing the cursor either way.
    fn next_cell(&mut self) -> Option<Rectangle> {
        let (column, row) = self.cursor;
        self.cursor.0 = column.saturating_add(1);
        self.cell_area(column, row)
    }

    fn draw_dots(&mut self, area: Rectangle, bitmap: Bitmap) -> Result<(), D::Error> {
        let pixels = (0..CELL_H).flat_map(move |py| {
            let row = bitmap[(py / SCALE) as usize];
            (0..CELL_W).map(move |px| {
                let mask = 0b10000 >> (px / SCALE);
                if row & mask != 0 { INK } else { UNLIT }
            })
        });
        self.target.fill_contiguous(&area, pixels)
    }
}

impl<D> CharDisplay for CharLcd<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = D::Error;

    fn clear(&mut self) -> Result<(), D::Error> {
        let panel = self.panel_area();
        self.target.fill_solid(&panel, BEZEL)?;
        for row in 0..DISPLAY_HEIGHT {
            for column in 0..DISPLAY_WIDTH {
                if let Some(cell) = self.cell_area(column, row) {
                    self.target.fill_solid(&cell, UNLIT)?;
                }
            }
        }
        self.cursor = (0, 0);
        Ok(())
    }

    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), D::Error> {
        self.cursor = (column, row);
        Ok(())
    }

    fn write_glyph(&mut self, glyph: Glyph) -> Result<(), D::Error> {
        let Some(area) = self.next_cell() else {
            return Ok(());
        };
        let bitmap = self.cgram[usize::from(glyph.slot())];
        self.draw_dots(area, bitmap)
    }

    fn print(&mut self, text: &str) -> Result<(), D::Error> {
        let style = MonoTextStyle::new(&FONT_10X20, INK);
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            let Some(area) = self.next_cell() else {
                continue;
            };
            self.target.fill_solid(&area, UNLIT)?;
            if ch != ' ' {
                Text::with_baseline(
                    ch.encode_utf8(&mut buf),
                    area.top_left + TEXT_OFFSET,
                    style,
                    Baseline::Top,
                )
                .draw(&mut self.target)?;
            }
        }
        Ok(())
    }

    fn create_glyph(&mut self, glyph: Glyph, bitmap: &Bitmap) -> Result<(), D::Error> {
        self.cgram[usize::from(glyph.slot())] = *bitmap;
        Ok(())
    }
}
