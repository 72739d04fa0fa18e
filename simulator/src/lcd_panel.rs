//! Draws a [`TextLcd`] as a 16x2 character panel.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use mini_car_game::config::{COLS, ROWS};
use mini_car_game::{Row, TextLcd};

use crate::styles::{BACKLIGHT, BEZEL, CELL_OFF, LCD_STYLE};

/// Margin between the window edge and the glass.
pub const BEZEL_MARGIN: u32 = 12;

/// Glass padding around the character cells.
pub const GLASS_PADDING: u32 = 6;

pub const CELL_WIDTH: u32 = 14;
pub const CELL_HEIGHT: u32 = 24;
pub const CELL_GAP: u32 = 2;

/// Width of the whole panel including the bezel.
pub const PANEL_WIDTH: u32 =
    2 * (BEZEL_MARGIN + GLASS_PADDING) + COLS as u32 * CELL_WIDTH + (COLS as u32 - 1) * CELL_GAP;

/// Height of the whole panel including the bezel.
pub const PANEL_HEIGHT: u32 =
    2 * (BEZEL_MARGIN + GLASS_PADDING) + ROWS as u32 * CELL_HEIGHT + (ROWS as u32 - 1) * CELL_GAP;

const _: () = assert!(CELL_WIDTH >= 12, "ProFont 18pt glyphs are 12 px wide");

/// Top-left corner of a character cell.
pub fn cell_origin(
    row: Row,
    col: usize,
) -> Point {
    let first = (BEZEL_MARGIN + GLASS_PADDING) as i32;
    Point::new(
        first + (col as u32 * (CELL_WIDTH + CELL_GAP)) as i32,
        first + (row.index() as u32 * (CELL_HEIGHT + CELL_GAP)) as i32,
    )
}

/// Draw the bezel, glass and all 32 character cells.
pub fn draw_lcd<D>(
    display: &mut D,
    lcd: &TextLcd,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(Point::zero(), Size::new(PANEL_WIDTH, PANEL_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(BEZEL))
        .draw(display)?;

    Rectangle::new(
        Point::new(BEZEL_MARGIN as i32, BEZEL_MARGIN as i32),
        Size::new(PANEL_WIDTH - 2 * BEZEL_MARGIN, PANEL_HEIGHT - 2 * BEZEL_MARGIN),
    )
    .into_styled(PrimitiveStyle::with_fill(BACKLIGHT))
    .draw(display)?;

    let cell_style = PrimitiveStyle::with_fill(CELL_OFF);
    for row in Row::ALL {
        for (col, &byte) in lcd.row(row).iter().enumerate() {
            let origin = cell_origin(row, col);
            Rectangle::new(origin, Size::new(CELL_WIDTH, CELL_HEIGHT))
                .into_styled(cell_style)
                .draw(display)?;

            if byte != b' ' {
                let glyph = [byte];
                let text = core::str::from_utf8(&glyph).unwrap_or("?");
                Text::with_baseline(text, origin + Point::new(1, 1), LCD_STYLE, Baseline::Top).draw(display)?;
            }
        }
    }

    Ok(())
}
