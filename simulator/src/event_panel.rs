//! Event log terminal below the LCD panel.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use mini_car_game::event_log::{EVENT_LOG_SIZE, EventLog};

use crate::lcd_panel::{PANEL_HEIGHT, PANEL_WIDTH};
use crate::styles::{LOG_BG, LOG_PROMPT_STYLE, LOG_TEXT_STYLE};

const LOG_X: i32 = 4;
const LOG_LINE_HEIGHT: i32 = 12;
const LOG_FIRST_BASELINE: i32 = PANEL_HEIGHT as i32 + 12;

/// Height of the terminal: one line per entry plus the prompt line.
pub const LOG_HEIGHT: u32 = (EVENT_LOG_SIZE as u32 + 1) * LOG_LINE_HEIGHT as u32 + 8;

/// Total window height.
pub const SCREEN_HEIGHT: u32 = PANEL_HEIGHT + LOG_HEIGHT;

/// Total window width.
pub const SCREEN_WIDTH: u32 = PANEL_WIDTH;

/// Draw the log, oldest entry first, followed by an idle prompt.
pub fn draw_event_log<D>(
    display: &mut D,
    log: &EventLog,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(Point::new(0, PANEL_HEIGHT as i32), Size::new(SCREEN_WIDTH, LOG_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(LOG_BG))
        .draw(display)?;

    let mut y = LOG_FIRST_BASELINE;

    for line in log.iter() {
        Text::new(">", Point::new(LOG_X, y), LOG_PROMPT_STYLE).draw(display)?;
        Text::new(line, Point::new(LOG_X + 10, y), LOG_TEXT_STYLE).draw(display)?;
        y += LOG_LINE_HEIGHT;
    }

    Text::new("> _", Point::new(LOG_X, y), LOG_PROMPT_STYLE).draw(display)?;

    Ok(())
}
