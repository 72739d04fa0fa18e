//! Text screens and scene rendering.
//!
//! Every screen is two lines at most and is drawn with the four
//! [`CharDisplay`] primitives only.
//!
//! | Screen | Top row | Bottom row |
//! |--------|---------|------------|
//! | Welcome | `Welcome.. Press` | `Lft/Rgt to start` |
//! | Countdown | `Starting in...` | digit |
//! | Restart countdown | `Restarting...` | `Start in N` |
//! | Crash | `Car crashed...` | `Score: N` |

use core::fmt::Write;

use heapless::String;

use crate::config::COLS;
use crate::display::{CharDisplay, Row};
use crate::scene::Scene;

pub const WELCOME_TOP: &str = "Welcome.. Press";
pub const WELCOME_BOTTOM: &str = "Lft/Rgt to start";
pub const COUNTDOWN_CAPTION: &str = "Starting in...";
pub const RESTART_CAPTION: &str = "Restarting...";
pub const RESTART_PREFIX: &str = "Start in ";
pub const CRASH_CAPTION: &str = "Car crashed...";
pub const SCORE_PREFIX: &str = "Score: ";

const _: () = assert!(WELCOME_TOP.len() <= COLS);
const _: () = assert!(WELCOME_BOTTOM.len() <= COLS);
const _: () = assert!(CRASH_CAPTION.len() <= COLS);

/// ASCII digit for a countdown value (values above 9 show as 9).
#[inline]
const fn digit_char(digit: u8) -> u8 { b'0' + if digit > 9 { 9 } else { digit } }

/// Render a score as decimal text.
pub fn format_score(score: u32) -> String<COLS> {
    let mut text: String<COLS> = String::new();
    // u32::MAX is ten digits, always fits
    let _ = write!(text, "{score}");
    text
}

/// Title screen shown while waiting for LEFT or RIGHT.
pub fn draw_welcome<D: CharDisplay>(display: &mut D) -> Result<(), D::Error> {
    display.clear()?;
    display.write_str(WELCOME_TOP)?;
    display.set_cursor(Row::Bottom)?;
    display.write_str(WELCOME_BOTTOM)
}

/// One step of the initial countdown.
pub fn draw_countdown<D: CharDisplay>(
    display: &mut D,
    digit: u8,
) -> Result<(), D::Error> {
    display.clear()?;
    display.write_str(COUNTDOWN_CAPTION)?;
    display.set_cursor(Row::Bottom)?;
    display.write_char(digit_char(digit))
}

/// One step of the countdown after a crash.
pub fn draw_restart_countdown<D: CharDisplay>(
    display: &mut D,
    digit: u8,
) -> Result<(), D::Error> {
    display.clear()?;
    display.write_str(RESTART_CAPTION)?;
    display.set_cursor(Row::Bottom)?;
    display.write_str(RESTART_PREFIX)?;
    display.write_char(digit_char(digit))
}

/// Crash message with the survival score.
pub fn draw_death<D: CharDisplay>(
    display: &mut D,
    score: u32,
) -> Result<(), D::Error> {
    display.clear()?;
    display.write_str(CRASH_CAPTION)?;
    display.set_cursor(Row::Bottom)?;
    display.write_str(SCORE_PREFIX)?;
    display.write_str(&format_score(score))
}

/// Write all 32 grid cells, one row at a time.
pub fn render_scene<D: CharDisplay>(
    display: &mut D,
    scene: &Scene,
) -> Result<(), D::Error> {
    for (row, cells) in Row::ALL.iter().zip(scene.rows()) {
        display.set_cursor(*row)?;
        for cell in cells {
            display.write_char(cell.symbol())?;
        }
    }
    Ok(())
}
