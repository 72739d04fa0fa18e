//! Colors and text styles for the simulated LCD.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use profont::PROFONT_18_POINT;

// =============================================================================
// Colors
// =============================================================================

/// Area around the panel.
pub const BEZEL: Rgb565 = Rgb565::new(2, 4, 2);

/// Lit backlight behind the glass.
pub const BACKLIGHT: Rgb565 = Rgb565::new(15, 46, 6);

/// Unlit 5x8 character cell.
pub const CELL_OFF: Rgb565 = Rgb565::new(13, 41, 5);

/// Dark pixels of a character.
pub const CELL_INK: Rgb565 = Rgb565::new(2, 10, 2);

/// Event log background.
pub const LOG_BG: Rgb565 = Rgb565::new(1, 2, 1);

pub const LOG_PROMPT: Rgb565 = Rgb565::new(0, 63, 0);

pub const LOG_TEXT: Rgb565 = Rgb565::new(31, 41, 0);

// =============================================================================
// Fonts
// =============================================================================

/// Character font on the LCD.
pub const LCD_FONT: &MonoFont = &PROFONT_18_POINT;

/// Small font for the event log.
pub const LOG_FONT: &MonoFont = &FONT_6X10;

pub const LCD_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LCD_FONT, CELL_INK);

pub const LOG_PROMPT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LOG_FONT, LOG_PROMPT);

pub const LOG_TEXT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LOG_FONT, LOG_TEXT);
