//! Character display abstraction.
//!
//! The game only needs four primitives from the physical LCD: clear, move the
//! cursor to the start of a row, write one character and write a string. The
//! firmware implements [`CharDisplay`] for an HD44780 panel, tests and the
//! simulator use the in-memory [`TextLcd`].

use core::convert::Infallible;

use crate::config::{COLS, EMPTY_SYMBOL, ROWS};

/// One of the two display rows.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Row {
    Top,
    Bottom,
}

impl Row {
    /// Both rows, top first.
    pub const ALL: [Self; ROWS] = [Self::Top, Self::Bottom];

    /// Grid index of this row.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Bottom => 1,
        }
    }

    /// HD44780 DDRAM address of the first character in this row.
    #[inline]
    pub const fn ddram_address(self) -> u8 {
        match self {
            Self::Top => 0x00,
            Self::Bottom => 0x40,
        }
    }

    /// "Set DDRAM address" command byte for the row start (0x80 / 0xC0).
    #[inline]
    pub const fn set_ddram_command(self) -> u8 { 0x80 | self.ddram_address() }
}

/// Minimal command set of a character LCD.
pub trait CharDisplay {
    /// Transport error (I2C bus, GPIO, ...).
    type Error;

    /// Blank the whole display and return the cursor home.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Move the cursor to the first column of `row`.
    fn set_cursor(
        &mut self,
        row: Row,
    ) -> Result<(), Self::Error>;

    /// Write one character at the cursor and advance it.
    fn write_char(
        &mut self,
        c: u8,
    ) -> Result<(), Self::Error>;

    /// Write every byte of `s` at the cursor.
    fn write_str(
        &mut self,
        s: &str,
    ) -> Result<(), Self::Error> {
        for b in s.bytes() {
            self.write_char(b)?;
        }
        Ok(())
    }
}

/// In-memory 16x2 LCD.
///
/// Mirrors what a real panel would show: the cursor auto-increments and
/// characters written past the last column are dropped.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TextLcd {
    cells: [[u8; COLS]; ROWS],
    cursor_row: Row,
    cursor_col: usize,
    clears: u32,
}

impl TextLcd {
    /// Create a blank display with the cursor at the top-left corner.
    pub const fn new() -> Self {
        Self {
            cells: [[EMPTY_SYMBOL; COLS]; ROWS],
            cursor_row: Row::Top,
            cursor_col: 0,
            clears: 0,
        }
    }

    /// Raw characters of one row.
    #[inline]
    pub const fn row(
        &self,
        row: Row,
    ) -> &[u8; COLS] {
        &self.cells[row.index()]
    }

    /// Row contents as text (non-ASCII bytes shown as `?`).
    pub fn row_text(
        &self,
        row: Row,
    ) -> heapless::String<COLS> {
        let mut text = heapless::String::new();
        for &b in self.row(row) {
            let c = if b.is_ascii() { b as char } else { '?' };
            text.push(c).ok();
        }
        text
    }

    /// Row contents with trailing blanks removed.
    pub fn row_trimmed(
        &self,
        row: Row,
    ) -> heapless::String<COLS> {
        let mut text = self.row_text(row);
        while text.ends_with(' ') {
            text.pop();
        }
        text
    }

    /// Number of times the display was cleared.
    #[inline]
    pub const fn clear_count(&self) -> u32 { self.clears }
}

impl Default for TextLcd {
    fn default() -> Self { Self::new() }
}

impl CharDisplay for TextLcd {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.cells = [[EMPTY_SYMBOL; COLS]; ROWS];
        self.cursor_row = Row::Top;
        self.cursor_col = 0;
        self.clears = self.clears.wrapping_add(1);
        Ok(())
    }

    fn set_cursor(
        &mut self,
        row: Row,
    ) -> Result<(), Self::Error> {
        self.cursor_row = row;
        self.cursor_col = 0;
        Ok(())
    }

    fn write_char(
        &mut self,
        c: u8,
    ) -> Result<(), Self::Error> {
        if let Some(cell) = self.cells[self.cursor_row.index()].get_mut(self.cursor_col) {
            *cell = c;
        }
        self.cursor_col = self.cursor_col.saturating_add(1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_addresses() {
        assert_eq!(Row::Top.set_ddram_command(), 0x80);
        assert_eq!(Row::Bottom.set_ddram_command(), 0xC0);
    }

    #[test]
    fn test_write_str_advances_cursor() {
        let mut lcd = TextLcd::new();
        lcd.write_str("AB").unwrap();
        lcd.write_char(b'C').unwrap();
        assert_eq!(lcd.row_trimmed(Row::Top).as_str(), "ABC");
        assert_eq!(lcd.row_trimmed(Row::Bottom).as_str(), "");
    }

    #[test]
    fn test_set_cursor_switches_row() {
        let mut lcd = TextLcd::new();
        lcd.write_str("top").unwrap();
        lcd.set_cursor(Row::Bottom).unwrap();
        lcd.write_str("bottom").unwrap();
        assert_eq!(lcd.row_trimmed(Row::Top).as_str(), "top");
        assert_eq!(lcd.row_trimmed(Row::Bottom).as_str(), "bottom");
    }

    #[test]
    fn test_overflow_is_dropped() {
        let mut lcd = TextLcd::new();
        lcd.write_str("0123456789ABCDEFGHIJ").unwrap();
        assert_eq!(lcd.row_text(Row::Top).as_str(), "0123456789ABCDEF");
        assert_eq!(lcd.row_trimmed(Row::Bottom).as_str(), "", "overflow must not wrap");
    }

    #[test]
    fn test_clear_resets_contents_and_cursor() {
        let mut lcd = TextLcd::new();
        lcd.set_cursor(Row::Bottom).unwrap();
        lcd.write_str("xyz").unwrap();
        lcd.clear().unwrap();
        lcd.write_char(b'!').unwrap();
        assert_eq!(lcd.row_trimmed(Row::Top).as_str(), "!");
        assert_eq!(lcd.row_trimmed(Row::Bottom).as_str(), "");
        assert_eq!(lcd.clear_count(), 1);
    }
}
