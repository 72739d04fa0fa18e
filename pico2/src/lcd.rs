//! HD44780 character LCD behind a PCF8574 I2C backpack.
//!
//! The controller runs in 4-bit mode. Each expander byte carries one nibble on
//! P4..P7 plus the control lines:
//!
//! | Bit | Signal    |
//! |-----|-----------|
//! | P0  | RS        |
//! | P1  | RW        |
//! | P2  | EN        |
//! | P3  | Backlight |
//! | P4  | D4        |
//! | P5  | D5        |
//! | P6  | D6        |
//! | P7  | D7        |
//!
//! A full byte (two nibbles, each with an enable pulse) goes out as a single
//! 4-byte I2C write. At 100 kHz one expander byte takes ~90 us, which covers
//! both the enable pulse width and the 37 us execution time of most commands.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use mini_car_game::display::{CharDisplay, Row};

// =============================================================================
// Expander bits
// =============================================================================

const RS: u8 = 0x01;
const EN: u8 = 0x04;
const BACKLIGHT: u8 = 0x08;

// =============================================================================
// HD44780 commands
// =============================================================================

const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE_INCREMENT: u8 = 0x06;
const CMD_DISPLAY_ON: u8 = 0x0C;
const CMD_FUNCTION_SET_4BIT_2LINE: u8 = 0x28;

/// Clear and home need far longer than other commands.
const CLEAR_DELAY_US: u32 = 2_000;

/// Controller power-up time before it accepts the reset sequence.
const POWER_UP_DELAY_MS: u32 = 50;

/// Which register a byte goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Register {
    Command,
    Data,
}

impl Register {
    #[inline]
    const fn bits(self) -> u8 {
        match self {
            Self::Command => 0,
            Self::Data => RS,
        }
    }
}

/// HD44780 driver over a PCF8574 expander.
pub struct Hd44780I2c<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
}

impl<I2C, D> Hd44780I2c<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a driver. Call [`init`](Self::init) before writing.
    pub const fn new(
        i2c: I2C,
        delay: D,
        address: u8,
    ) -> Self {
        Self {
            i2c,
            delay,
            address,
        }
    }

    /// Run the 4-bit reset sequence and configure a 2-line display with the
    /// cursor hidden.
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        self.delay.delay_ms(POWER_UP_DELAY_MS);
        self.write_expander(&[Self::control_bits(Register::Command)])?;

        // Force 8-bit mode three times, then switch to 4-bit
        self.write_nibble(0x30)?;
        self.delay.delay_us(4_500);
        self.write_nibble(0x30)?;
        self.delay.delay_us(150);
        self.write_nibble(0x30)?;
        self.delay.delay_us(150);
        self.write_nibble(0x20)?;
        self.delay.delay_us(150);

        self.command(CMD_FUNCTION_SET_4BIT_2LINE)?;
        self.command(CMD_DISPLAY_ON)?;
        self.clear_display()?;
        self.command(CMD_ENTRY_MODE_INCREMENT)
    }

    /// 7-bit I2C address of the backpack.
    #[inline]
    pub const fn address(&self) -> u8 { self.address }

    /// Send a raw command byte.
    pub fn command(
        &mut self,
        cmd: u8,
    ) -> Result<(), I2C::Error> {
        self.send(cmd, Register::Command)
    }

    /// Give back the bus and delay.
    pub fn release(self) -> (I2C, D) { (self.i2c, self.delay) }

    fn clear_display(&mut self) -> Result<(), I2C::Error> {
        self.command(CMD_CLEAR)?;
        self.delay.delay_us(CLEAR_DELAY_US);
        Ok(())
    }

    /// Backlight stays on for every expander write.
    #[inline]
    const fn control_bits(register: Register) -> u8 { BACKLIGHT | register.bits() }

    /// Latch the high nibble of `value` as a command nibble (reset sequence only).
    fn write_nibble(
        &mut self,
        value: u8,
    ) -> Result<(), I2C::Error> {
        let byte = (value & 0xF0) | Self::control_bits(Register::Command);
        self.write_expander(&[byte | EN, byte])
    }

    fn send(
        &mut self,
        value: u8,
        register: Register,
    ) -> Result<(), I2C::Error> {
        let bits = Self::control_bits(register);
        let high = (value & 0xF0) | bits;
        let low = ((value << 4) & 0xF0) | bits;
        self.write_expander(&[high | EN, high, low | EN, low])
    }

    #[inline]
    fn write_expander(
        &mut self,
        bytes: &[u8],
    ) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, bytes)
    }
}

impl<I2C, D> CharDisplay for Hd44780I2c<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    type Error = I2C::Error;

    fn clear(&mut self) -> Result<(), Self::Error> { self.clear_display() }

    fn set_cursor(
        &mut self,
        row: Row,
    ) -> Result<(), Self::Error> {
        self.command(row.set_ddram_command())
    }

    fn write_char(
        &mut self,
        c: u8,
    ) -> Result<(), Self::Error> {
        self.send(c, Register::Data)
    }
}

#[cfg(test)]
mod tests {
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};

    use super::*;

    /// Records every write; optionally fails all transactions.
    #[derive(Default)]
    struct RecordingBus {
        writes: Vec<(u8, Vec<u8>)>,
        fail: bool,
    }

    #[derive(Debug, PartialEq)]
    struct BusError;

    impl embedded_hal::i2c::Error for BusError {
        fn kind(&self) -> ErrorKind { ErrorKind::Bus }
    }

    impl ErrorType for RecordingBus {
        type Error = BusError;
    }

    impl I2c for RecordingBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(BusError);
            }
            for op in operations {
                if let Operation::Write(bytes) = op {
                    self.writes.push((address, bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    /// Sums requested delays instead of sleeping.
    #[derive(Default)]
    struct CountingDelay {
        total_ns: u64,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(
            &mut self,
            ns: u32,
        ) {
            self.total_ns += u64::from(ns);
        }
    }

    fn lcd() -> Hd44780I2c<RecordingBus, CountingDelay> {
        Hd44780I2c::new(RecordingBus::default(), CountingDelay::default(), 0x27)
    }

    fn writes(lcd: Hd44780I2c<RecordingBus, CountingDelay>) -> Vec<Vec<u8>> {
        let (bus, _) = lcd.release();
        bus.writes.into_iter().map(|(_, bytes)| bytes).collect()
    }

    #[test]
    fn test_write_char_sends_both_nibbles_with_rs() {
        let mut lcd = lcd();
        lcd.write_char(b'A').unwrap();
        // 'A' = 0x41: high nibble 0x4, low nibble 0x1, RS + backlight set
        assert_eq!(writes(lcd), [vec![0x4D, 0x49, 0x1D, 0x19]]);
    }

    #[test]
    fn test_set_cursor_bottom_row() {
        let mut lcd = lcd();
        lcd.set_cursor(Row::Bottom).unwrap();
        // 0xC0 as a command: RS clear
        assert_eq!(writes(lcd), [vec![0xCC, 0xC8, 0x0C, 0x08]]);
    }

    #[test]
    fn test_set_cursor_top_row() {
        let mut lcd = lcd();
        lcd.set_cursor(Row::Top).unwrap();
        assert_eq!(writes(lcd), [vec![0x8C, 0x88, 0x0C, 0x08]]);
    }

    #[test]
    fn test_clear_waits_for_controller() {
        let mut lcd = lcd();
        lcd.clear().unwrap();
        let (bus, delay) = lcd.release();
        assert_eq!(bus.writes[0].1, vec![0x0C, 0x08, 0x1C, 0x18]);
        assert!(delay.total_ns >= u64::from(CLEAR_DELAY_US) * 1_000);
    }

    #[test]
    fn test_all_writes_use_configured_address() {
        let mut lcd = Hd44780I2c::new(RecordingBus::default(), CountingDelay::default(), 0x3F);
        lcd.init().unwrap();
        lcd.write_str("Hi").unwrap();
        let (bus, _) = lcd.release();
        assert!(bus.writes.iter().all(|(addr, _)| *addr == 0x3F));
    }

    #[test]
    fn test_init_sequence() {
        let mut lcd = lcd();
        lcd.init().unwrap();
        let writes = writes(lcd);

        // Expander idle state, then the 8-bit reset nibbles and 4-bit switch
        assert_eq!(writes[0], vec![0x08]);
        assert_eq!(writes[1], vec![0x3C, 0x38]);
        assert_eq!(writes[2], vec![0x3C, 0x38]);
        assert_eq!(writes[3], vec![0x3C, 0x38]);
        assert_eq!(writes[4], vec![0x2C, 0x28]);

        // Function set, display on, clear, entry mode
        assert_eq!(writes[5], vec![0x2C, 0x28, 0x8C, 0x88]);
        assert_eq!(writes[6], vec![0x0C, 0x08, 0xCC, 0xC8]);
        assert_eq!(writes[7], vec![0x0C, 0x08, 0x1C, 0x18]);
        assert_eq!(writes[8], vec![0x0C, 0x08, 0x6C, 0x68]);
        assert_eq!(writes.len(), 9);
    }

    #[test]
    fn test_address_is_kept() {
        let lcd = Hd44780I2c::new(RecordingBus::default(), CountingDelay::default(), 0x3F);
        assert_eq!(lcd.address(), 0x3F);
    }

    #[test]
    fn test_write_str_one_transfer_per_char() {
        let mut lcd = lcd();
        lcd.write_str("Score: 7").unwrap();
        assert_eq!(writes(lcd).len(), 8);
    }

    #[test]
    fn test_bus_error_propagates() {
        let bus = RecordingBus {
            fail: true,
            ..Default::default()
        };
        let mut lcd = Hd44780I2c::new(bus, CountingDelay::default(), 0x27);
        assert_eq!(lcd.write_char(b'O'), Err(BusError));
        assert_eq!(lcd.init(), Err(BusError));
    }
}
