//! Board configuration.
//!
//! Pin mapping (Raspberry Pi Pico 2):
//! - DOWN button: GPIO2 (falling edge, pull-up)
//! - UP button: GPIO3 (falling edge, pull-up)
//! - RIGHT button: GPIO6 (polled, pull-up)
//! - LEFT button: GPIO7 (polled, pull-up)
//! - LCD SDA: GPIO4 (I2C0)
//! - LCD SCL: GPIO5 (I2C0)

// =============================================================================
// LCD
// =============================================================================

/// 7-bit I2C address of the PCF8574 LCD backpack.
#[cfg(not(feature = "pcf8574a"))]
pub const LCD_I2C_ADDRESS: u8 = 0x27;

/// 7-bit I2C address of the PCF8574A LCD backpack.
#[cfg(feature = "pcf8574a")]
pub const LCD_I2C_ADDRESS: u8 = 0x3F;

/// I2C clock. The PCF8574 is specified up to 100 kHz.
pub const I2C_FREQUENCY_HZ: u32 = 100_000;

const _: () = assert!(LCD_I2C_ADDRESS < 0x80, "I2C addresses are 7-bit");

// =============================================================================
// Buttons
// =============================================================================

/// Time a move button must stay low after its falling edge to count.
pub const DEBOUNCE_MS: u64 = 20;

const _: () = assert!(DEBOUNCE_MS < mini_car_game::config::MIN_FRAME_STEP_MS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_backpack_address() {
        if cfg!(feature = "pcf8574a") {
            assert_eq!(LCD_I2C_ADDRESS, 0x3F);
        } else {
            assert_eq!(LCD_I2C_ADDRESS, 0x27);
        }
    }
}
