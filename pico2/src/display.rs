//! I2C configuration for the 16x2 LCD backpack.
//!
//! Pin mapping:
//! - SDA: GPIO4 (I2C0)
//! - SCL: GPIO5 (I2C0)
//! - VCC: VBUS (5V, most backpacks need it for contrast)

use embassy_rp::i2c::Config as I2cConfig;

use crate::config::I2C_FREQUENCY_HZ;

/// I2C configuration for the PCF8574 backpack.
pub fn lcd_i2c_config() -> I2cConfig {
    let mut config = I2cConfig::default();
    config.frequency = I2C_FREQUENCY_HZ;
    config
}
