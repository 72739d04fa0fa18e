//! Mini car game firmware library - testable modules for the Pico 2 build.
//!
//! This library contains the board configuration and the LCD driver, both of
//! which can be tested on the host machine. The binary (`main.rs`) uses this
//! library and adds the embedded-specific code.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p mini-car-game-pico2 --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test -p mini-car-game-pico2 --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]

// === Pure logic modules (testable on host, no ARM dependencies) ===

// Configuration
pub mod config;

// Drivers
pub mod lcd;

pub use lcd::Hd44780I2c;
