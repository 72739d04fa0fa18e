//! Mini car game engine for a 16x2 character LCD.
//!
//! The player's car sits in the leftmost column and switches between the two
//! rows to dodge obstacles scrolling in from the right. The game speeds up
//! every ten frames until it hits a fixed floor.
//!
//! This crate contains the platform-agnostic game logic shared by the
//! Pico 2 firmware and the desktop simulator:
//!
//! - [`config`]: Grid size, symbols, difficulty ramp and screen timings
//! - [`input`]: Sticky button flags and start button polling
//! - [`clock`]: Frame pacing and speed-up schedule
//! - [`scene`]: Grid model, car controller and collision detection
//! - [`spawn`]: Obstacle generator
//! - [`display`]: Character display trait and an in-memory LCD
//! - [`screens`]: Text screens and scene rendering
//! - [`game`]: State machine tying it all together
//! - [`event_log`]: Ring buffer of recent game events
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests and takes time as plain
//! milliseconds, so it has no dependency on `std::time` or any HAL.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

pub mod clock;
pub mod config;
pub mod display;
pub mod event_log;
pub mod game;
pub mod input;
pub mod scene;
pub mod screens;
pub mod spawn;

// Re-export commonly used items
pub use display::{CharDisplay, Row, TextLcd};
pub use game::{Game, GameEvent, GameState};
pub use input::{InputFlags, MoveButton, StartButtons};
pub use spawn::{Spawn, SpawnSource, XorShift32};
