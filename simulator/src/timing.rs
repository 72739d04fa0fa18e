//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the game crate.

use std::time::Duration;

use mini_car_game::config::LOOP_PERIOD_MS;

/// Main loop period, same as the firmware. The loop sleeps if a pass completes early.
pub const LOOP_PERIOD: Duration = Duration::from_millis(LOOP_PERIOD_MS);
