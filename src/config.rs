//! Game configuration constants.
//!
//! All values are compile-time constants with validation assertions, so a
//! broken difficulty ramp or grid size fails the build instead of the game.

// =============================================================================
// Grid
// =============================================================================

/// Number of display rows (16x2 character LCD).
pub const ROWS: usize = 2;

/// Number of display columns.
pub const COLS: usize = 16;

/// Column the car is pinned to.
pub const CAR_COLUMN: usize = 0;

/// Column where new obstacles appear.
pub const SPAWN_COLUMN: usize = COLS - 1;

const _: () = assert!(ROWS == 2);
const _: () = assert!(CAR_COLUMN + 1 < COLS);

// =============================================================================
// Symbols
// =============================================================================

/// Character drawn for the car.
pub const CAR_SYMBOL: u8 = b'>';

/// Character drawn for an obstacle.
pub const OBSTACLE_SYMBOL: u8 = b'O';

/// Character drawn for an empty cell.
pub const EMPTY_SYMBOL: u8 = b' ';

// =============================================================================
// Difficulty Ramp
// =============================================================================

/// Frame step at the start of every session.
pub const INITIAL_FRAME_STEP_MS: u64 = 300;

/// Fastest frame step the ramp may reach.
pub const MIN_FRAME_STEP_MS: u64 = 200;

/// Amount the frame step shrinks on every speed-up.
pub const FRAME_STEP_DECREMENT_MS: u64 = 20;

/// Frame ticks between two speed-ups.
pub const FRAMES_PER_SPEEDUP: u32 = 10;

const _: () = assert!(MIN_FRAME_STEP_MS < INITIAL_FRAME_STEP_MS);
const _: () = assert!(FRAME_STEP_DECREMENT_MS > 0);
// The ramp must land exactly on the floor
const _: () = assert!((INITIAL_FRAME_STEP_MS - MIN_FRAME_STEP_MS) % FRAME_STEP_DECREMENT_MS == 0);

// =============================================================================
// Screen Timing
// =============================================================================

/// First digit shown by both countdowns (counts down to 0).
pub const COUNTDOWN_FROM: u8 = 3;

/// Duration each countdown digit stays on screen.
pub const COUNTDOWN_STEP_MS: u64 = 1000;

/// Duration the crash screen and score stay on screen.
pub const DEATH_SCREEN_MS: u64 = 3000;

/// Survival time per score point (deciseconds).
pub const SCORE_UNIT_MS: u64 = 100;

/// Sleep between two main loop passes.
pub const LOOP_PERIOD_MS: u64 = 10;

const _: () = assert!(COUNTDOWN_FROM <= 9);
const _: () = assert!(LOOP_PERIOD_MS < MIN_FRAME_STEP_MS);

#[cfg(test)]
#[allow(clippy::assertions_on_constants)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_reaches_floor_in_fifty_frames() {
        let speedups = (INITIAL_FRAME_STEP_MS - MIN_FRAME_STEP_MS) / FRAME_STEP_DECREMENT_MS;
        assert_eq!(speedups * u64::from(FRAMES_PER_SPEEDUP), 50);
    }

    #[test]
    fn test_symbols_are_distinct() {
        assert_ne!(CAR_SYMBOL, OBSTACLE_SYMBOL);
        assert_ne!(CAR_SYMBOL, EMPTY_SYMBOL);
        assert_ne!(OBSTACLE_SYMBOL, EMPTY_SYMBOL);
    }

    #[test]
    fn test_spawn_column_is_rightmost() {
        assert_eq!(SPAWN_COLUMN, 15);
    }
}
