//! Frame clock and difficulty ramp.
//!
//! A frame tick fires once at least `frame_step_ms` milliseconds have passed
//! since the previous tick. Ticks can arrive late if the loop is delayed but
//! never closer together than the current step. Every [`FRAMES_PER_SPEEDUP`]
//! ticks the step shrinks by [`FRAME_STEP_DECREMENT_MS`] until it reaches
//! [`MIN_FRAME_STEP_MS`]:
//!
//! ```text
//! ticks:  0..9   10..19  20..29  30..39  40..49  50..
//! step:   300    280     260     240     220     200
//! ```

use crate::config::{FRAME_STEP_DECREMENT_MS, FRAMES_PER_SPEEDUP, INITIAL_FRAME_STEP_MS, MIN_FRAME_STEP_MS};

/// Frame pacing state of one session.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FrameClock {
    frame_step_ms: u64,
    prev_frame_ms: u64,
    total_frames: u32,
}

impl FrameClock {
    /// Clock at the start of a session: slowest step, no frames yet.
    pub const fn new() -> Self {
        Self {
            frame_step_ms: INITIAL_FRAME_STEP_MS,
            prev_frame_ms: 0,
            total_frames: 0,
        }
    }

    /// Restore the session start values.
    pub fn reset(&mut self) { *self = Self::new(); }

    /// Check whether a frame tick is due at `now_ms`.
    ///
    /// Returns `true` once per tick and records the tick.
    pub fn poll(
        &mut self,
        now_ms: u64,
    ) -> bool {
        if now_ms.saturating_sub(self.prev_frame_ms) < self.frame_step_ms {
            return false;
        }

        self.prev_frame_ms = now_ms;
        self.total_frames = self.total_frames.wrapping_add(1);
        if self.total_frames.is_multiple_of(FRAMES_PER_SPEEDUP) && self.frame_step_ms > MIN_FRAME_STEP_MS {
            self.frame_step_ms = self
                .frame_step_ms
                .saturating_sub(FRAME_STEP_DECREMENT_MS)
                .max(MIN_FRAME_STEP_MS);
        }
        true
    }

    /// Current minimum spacing between ticks.
    #[inline]
    pub const fn frame_step_ms(&self) -> u64 { self.frame_step_ms }

    /// Timestamp of the last tick (0 before the first one).
    #[inline]
    pub const fn prev_frame_ms(&self) -> u64 { self.prev_frame_ms }

    /// Ticks since the session started.
    #[inline]
    pub const fn total_frames(&self) -> u32 { self.total_frames }
}

impl Default for FrameClock {
    fn default() -> Self { Self::new() }
}
