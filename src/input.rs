//! Input capture: sticky button flags and start button polling.
//!
//! The DOWN and UP buttons are edge-triggered. Their handlers only call
//! [`InputFlags::press`]; the main loop is the single consumer and drains each
//! flag with an atomic read-and-clear. A flag is a "pending" marker, not a
//! counter: several presses before the next drain collapse into one move.
//!
//! LEFT and RIGHT are only polled while the game waits for the start gesture,
//! through the [`StartButtons`] trait.
//!
//! # Usage
//!
//! ```ignore
//! static INPUT: InputFlags = InputFlags::new();
//!
//! // edge handler
//! INPUT.press(MoveButton::Down);
//!
//! // main loop
//! if INPUT.take(MoveButton::Down) {
//!     scene.move_down();
//! }
//! ```

use core::sync::atomic::{AtomicBool, Ordering};

/// Buttons that move the car.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveButton {
    /// Move the car to the bottom row.
    Down,
    /// Move the car to the top row.
    Up,
}

/// Single-producer/single-consumer sticky flag.
pub struct ButtonFlag {
    pending: AtomicBool,
}

impl ButtonFlag {
    /// Create a cleared flag.
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Mark the button as pressed. Safe to call from interrupt context.
    #[inline]
    pub fn set(&self) { self.pending.store(true, Ordering::Release); }

    /// Read and clear the flag in one atomic step.
    #[inline]
    pub fn take(&self) -> bool { self.pending.swap(false, Ordering::AcqRel) }

    /// Check the flag without consuming it.
    #[inline]
    pub fn is_pending(&self) -> bool { self.pending.load(Ordering::Acquire) }

    /// Drop a pending press.
    #[inline]
    pub fn clear(&self) { self.pending.store(false, Ordering::Release); }
}

impl Default for ButtonFlag {
    fn default() -> Self { Self::new() }
}

/// Pending flags for both move buttons.
///
/// `const fn new()` lets this live in a `static` shared between the edge
/// handlers and the main loop.
pub struct InputFlags {
    down: ButtonFlag,
    up: ButtonFlag,
}

impl InputFlags {
    /// Create a set of cleared flags.
    pub const fn new() -> Self {
        Self {
            down: ButtonFlag::new(),
            up: ButtonFlag::new(),
        }
    }

    #[inline]
    const fn flag(
        &self,
        button: MoveButton,
    ) -> &ButtonFlag {
        match button {
            MoveButton::Down => &self.down,
            MoveButton::Up => &self.up,
        }
    }

    /// Producer side: record a press.
    #[inline]
    pub fn press(
        &self,
        button: MoveButton,
    ) {
        self.flag(button).set();
    }

    /// Consumer side: read and clear one button's flag.
    #[inline]
    pub fn take(
        &self,
        button: MoveButton,
    ) -> bool {
        self.flag(button).take()
    }

    /// Check one button without consuming the press.
    #[inline]
    pub fn is_pending(
        &self,
        button: MoveButton,
    ) -> bool {
        self.flag(button).is_pending()
    }

    /// Drop every pending press.
    pub fn discard(&self) {
        self.down.clear();
        self.up.clear();
    }
}

impl Default for InputFlags {
    fn default() -> Self { Self::new() }
}

/// Polled buttons that start the game.
///
/// Implementors translate the electrical level (active-low with pull-ups on
/// the hardware) into "pressed".
pub trait StartButtons {
    /// LEFT button is held down.
    fn left_pressed(&mut self) -> bool;

    /// RIGHT button is held down.
    fn right_pressed(&mut self) -> bool;

    /// Either start button is held down.
    fn any_pressed(&mut self) -> bool { self.left_pressed() || self.right_pressed() }
}

/// Start buttons backed by two plain booleans.
///
/// Used by the simulator (keyboard state) and in tests.
#[derive(Clone, Copy, Default, Debug)]
pub struct HeldButtons {
    pub left: bool,
    pub right: bool,
}

impl StartButtons for HeldButtons {
    fn left_pressed(&mut self) -> bool { self.left }

    fn right_pressed(&mut self) -> bool { self.right }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_is_sticky_until_taken() {
        let flag = ButtonFlag::new();
        assert!(!flag.is_pending());
        flag.set();
        assert!(flag.is_pending());
        assert!(flag.is_pending(), "peeking must not consume");
        assert!(flag.take());
        assert!(!flag.take(), "take clears the flag");
    }

    #[test]
    fn test_repeated_presses_collapse() {
        let flags = InputFlags::new();
        flags.press(MoveButton::Up);
        flags.press(MoveButton::Up);
        assert!(flags.take(MoveButton::Up));
        assert!(!flags.take(MoveButton::Up));
    }

    #[test]
    fn test_flags_are_independent() {
        let flags = InputFlags::new();
        flags.press(MoveButton::Down);
        assert!(!flags.is_pending(MoveButton::Up));
        assert!(flags.is_pending(MoveButton::Down));
        assert!(!flags.take(MoveButton::Up));
        assert!(flags.take(MoveButton::Down));
    }

    #[test]
    fn test_discard_clears_both() {
        let flags = InputFlags::new();
        flags.press(MoveButton::Down);
        flags.press(MoveButton::Up);
        flags.discard();
        assert!(!flags.take(MoveButton::Down));
        assert!(!flags.take(MoveButton::Up));
    }

    #[test]
    fn test_static_flags_shared_across_threads() {
        static FLAGS: InputFlags = InputFlags::new();
        std::thread::spawn(|| FLAGS.press(MoveButton::Down)).join().unwrap();
        assert!(FLAGS.take(MoveButton::Down));
    }

    #[test]
    fn test_any_start_button() {
        let mut buttons = HeldButtons::default();
        assert!(!buttons.any_pressed());
        buttons.right = true;
        assert!(buttons.any_pressed());
        buttons = HeldButtons { left: true, right: false };
        assert!(buttons.any_pressed());
    }
}
