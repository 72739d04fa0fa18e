//! GPIO button handling.
//!
//! DOWN and UP each get an edge task that raises the shared sticky flag;
//! LEFT and RIGHT are only polled while the welcome screen waits.
//! All buttons are active-low with internal pull-ups.

use embassy_rp::gpio::Input;
use embassy_time::Timer;
use mini_car_game::{InputFlags, MoveButton, StartButtons};

use crate::config::DEBOUNCE_MS;

/// Wait for falling edges on one move button and latch them into `flags`.
///
/// The line must still be low after [`DEBOUNCE_MS`] for the press to count,
/// so contact bounce raises the flag at most once per press.
#[embassy_executor::task(pool_size = 2)]
pub async fn move_button_task(
    mut pin: Input<'static>,
    button: MoveButton,
    flags: &'static InputFlags,
) {
    defmt::info!("Button task started: {}", button);

    loop {
        pin.wait_for_falling_edge().await;
        Timer::after_millis(DEBOUNCE_MS).await;

        if pin.is_low() {
            flags.press(button);
            defmt::debug!("Press: {}", button);
        }
    }
}

/// LEFT and RIGHT start buttons.
pub struct StartPins {
    left: Input<'static>,
    right: Input<'static>,
}

impl StartPins {
    pub const fn new(
        left: Input<'static>,
        right: Input<'static>,
    ) -> Self {
        Self { left, right }
    }
}

impl StartButtons for StartPins {
    fn left_pressed(&mut self) -> bool { self.left.is_low() }

    fn right_pressed(&mut self) -> bool { self.right.is_low() }
}
