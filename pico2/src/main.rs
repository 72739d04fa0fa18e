//! Mini Car Game Firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Drives a 16x2 HD44780 LCD over a PCF8574 I2C backpack.
//!
//! # Architecture
//!
//! - Button tasks: Wait for falling edges on DOWN/UP and raise sticky flags
//! - Main task: Runs the game state machine every 10 ms and logs its events
//!
//! # Button Controls
//!
//! - **LEFT/RIGHT**: Start the game from the welcome screen
//! - **DOWN**: Move the car to the bottom row
//! - **UP**: Move the car to the top row

#![no_std]
#![no_main]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]

// Modules only used in the binary (not testable on host)
mod buttons;
mod display;

// Re-export testable modules from library for local use
mod config {
    pub use mini_car_game_pico2::config::*;
}

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::I2c;
use embassy_time::{Delay, Instant, Timer};
use mini_car_game::config::LOOP_PERIOD_MS;
use mini_car_game::{Game, InputFlags, MoveButton, XorShift32};
use mini_car_game_pico2::Hd44780I2c;
use {defmt_rtt as _, panic_probe as _};

use crate::buttons::{StartPins, move_button_task};
use crate::config::LCD_I2C_ADDRESS;
use crate::display::lcd_i2c_config;

/// DOWN/UP press flags, raised by the button tasks and drained by the game loop.
static INPUT: InputFlags = InputFlags::new();

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"pico2-mini-car-game"),
    embassy_rp::binary_info::rp_program_description!(c"Two-lane car dodging game on a 16x2 I2C LCD"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Mini car game starting...");

    let p = embassy_rp::init(Default::default());

    // LCD on I2C0 (blocking, each character is a single 4-byte write)
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, lcd_i2c_config());
    let mut lcd = Hd44780I2c::new(i2c, Delay, LCD_I2C_ADDRESS);
    match lcd.init() {
        Ok(()) => info!("LCD initialized at {=u8:#x}", lcd.address()),
        Err(e) => warn!("LCD init failed: {}", e),
    }

    // Initialize buttons (active-low with internal pull-up)
    let btn_down = Input::new(p.PIN_2, Pull::Up);
    let btn_up = Input::new(p.PIN_3, Pull::Up);
    let btn_right = Input::new(p.PIN_6, Pull::Up);
    let btn_left = Input::new(p.PIN_7, Pull::Up);

    spawner.spawn(move_button_task(btn_down, MoveButton::Down, &INPUT)).unwrap();
    spawner.spawn(move_button_task(btn_up, MoveButton::Up, &INPUT)).unwrap();
    info!("Button tasks spawned");

    let mut start = StartPins::new(btn_left, btn_right);

    // Reseeded from the start press timestamp once the player starts
    let mut game = Game::new(XorShift32::new(Instant::now().as_ticks() as u32));
    if let Err(e) = game.begin(&mut lcd) {
        warn!("LCD write failed: {}", e);
    }

    loop {
        let now_ms = Instant::now().as_millis();

        match game.update(now_ms, &INPUT, &mut start, &mut lcd) {
            Ok(Some(event)) => info!("{} ({})", event, game.state().name()),
            Ok(None) => {}
            Err(e) => {
                warn!("LCD write failed: {}", e);
                // The transition still happened; report it
                if let Some(event) = game.take_event() {
                    info!("{} ({})", event, game.state().name());
                }
            }
        }

        Timer::after_millis(LOOP_PERIOD_MS).await;
    }
}
