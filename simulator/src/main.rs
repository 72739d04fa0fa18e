//! Mini Car Game Simulator for Windows/Desktop.
//!
//! Runs the same game state machine as the firmware against an in-memory
//! 16x2 LCD and draws it with the embedded-graphics-simulator crate.
//!
//! # Key Controls
//!
//! - **Left/Right** (hold): Start from the welcome screen
//! - **Down**: Move the car to the bottom row
//! - **Up**: Move the car to the top row
//! - **Esc**: Quit

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

mod event_panel;
mod lcd_panel;
mod styles;
mod timing;

use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use mini_car_game::event_log::EventLog;
use mini_car_game::input::HeldButtons;
use mini_car_game::{Game, InputFlags, MoveButton, TextLcd, XorShift32};

use crate::event_panel::{SCREEN_HEIGHT, SCREEN_WIDTH, draw_event_log};
use crate::lcd_panel::draw_lcd;
use crate::styles::BEZEL;
use crate::timing::LOOP_PERIOD;

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Mini Car Game Sim", &output_settings);

    display.clear(BEZEL).ok();
    window.update(&display);

    // Key events stand in for the button interrupts
    let input = InputFlags::new();
    let mut held = HeldButtons::default();
    let mut lcd = TextLcd::new();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(1, |d| d.subsec_nanos());
    let mut game = Game::new(XorShift32::new(seed));
    game.begin(&mut lcd).ok();

    let mut event_log = EventLog::new();
    event_log.push("Simulator started");

    let boot = Instant::now();

    loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Down => input.press(MoveButton::Down),
                        Keycode::Up => input.press(MoveButton::Up),
                        Keycode::Left => held.left = true,
                        Keycode::Right => held.right = true,
                        Keycode::Escape => return,
                        _ => {}
                    }
                }
                SimulatorEvent::KeyUp { keycode, .. } => match keycode {
                    Keycode::Left => held.left = false,
                    Keycode::Right => held.right = false,
                    _ => {}
                },
                _ => {}
            }
        }

        let now_ms = boot.elapsed().as_millis() as u64;
        if let Ok(Some(event)) = game.update(now_ms, &input, &mut held, &mut lcd) {
            println!("[{now_ms:>7} ms] {event} ({})", game.state().name());
            event_log.record(now_ms, &event);
        }

        draw_lcd(&mut display, &lcd).ok();
        draw_event_log(&mut display, &event_log).ok();
        window.update(&display);

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = LOOP_PERIOD.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}
