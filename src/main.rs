// Crate-level lints
#![allow(clippy::cast_possible_truncation)] // Layout math casts u32 pixel sizes to i32
#![allow(clippy::cast_possible_wrap)] // u32->i32 is fine for a 320x240 screen

//! Barometric altimeter simulator for desktop.
//!
//! Runs the altimeter screen in an SDL window through
//! `embedded-graphics-simulator`. The screen shows the altitude derived from
//! the current pressure, the pressure itself, and whether the reading is live
//! or simulated, over a sky tint that darkens with altitude.
//!
//! # Host Responsibilities
//!
//! [`altimeter_common::ScreenController`] never sleeps or spawns. This binary
//! is its event loop:
//!
//! 1. Poll window events and map them to lifecycle transitions
//! 2. Forward virtual barometer samples ([`sensors::DesktopSensors`])
//! 3. Dispatch due timers from [`scheduler::FrameScheduler`]
//! 4. Render the [`surface::ScreenSurface`] and sleep out the frame
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | `H` | Toggle visible/hidden (as if the app went to the background) |
//! | `Q` / `Esc` | Quit |
//!
//! # Logging
//!
//! Uses `env_logger`; set `RUST_LOG=debug` to see lifecycle transitions and
//! feed start/stop, `RUST_LOG=trace` for dropped events and stale timers.

mod config;
mod render;
mod scheduler;
mod sensors;
mod styles;
mod surface;

use std::thread;
use std::time::Instant;

use altimeter_common::{Lifecycle, PresenterConfig, ScreenController};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::info;

use crate::config::{DISPLAY_SCALE, FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH, VIRTUAL_BAROMETER, WINDOW_TITLE};
use crate::render::{draw_paused, draw_screen};
use crate::scheduler::FrameScheduler;
use crate::sensors::DesktopSensors;
use crate::surface::ScreenSurface;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(DISPLAY_SCALE).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    let start = Instant::now();
    let mut controller = ScreenController::new(
        DesktopSensors::new(VIRTUAL_BAROMETER, start),
        FrameScheduler::new(start),
        ScreenSurface::new(),
        PresenterConfig::default(),
    );

    draw_screen(&mut display, controller.surface());
    window.update(&display);
    controller.on_visible();
    info!("Altimeter running ({:?} mode)", controller.mode());

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
                        Keycode::H => {
                            if controller.lifecycle() == Lifecycle::Visible {
                                controller.on_hidden();
                            } else {
                                controller.on_visible();
                            }
                            info!(
                                "Screen {:?} (timers pending: {}, barometer listening: {})",
                                controller.lifecycle(),
                                controller.scheduler().pending(),
                                controller.sensors().is_listening()
                            );
                        }
                        Keycode::Q | Keycode::Escape => return,
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Feed the controller, one event at a time
        let now = Instant::now();
        if let Some(sample) = controller.sensors_mut().poll(now) {
            controller.on_sensor_event(&sample);
        }
        for handle in controller.scheduler_mut().take_due(now) {
            controller.on_timer(handle);
        }

        if controller.lifecycle() == Lifecycle::Visible {
            draw_screen(&mut display, controller.surface());
        } else {
            draw_paused(&mut display);
        }
        window.update(&display);

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
