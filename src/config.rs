//! Simulator configuration constants.
//!
//! Layout positions are `const` so the render path does no per-frame
//! arithmetic. Core constants (formula, synthetic generator, text capacity)
//! live in [`altimeter_common::config`].

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Window pixel scale.
pub const DISPLAY_SCALE: u32 = 2;

pub const WINDOW_TITLE: &str = "Barometric Altimeter";

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

// =============================================================================
// Virtual Barometer
// =============================================================================

/// Expose a virtual pressure sensor to the screen (Live mode).
///
/// Desktops have no barometer, so by default the screen runs Simulated mode.
pub const VIRTUAL_BAROMETER: bool = false;

/// Center of the virtual barometer's sine wave in hPa.
pub const VIRTUAL_BARO_BASE_HPA: f32 = 950.0;

/// Amplitude of the virtual barometer's sine wave in hPa.
pub const VIRTUAL_BARO_AMPLITUDE_HPA: f32 = 60.0;

/// Duration of one full virtual barometer cycle.
pub const VIRTUAL_BARO_PERIOD: Duration = Duration::from_secs(90);

const _: () = assert!(VIRTUAL_BARO_AMPLITUDE_HPA < VIRTUAL_BARO_BASE_HPA);

// =============================================================================
// Pre-computed Layout Constants
// =============================================================================

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

/// Baseline of the small "ALTITUDE" caption.
pub const ALTITUDE_LABEL_Y: i32 = 62;

/// Baseline of the large altitude value.
pub const ALTITUDE_VALUE_Y: i32 = 100;

/// Baseline of the small "PRESSURE" caption.
pub const PRESSURE_LABEL_Y: i32 = 138;

/// Baseline of the pressure value.
pub const PRESSURE_VALUE_Y: i32 = 166;

/// Baseline of the status label, near the bottom edge.
pub const STATUS_Y: i32 = (SCREEN_HEIGHT - 18) as i32;

const _: () = assert!(ALTITUDE_VALUE_Y < PRESSURE_LABEL_Y);
const _: () = assert!(PRESSURE_VALUE_Y < STATUS_Y);
