//! Compile-time configuration for the altimeter screen.
//!
//! All constants are validated with `const` assertions, so an inconsistent
//! edit (e.g. a wraparound floor above the starting pressure) fails the build
//! instead of producing a generator that never ticks.

// =============================================================================
// Barometric Formula
// =============================================================================

/// Standard sea-level reference pressure in hectopascals (p0).
pub const SEA_LEVEL_PRESSURE_HPA: f64 = 1013.25;

/// Scale height term of the international barometric formula, in meters.
pub const FORMULA_SCALE_M: f64 = 44330.0;

/// Exponent denominator of the barometric formula: `(p / p0)^(1 / 5.255)`.
pub const FORMULA_EXPONENT_DIVISOR: f64 = 5.255;

// =============================================================================
// Synthetic Pressure Source
// =============================================================================

/// Starting value of the synthetic generator (same as p0, in `f32`).
pub const SIMULATION_START_HPA: f32 = 1013.25;

/// Amount subtracted from the synthetic pressure on every tick.
pub const SIMULATION_STEP_HPA: f32 = 0.8;

/// Below this value the synthetic pressure jumps back to the start value.
pub const SIMULATION_FLOOR_HPA: f32 = 980.0;

/// Period between synthetic ticks in milliseconds.
pub const SIMULATION_TICK_MS: u32 = 1000;

const _: () = assert!(SIMULATION_FLOOR_HPA < SIMULATION_START_HPA);
const _: () = assert!(SIMULATION_STEP_HPA > 0.0);
const _: () = assert!(SIMULATION_TICK_MS > 0);

// =============================================================================
// Background Tint
// =============================================================================

/// Altitude at which the background reaches its darkest tint.
pub const TINT_MAX_ALTITUDE_M: f64 = 4000.0;

/// Channel drop applied at `TINT_MAX_ALTITUDE_M` (blue drops twice this).
pub const TINT_MAX_DROP: f64 = 140.0;

/// Sea-level sky tint, red channel.
pub const SKY_RED: u8 = 0xBB;

/// Sea-level sky tint, green channel.
pub const SKY_GREEN: u8 = 0xDC;

/// Sea-level sky tint, blue channel.
pub const SKY_BLUE: u8 = 0xFE;

const _: () = assert!(TINT_MAX_ALTITUDE_M > 0.0);

// =============================================================================
// Display Formatting
// =============================================================================

/// Default number of decimals shown for altitude and pressure.
pub const DISPLAY_DECIMALS: usize = 1;

/// Capacity of each formatted text slot.
///
/// The widest value is the largest finite `f32` pressure printed without an
/// exponent (39 digits) plus decimals and the unit suffix.
pub const TEXT_CAPACITY: usize = 64;

/// Largest precision accepted by the presenter; larger requests are capped.
pub const MAX_DISPLAY_DECIMALS: usize = 6;

const _: () = assert!(DISPLAY_DECIMALS <= MAX_DISPLAY_DECIMALS);
const _: () = assert!(39 + 1 + MAX_DISPLAY_DECIMALS + " hPa".len() <= TEXT_CAPACITY);

/// Status label shown while readings come from the hardware sensor.
pub const STATUS_LIVE: &str = "live";

/// Status label shown while readings come from the synthetic generator.
pub const STATUS_SIMULATED: &str = "simulated";

// =============================================================================
// Sensor Sampling
// =============================================================================

/// Sampling period hint for the normal sensor rate, in microseconds.
pub const SENSOR_NORMAL_PERIOD_US: u32 = 200_000;

/// Sampling period hint for the UI sensor rate, in microseconds.
pub const SENSOR_UI_PERIOD_US: u32 = 66_667;

/// Sampling period hint for the game sensor rate, in microseconds.
pub const SENSOR_GAME_PERIOD_US: u32 = 20_000;

const _: () = assert!(SENSOR_GAME_PERIOD_US < SENSOR_UI_PERIOD_US);
const _: () = assert!(SENSOR_UI_PERIOD_US < SENSOR_NORMAL_PERIOD_US);
