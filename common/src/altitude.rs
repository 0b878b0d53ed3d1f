//! Pressure to altitude conversion.
//!
//! Uses the international barometric formula:
//!
//! ```text
//! h = 44330 * (1 - (p / p0)^(1 / 5.255))
//! ```
//!
//! Inputs are not validated. A zero pressure yields the formula ceiling
//! (44330 m) and a negative pressure yields NaN; callers display whatever
//! comes out.

use crate::config::{FORMULA_EXPONENT_DIVISOR, FORMULA_SCALE_M, SEA_LEVEL_PRESSURE_HPA};

/// Convert a pressure reading to an altitude estimate in meters.
///
/// Both pressures must use the same unit (hPa throughout this crate).
#[inline]
pub fn pressure_to_altitude(
    pressure: f64,
    sea_level_pressure: f64,
) -> f64 {
    let ratio = pressure / sea_level_pressure;
    FORMULA_SCALE_M * (1.0 - libm::pow(ratio, 1.0 / FORMULA_EXPONENT_DIVISOR))
}

/// Convert a pressure reading to altitude against the standard p0 (1013.25 hPa).
#[inline]
pub fn altitude_from_pressure(pressure: f64) -> f64 { pressure_to_altitude(pressure, SEA_LEVEL_PRESSURE_HPA) }
