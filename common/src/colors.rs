//! Color constants and the altitude background tint.
//!
//! The screen uses `Rgb888` so the sky tint keeps the exact 8-bit channel
//! values (`0xBB`, `0xDC`, `0xFE`). Rgb565 would quantize them and make the
//! darkening steps uneven.
//!
//! # Tint Curve
//!
//! Altitude is clamped to `[0, TINT_MAX_ALTITUDE_M]` and mapped linearly onto a
//! channel drop of `0..=TINT_MAX_DROP`. Red and green lose `drop`, blue loses
//! `2 * drop`, and every channel floors at zero:
//!
//! | Altitude | Drop | Color |
//! |----------|------|-------|
//! | 0 m | 0 | `#BBDCFE` |
//! | 2000 m | 70 | `#759672` |
//! | >= 4000 m | 140 | `#2F5000` |

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

use crate::config::{SKY_BLUE, SKY_GREEN, SKY_RED, TINT_MAX_ALTITUDE_M, TINT_MAX_DROP};

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black. Hidden-screen background.
pub const BLACK: Rgb888 = Rgb888::BLACK;

/// Pure white. Text on the darker high-altitude tints.
pub const WHITE: Rgb888 = Rgb888::WHITE;

// =============================================================================
// Custom Colors
// =============================================================================

/// Sea-level sky tint (`#BBDCFE`).
pub const SKY_SEA_LEVEL: Rgb888 = Rgb888::new(SKY_RED, SKY_GREEN, SKY_BLUE);

/// Near-black navy for text on light tints.
pub const INK: Rgb888 = Rgb888::new(0x10, 0x1C, 0x2C);

/// Muted slate used for the paused card.
pub const SLATE: Rgb888 = Rgb888::new(0x2A, 0x32, 0x3C);

// =============================================================================
// Altitude Tint
// =============================================================================

/// Background color for an altitude in meters.
///
/// NaN altitudes (negative pressure input) get the sea-level tint.
pub fn altitude_tint(altitude: f64) -> Rgb888 {
    let clamped = altitude.clamp(0.0, TINT_MAX_ALTITUDE_M);
    let t = clamped / TINT_MAX_ALTITUDE_M;
    // NaN casts to 0
    let drop = libm::round(t * TINT_MAX_DROP) as i32;

    Rgb888::new(
        darken(SKY_RED, drop),
        darken(SKY_GREEN, drop),
        darken(SKY_BLUE, drop * 2),
    )
}

#[inline]
fn darken(
    base: u8,
    drop: i32,
) -> u8 {
    (i32::from(base) - drop).max(0) as u8
}

/// Relative luminance approximation (0-255) used to pick readable text.
#[inline]
pub fn luminance(color: Rgb888) -> u32 {
    (u32::from(color.r()) * 299 + u32::from(color.g()) * 587 + u32::from(color.b()) * 114) / 1000
}

/// Text color with enough contrast against `background`.
pub fn text_color_for(background: Rgb888) -> Rgb888 {
    if luminance(background) > 110 { INK } else { WHITE }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sea_level_tint() {
        assert_eq!(altitude_tint(0.0), SKY_SEA_LEVEL);
    }

    #[test]
    fn test_below_sea_level_clamps_to_sea_level_tint() {
        assert_eq!(altitude_tint(-250.0), SKY_SEA_LEVEL);
    }

    #[test]
    fn test_saturates_above_max_altitude() {
        let at_max = altitude_tint(TINT_MAX_ALTITUDE_M);
        assert_eq!(altitude_tint(4500.0), at_max);
        assert_eq!(altitude_tint(44330.0), at_max);
        assert_eq!(altitude_tint(f64::INFINITY), at_max);
    }

    #[test]
    fn test_max_tint_values() {
        let at_max = altitude_tint(TINT_MAX_ALTITUDE_M);
        assert_eq!(at_max.r(), 0xBB - 140);
        assert_eq!(at_max.g(), 0xDC - 140);
        // 0xFE - 280 would be negative
        assert_eq!(at_max.b(), 0);
    }

    #[test]
    fn test_blue_floors_before_max() {
        // Blue hits zero once drop reaches 127 (254 / 2)
        let color = altitude_tint(3700.0);
        assert_eq!(color.b(), 0);
        assert!(color.r() > 0);
    }

    #[test]
    fn test_midpoint_rounds() {
        let color = altitude_tint(2000.0);
        assert_eq!(color, Rgb888::new(0xBB - 70, 0xDC - 70, 0xFE - 140));
    }

    #[test]
    fn test_drop_uses_rounding() {
        // t * 140 = 0.7 rounds to 1
        let color = altitude_tint(20.0);
        assert_eq!(color, Rgb888::new(0xBB - 1, 0xDC - 1, 0xFE - 2));
    }

    #[test]
    fn test_darker_with_altitude() {
        let mut prev = luminance(altitude_tint(0.0));
        for alt in (250..=4000).step_by(250) {
            let lum = luminance(altitude_tint(f64::from(alt)));
            assert!(lum < prev, "not darker at {alt} m");
            prev = lum;
        }
    }

    #[test]
    fn test_nan_gets_sea_level_tint() {
        assert_eq!(altitude_tint(f64::NAN), SKY_SEA_LEVEL);
    }

    #[test]
    fn test_text_color_contrast() {
        assert_eq!(text_color_for(SKY_SEA_LEVEL), INK);
        assert_eq!(text_color_for(BLACK), WHITE);
    }
}
