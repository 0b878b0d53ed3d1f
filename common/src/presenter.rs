//! Turns a pressure reading into everything the screen shows.
//!
//! [`ReadingPresenter::present`] is a pure function of its inputs and the
//! presenter configuration: altitude via [`crate::altitude`], fixed-precision
//! text for both values, a status label taken from the `live` flag of the
//! call, and the background tint from [`crate::colors::altitude_tint`].
//!
//! # Formatting
//!
//! Text uses `heapless::String` with `core::fmt::Write`, so presenting never
//! allocates. Non-physical inputs are not rejected: a negative pressure shows
//! `NaN m` and an infinite one shows `inf hPa`.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb888;
use heapless::String;

use crate::altitude::pressure_to_altitude;
use crate::colors::altitude_tint;
use crate::config::{
    DISPLAY_DECIMALS,
    MAX_DISPLAY_DECIMALS,
    SEA_LEVEL_PRESSURE_HPA,
    STATUS_LIVE,
    STATUS_SIMULATED,
    TEXT_CAPACITY,
};

/// Placeholder shown if a value cannot be formatted into its slot.
const UNFORMATTABLE: &str = "---";

/// Fixed-capacity text for one display slot.
pub type DisplayText = String<TEXT_CAPACITY>;

/// Runtime presenter settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresenterConfig {
    /// Sea-level reference pressure (p0) in hPa.
    pub sea_level_hpa: f64,
    /// Decimals shown for altitude and pressure, capped at `MAX_DISPLAY_DECIMALS`.
    pub decimals: usize,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            sea_level_hpa: SEA_LEVEL_PRESSURE_HPA,
            decimals: DISPLAY_DECIMALS,
        }
    }
}

/// Everything the UI surface shows for one reading.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayState {
    /// e.g. `"988.6 m"`
    pub altitude_text: DisplayText,
    /// e.g. `"900.0 hPa"`
    pub pressure_text: DisplayText,
    pub status_text: &'static str,
    pub background: Rgb888,
    /// Unformatted altitude the texts and tint were derived from.
    pub altitude_m: f64,
}

/// Formats readings according to a [`PresenterConfig`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ReadingPresenter {
    config: PresenterConfig,
}

impl ReadingPresenter {
    pub fn new(config: PresenterConfig) -> Self {
        Self {
            config: PresenterConfig {
                decimals: config.decimals.min(MAX_DISPLAY_DECIMALS),
                ..config
            },
        }
    }

    #[inline]
    pub const fn config(&self) -> &PresenterConfig { &self.config }

    /// Derive the full display state for a pressure reading in hPa.
    pub fn present(
        &self,
        pressure: f32,
        live: bool,
    ) -> DisplayState {
        let altitude = pressure_to_altitude(f64::from(pressure), self.config.sea_level_hpa);

        DisplayState {
            altitude_text: format_value(altitude, self.config.decimals, "m"),
            pressure_text: format_value(f64::from(pressure), self.config.decimals, "hPa"),
            status_text: status_label(live),
            background: altitude_tint(altitude),
            altitude_m: altitude,
        }
    }
}

/// Status label for a reading's liveness flag.
#[inline]
pub const fn status_label(live: bool) -> &'static str { if live { STATUS_LIVE } else { STATUS_SIMULATED } }

fn format_value(
    value: f64,
    decimals: usize,
    unit: &str,
) -> DisplayText {
    let mut text = DisplayText::new();
    if write!(text, "{value:.decimals$} {unit}").is_err() {
        text.clear();
        text.push_str(UNFORMATTABLE).ok();
    }
    text
}
