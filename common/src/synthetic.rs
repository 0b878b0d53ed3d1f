//! Synthetic pressure generator used when the device has no barometer.
//!
//! Each tick lowers the pressure by a fixed step so the displayed altitude
//! keeps climbing. Once the value drops below the floor it jumps straight back
//! to the starting pressure on the same tick (wraparound, not a bounce).
//!
//! The generator only holds its current value. Pausing the feed does not
//! touch it, so a restarted feed continues from where it stopped.

use crate::config::{SIMULATION_FLOOR_HPA, SIMULATION_START_HPA, SIMULATION_STEP_HPA};

/// Slowly drifting pressure value in hPa.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SyntheticPressureSource {
    current: f32,
}

impl SyntheticPressureSource {
    /// Create a generator starting at standard sea-level pressure.
    pub const fn new() -> Self { Self { current: SIMULATION_START_HPA } }

    /// Advance one step and return the new reading.
    pub fn tick(&mut self) -> f32 {
        self.current -= SIMULATION_STEP_HPA;
        if self.current < SIMULATION_FLOOR_HPA {
            self.current = SIMULATION_START_HPA;
        }
        self.current
    }

    /// Last value produced (or the start value before the first tick).
    #[inline]
    pub const fn current(&self) -> f32 { self.current }
}

impl Default for SyntheticPressureSource {
    fn default() -> Self { Self::new() }
}
