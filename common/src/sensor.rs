//! Capability surface of the platform pressure sensor.
//!
//! The controller asks once whether a barometer exists, caches the answer for
//! the whole session, and from then on only registers or unregisters its
//! listener. Samples are pushed by the host into
//! [`ScreenController::on_sensor_event`](crate::controller::ScreenController::on_sensor_event).

use crate::config::{SENSOR_GAME_PERIOD_US, SENSOR_NORMAL_PERIOD_US, SENSOR_UI_PERIOD_US};
use crate::error::SensorError;

/// Result of the one-time capability query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorAvailability<H> {
    /// A pressure sensor exists; the handle identifies it for (un)registration.
    Available(H),
    Unavailable,
}

impl<H> SensorAvailability<H> {
    #[inline]
    pub const fn is_available(&self) -> bool { matches!(self, Self::Available(_)) }
}

/// Sampling rate hint passed on registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SamplingRate {
    /// Rate suitable for screen updates that do not need to track motion.
    #[default]
    Normal,
    Ui,
    Game,
    /// As fast as the hardware delivers.
    Fastest,
}

impl SamplingRate {
    /// Requested period between samples in microseconds (0 = no delay).
    #[inline]
    pub const fn period_us(self) -> u32 {
        match self {
            Self::Normal => SENSOR_NORMAL_PERIOD_US,
            Self::Ui => SENSOR_UI_PERIOD_US,
            Self::Game => SENSOR_GAME_PERIOD_US,
            Self::Fastest => 0,
        }
    }
}

/// Reported accuracy of the sensor, forwarded by the host when it changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorAccuracy {
    Unreliable,
    Low,
    Medium,
    High,
}

/// Platform access to the barometer.
pub trait PressureSensors {
    /// Opaque identifier of a pressure sensor.
    type Handle;

    /// Query whether the device has a pressure-capable sensor.
    fn pressure_sensor(&mut self) -> SensorAvailability<Self::Handle>;

    /// Start delivering samples for `handle` at roughly `rate`.
    fn register(
        &mut self,
        handle: &Self::Handle,
        rate: SamplingRate,
    ) -> Result<(), SensorError>;

    /// Stop delivering samples for `handle`. Unregistering twice is harmless.
    fn unregister(
        &mut self,
        handle: &Self::Handle,
    );
}

impl<T> PressureSensors for &mut T
where
    T: PressureSensors + ?Sized,
{
    type Handle = T::Handle;

    fn pressure_sensor(&mut self) -> SensorAvailability<Self::Handle> { T::pressure_sensor(self) }

    fn register(
        &mut self,
        handle: &Self::Handle,
        rate: SamplingRate,
    ) -> Result<(), SensorError> {
        T::register(self, handle, rate)
    }

    fn unregister(
        &mut self,
        handle: &Self::Handle,
    ) {
        T::unregister(self, handle);
    }
}

/// First scalar of a sensor event payload, if any.
#[inline]
pub fn first_scalar(values: &[f32]) -> Option<f32> { values.first().copied() }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_scalar() {
        assert_eq!(first_scalar(&[1001.5, 22.0, 3.0]), Some(1001.5));
        assert_eq!(first_scalar(&[]), None);
    }

    #[test]
    fn test_sampling_rate_periods_ordered() {
        assert_eq!(SamplingRate::default(), SamplingRate::Normal);
        assert!(SamplingRate::Fastest.period_us() < SamplingRate::Game.period_us());
        assert!(SamplingRate::Game.period_us() < SamplingRate::Ui.period_us());
        assert!(SamplingRate::Ui.period_us() < SamplingRate::Normal.period_us());
    }

    #[test]
    fn test_availability() {
        assert!(SensorAvailability::Available(7u8).is_available());
        assert!(!SensorAvailability::<u8>::Unavailable.is_available());
    }
}
