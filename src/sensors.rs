//! Desktop stand-in for the platform sensor service.
//!
//! A desktop has no barometer, so [`DesktopSensors`] normally answers the
//! capability query with `Unavailable`. With the virtual barometer enabled it
//! reports one sensor that, while registered, produces a slow sine wave at the
//! requested sampling rate. The main loop pulls samples with
//! [`DesktopSensors::poll`] and forwards them to the controller.

use std::time::{Duration, Instant};

use altimeter_common::{PressureSensors, SamplingRate, SensorAvailability, SensorError};
use log::debug;

use crate::config::{VIRTUAL_BARO_AMPLITUDE_HPA, VIRTUAL_BARO_BASE_HPA, VIRTUAL_BARO_PERIOD};

/// Identifier of the virtual barometer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarometerId(u8);

const VIRTUAL_BAROMETER_ID: BarometerId = BarometerId(0);

struct VirtualBarometer {
    started: Instant,
    /// Sampling period while a listener is registered.
    listener: Option<Duration>,
    last_sample: Option<Instant>,
}

impl VirtualBarometer {
    fn pressure_at(
        &self,
        now: Instant,
    ) -> f32 {
        let phase = now.duration_since(self.started).as_secs_f32() / VIRTUAL_BARO_PERIOD.as_secs_f32();
        (phase * std::f32::consts::TAU).sin().mul_add(VIRTUAL_BARO_AMPLITUDE_HPA, VIRTUAL_BARO_BASE_HPA)
    }
}

/// Sensor service of the simulator host.
pub struct DesktopSensors {
    barometer: Option<VirtualBarometer>,
}

impl DesktopSensors {
    /// Create the service, with or without the virtual barometer.
    pub fn new(
        virtual_barometer: bool,
        now: Instant,
    ) -> Self {
        Self {
            barometer: virtual_barometer.then(|| VirtualBarometer {
                started: now,
                listener: None,
                last_sample: None,
            }),
        }
    }

    /// Next pending sample, if a listener is registered and its period elapsed.
    ///
    /// The payload mirrors a platform pressure event: `values[0]` in hPa.
    pub fn poll(
        &mut self,
        now: Instant,
    ) -> Option<[f32; 1]> {
        let baro = self.barometer.as_mut()?;
        let period = baro.listener?;
        if let Some(last) = baro.last_sample
            && now.duration_since(last) < period
        {
            return None;
        }
        baro.last_sample = Some(now);
        Some([baro.pressure_at(now)])
    }

    /// `true` while the screen listens to the virtual barometer.
    pub fn is_listening(&self) -> bool { self.barometer.as_ref().is_some_and(|b| b.listener.is_some()) }
}

impl PressureSensors for DesktopSensors {
    type Handle = BarometerId;

    fn pressure_sensor(&mut self) -> SensorAvailability<BarometerId> {
        if self.barometer.is_some() {
            SensorAvailability::Available(VIRTUAL_BAROMETER_ID)
        } else {
            SensorAvailability::Unavailable
        }
    }

    fn register(
        &mut self,
        handle: &BarometerId,
        rate: SamplingRate,
    ) -> Result<(), SensorError> {
        let baro = match self.barometer.as_mut() {
            Some(baro) if *handle == VIRTUAL_BAROMETER_ID => baro,
            _ => return Err(SensorError::Disconnected),
        };
        baro.listener = Some(Duration::from_micros(u64::from(rate.period_us())));
        baro.last_sample = None;
        debug!("Virtual barometer listening every {} us", rate.period_us());
        Ok(())
    }

    fn unregister(
        &mut self,
        _handle: &BarometerId,
    ) {
        if let Some(baro) = self.barometer.as_mut() {
            baro.listener = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_barometer_by_default() {
        let mut sensors = DesktopSensors::new(false, Instant::now());
        assert!(!sensors.pressure_sensor().is_available());
        assert_eq!(sensors.poll(Instant::now()), None);
        assert_eq!(
            sensors.register(&VIRTUAL_BAROMETER_ID, SamplingRate::Normal),
            Err(SensorError::Disconnected)
        );
    }

    #[test]
    fn test_virtual_barometer_silent_until_registered() {
        let start = Instant::now();
        let mut sensors = DesktopSensors::new(true, start);
        assert_eq!(sensors.pressure_sensor(), SensorAvailability::Available(VIRTUAL_BAROMETER_ID));
        assert_eq!(sensors.poll(start), None);
    }

    #[test]
    fn test_samples_respect_period() {
        let start = Instant::now();
        let mut sensors = DesktopSensors::new(true, start);
        sensors.register(&VIRTUAL_BAROMETER_ID, SamplingRate::Normal).unwrap();

        assert!(sensors.poll(start).is_some());
        assert!(sensors.poll(start + Duration::from_millis(100)).is_none());
        assert!(sensors.poll(start + Duration::from_millis(200)).is_some());
    }

    #[test]
    fn test_unregister_stops_samples() {
        let start = Instant::now();
        let mut sensors = DesktopSensors::new(true, start);
        sensors.register(&VIRTUAL_BAROMETER_ID, SamplingRate::Fastest).unwrap();
        assert!(sensors.is_listening());

        sensors.unregister(&VIRTUAL_BAROMETER_ID);
        assert!(!sensors.is_listening());
        assert_eq!(sensors.poll(start + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_pressure_stays_in_band() {
        let start = Instant::now();
        let mut sensors = DesktopSensors::new(true, start);
        sensors.register(&VIRTUAL_BAROMETER_ID, SamplingRate::Fastest).unwrap();

        for s in 0..200 {
            let [pressure] = sensors.poll(start + Duration::from_millis(s * 450)).unwrap();
            assert!(pressure >= VIRTUAL_BARO_BASE_HPA - VIRTUAL_BARO_AMPLITUDE_HPA - 0.01);
            assert!(pressure <= VIRTUAL_BARO_BASE_HPA + VIRTUAL_BARO_AMPLITUDE_HPA + 0.01);
        }
    }
}
