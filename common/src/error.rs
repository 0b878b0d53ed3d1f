//! Error types for collaborator calls.
//!
//! Missing hardware and malformed sensor events are not errors; the
//! controller routes or drops them. The only fallible call is asking the
//! platform to start delivering sensor samples.

use thiserror::Error;

/// Failure reported by a [`crate::sensor::PressureSensors`] implementation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The platform refused to attach the listener.
    #[error("sensor listener registration was rejected")]
    RegistrationRejected,

    /// The sensor handle no longer refers to an attached device.
    #[error("pressure sensor is no longer attached")]
    Disconnected,
}
