//! Core logic of the barometric altimeter screen.
//!
//! This crate contains everything that does not depend on a concrete display,
//! sensor stack or event loop, so it runs unchanged on the desktop simulator
//! and on any host that implements the three collaborator traits:
//!
//! - [`altitude`]: International barometric formula
//! - [`synthetic`]: Drifting pressure generator for devices without a barometer
//! - [`presenter`]: Pressure -> texts, status label and background tint
//! - [`colors`]: Sky tint curve and text colors
//! - [`controller`]: Screen lifecycle, source selection and feed wiring
//! - [`sensor`], [`scheduler`], [`surface`]: Collaborator traits
//! - [`config`]: Compile-time constants
//!
//! # Threading
//!
//! Every operation runs synchronously on the caller's thread. The crate never
//! spawns, blocks or allocates; the host delivers sensor samples and timer
//! callbacks one at a time.
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests. Math goes through `libm` and text
//! through `heapless::String`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod altitude;
pub mod colors;
pub mod config;
pub mod controller;
pub mod error;
pub mod presenter;
pub mod scheduler;
pub mod sensor;
pub mod surface;
pub mod synthetic;

// Re-export commonly used items
pub use altitude::{altitude_from_pressure, pressure_to_altitude};
pub use controller::{Lifecycle, ScreenController, SourceMode};
pub use error::SensorError;
pub use presenter::{DisplayState, PresenterConfig, ReadingPresenter};
pub use scheduler::{Scheduler, TimerHandle};
pub use sensor::{PressureSensors, SamplingRate, SensorAccuracy, SensorAvailability};
pub use surface::UiSurface;
pub use synthetic::SyntheticPressureSource;
