//! Screen lifecycle and feed selection.
//!
//! The controller owns the three collaborators (sensor access, scheduler, UI
//! surface) and wires readings from exactly one feed into the presenter.
//!
//! # Source Selection
//!
//! The sensor capability is queried once, in [`ScreenController::new`]:
//!
//! | Query result | Mode | Feed |
//! |--------------|------|------|
//! | `Available(handle)` | [`SourceMode::Live`] | sensor listener |
//! | `Unavailable` | [`SourceMode::Simulated`] | synthetic timer, started immediately |
//!
//! The mode never changes afterwards. A live sensor that goes quiet leaves the
//! last reading on screen.
//!
//! # Lifecycle
//!
//! ```text
//! Created --on_visible--> Visible --on_hidden--> Hidden
//!                            ^                     |
//!                            +-----on_visible------+
//! ```
//!
//! `on_visible` starts the session's feed unless it already runs.
//! `on_hidden` stops it: the listener is unregistered, or the pending tick is
//! cancelled. The pending tick handle is also checked on delivery, so a tick
//! the host dequeued before the cancel is still discarded.
//!
//! Dropping the controller performs the same stop actions as `on_hidden`.

use core::mem;

use log::{debug, info, trace, warn};

use crate::config::SIMULATION_TICK_MS;
use crate::presenter::{PresenterConfig, ReadingPresenter, status_label};
use crate::scheduler::{Scheduler, TimerHandle};
use crate::sensor::{PressureSensors, SamplingRate, SensorAccuracy, SensorAvailability, first_scalar};
use crate::surface::UiSurface;
use crate::synthetic::SyntheticPressureSource;

/// Where readings come from for the whole session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceMode {
    Live,
    Simulated,
}

/// Visibility state of the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Created,
    Visible,
    Hidden,
}

/// Input source chosen at construction, with its per-mode state.
enum Source<H> {
    Live(H),
    Simulated(SyntheticPressureSource),
}

/// Whether a feed is currently delivering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Feed {
    Stopped,
    Listening,
    Ticking(TimerHandle),
}

/// Single-screen controller driving the altimeter display.
pub struct ScreenController<P, S, U>
where
    P: PressureSensors,
    S: Scheduler,
    U: UiSurface,
{
    sensors: P,
    scheduler: S,
    surface: U,
    presenter: ReadingPresenter,
    source: Source<P::Handle>,
    feed: Feed,
    lifecycle: Lifecycle,
}

impl<P, S, U> ScreenController<P, S, U>
where
    P: PressureSensors,
    S: Scheduler,
    U: UiSurface,
{
    /// Create the screen, decide the source mode and label the status slot.
    ///
    /// Without a pressure sensor the synthetic feed is started right away.
    pub fn new(
        mut sensors: P,
        scheduler: S,
        mut surface: U,
        config: PresenterConfig,
    ) -> Self {
        let source = match sensors.pressure_sensor() {
            SensorAvailability::Available(handle) => Source::Live(handle),
            SensorAvailability::Unavailable => Source::Simulated(SyntheticPressureSource::new()),
        };

        surface.set_status_text(status_label(matches!(source, Source::Live(_))));

        let mut controller = Self {
            sensors,
            scheduler,
            surface,
            presenter: ReadingPresenter::new(config),
            source,
            feed: Feed::Stopped,
            lifecycle: Lifecycle::Created,
        };

        info!("Pressure source: {:?}", controller.mode());
        if controller.mode() == SourceMode::Simulated {
            controller.start_feed();
        }
        controller
    }

    /// Screen became visible: (re)start the session's feed.
    pub fn on_visible(&mut self) {
        if self.lifecycle == Lifecycle::Visible {
            trace!("Already visible");
            return;
        }
        debug!("{:?} -> Visible", self.lifecycle);
        self.lifecycle = Lifecycle::Visible;
        self.start_feed();
    }

    /// Screen became hidden: stop the active feed.
    pub fn on_hidden(&mut self) {
        if self.lifecycle == Lifecycle::Hidden {
            trace!("Already hidden");
            return;
        }
        debug!("{:?} -> Hidden", self.lifecycle);
        self.lifecycle = Lifecycle::Hidden;
        self.stop_feed();
    }

    /// Sensor sample delivered by the host. Only the first value is used.
    pub fn on_sensor_event(
        &mut self,
        values: &[f32],
    ) {
        if self.feed != Feed::Listening {
            trace!("Sensor event without active listener dropped");
            return;
        }
        let Some(pressure) = first_scalar(values) else {
            trace!("Empty sensor event dropped");
            return;
        };
        self.show(pressure, true);
    }

    /// Sensor accuracy changed. Logged only; the display ignores accuracy.
    pub fn on_accuracy_changed(
        &mut self,
        accuracy: SensorAccuracy,
    ) {
        debug!("Sensor accuracy: {:?}", accuracy);
    }

    /// Timer callback delivered by the host.
    ///
    /// Anything but the currently pending synthetic tick is ignored.
    pub fn on_timer(
        &mut self,
        handle: TimerHandle,
    ) {
        if self.feed != Feed::Ticking(handle) {
            trace!("Stale timer {} dropped", handle.id());
            return;
        }
        let Source::Simulated(generator) = &mut self.source else {
            return;
        };

        let pressure = generator.tick();
        self.feed = Feed::Ticking(self.scheduler.schedule(SIMULATION_TICK_MS));
        self.show(pressure, false);
    }

    /// Source mode decided at construction.
    pub const fn mode(&self) -> SourceMode {
        match self.source {
            Source::Live(_) => SourceMode::Live,
            Source::Simulated(_) => SourceMode::Simulated,
        }
    }

    #[inline]
    pub const fn lifecycle(&self) -> Lifecycle { self.lifecycle }

    /// `true` while the sensor listener is registered or a tick is pending.
    #[inline]
    pub fn is_feed_active(&self) -> bool { self.feed != Feed::Stopped }

    /// Current value of the synthetic generator, in Simulated mode.
    pub const fn synthetic_pressure(&self) -> Option<f32> {
        match &self.source {
            Source::Simulated(generator) => Some(generator.current()),
            Source::Live(_) => None,
        }
    }

    #[inline]
    pub const fn presenter(&self) -> &ReadingPresenter { &self.presenter }

    #[inline]
    pub const fn surface(&self) -> &U { &self.surface }

    #[inline]
    pub const fn scheduler(&self) -> &S { &self.scheduler }

    /// Mutable scheduler access for the host loop (e.g. to collect due timers).
    #[inline]
    pub fn scheduler_mut(&mut self) -> &mut S { &mut self.scheduler }

    #[inline]
    pub const fn sensors(&self) -> &P { &self.sensors }

    /// Mutable sensor access for hosts that pump samples out of the platform.
    #[inline]
    pub fn sensors_mut(&mut self) -> &mut P { &mut self.sensors }

    fn start_feed(&mut self) {
        if self.feed != Feed::Stopped {
            return;
        }
        match &self.source {
            Source::Live(handle) => match self.sensors.register(handle, SamplingRate::Normal) {
                Ok(()) => {
                    debug!("Sensor listener registered");
                    self.feed = Feed::Listening;
                }
                Err(e) => warn!("Sensor feed not started: {}", e),
            },
            Source::Simulated(_) => {
                // Zero delay: first tick on the next dispatch
                self.feed = Feed::Ticking(self.scheduler.schedule(0));
                debug!("Synthetic feed started");
            }
        }
    }

    fn stop_feed(&mut self) {
        match mem::replace(&mut self.feed, Feed::Stopped) {
            Feed::Stopped => {}
            Feed::Listening => {
                if let Source::Live(handle) = &self.source {
                    self.sensors.unregister(handle);
                }
                debug!("Sensor listener unregistered");
            }
            Feed::Ticking(handle) => {
                self.scheduler.cancel(handle);
                debug!("Synthetic feed stopped");
            }
        }
    }

    fn show(
        &mut self,
        pressure: f32,
        live: bool,
    ) {
        let state = self.presenter.present(pressure, live);
        self.surface.apply(&state);
    }
}

impl<P, S, U> Drop for ScreenController<P, S, U>
where
    P: PressureSensors,
    S: Scheduler,
    U: UiSurface,
{
    fn drop(&mut self) { self.stop_feed(); }
}
