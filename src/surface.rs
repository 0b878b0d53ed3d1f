//! In-memory UI surface read by the renderer every frame.

use altimeter_common::UiSurface;
use altimeter_common::colors::SKY_SEA_LEVEL;
use altimeter_common::presenter::DisplayText;
use embedded_graphics::pixelcolor::Rgb888;

/// Text shown in the value slots before the first reading arrives.
const EMPTY_VALUE: &str = "--";

/// The three text slots and background of the altimeter screen.
pub struct ScreenSurface {
    altitude: DisplayText,
    pressure: DisplayText,
    status: DisplayText,
    background: Rgb888,
}

impl ScreenSurface {
    pub fn new() -> Self {
        let mut surface = Self {
            altitude: DisplayText::new(),
            pressure: DisplayText::new(),
            status: DisplayText::new(),
            background: SKY_SEA_LEVEL,
        };
        overwrite(&mut surface.altitude, EMPTY_VALUE);
        overwrite(&mut surface.pressure, EMPTY_VALUE);
        surface
    }

    #[inline]
    pub fn altitude(&self) -> &str { &self.altitude }

    #[inline]
    pub fn pressure(&self) -> &str { &self.pressure }

    #[inline]
    pub fn status(&self) -> &str { &self.status }

    #[inline]
    pub const fn background(&self) -> Rgb888 { self.background }
}

impl Default for ScreenSurface {
    fn default() -> Self { Self::new() }
}

/// Replace `slot` with `text`, truncated to the slot capacity.
fn overwrite(
    slot: &mut DisplayText,
    text: &str,
) {
    slot.clear();
    for c in text.chars() {
        if slot.push(c).is_err() {
            break;
        }
    }
}

impl UiSurface for ScreenSurface {
    fn set_altitude_text(
        &mut self,
        text: &str,
    ) {
        overwrite(&mut self.altitude, text);
    }

    fn set_pressure_text(
        &mut self,
        text: &str,
    ) {
        overwrite(&mut self.pressure, text);
    }

    fn set_status_text(
        &mut self,
        text: &str,
    ) {
        overwrite(&mut self.status, text);
    }

    fn set_background(
        &mut self,
        color: Rgb888,
    ) {
        self.background = color;
    }
}
