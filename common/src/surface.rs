//! Output side of the screen: three text slots and a background color.

use embedded_graphics::pixelcolor::Rgb888;

use crate::presenter::DisplayState;

/// Display slots written by the controller. Every write replaces the slot.
pub trait UiSurface {
    fn set_altitude_text(
        &mut self,
        text: &str,
    );

    fn set_pressure_text(
        &mut self,
        text: &str,
    );

    fn set_status_text(
        &mut self,
        text: &str,
    );

    fn set_background(
        &mut self,
        color: Rgb888,
    );

    /// Overwrite every slot from a presented reading.
    fn apply(
        &mut self,
        state: &DisplayState,
    ) {
        self.set_altitude_text(&state.altitude_text);
        self.set_pressure_text(&state.pressure_text);
        self.set_status_text(state.status_text);
        self.set_background(state.background);
    }
}

impl<T> UiSurface for &mut T
where
    T: UiSurface + ?Sized,
{
    fn set_altitude_text(
        &mut self,
        text: &str,
    ) {
        T::set_altitude_text(self, text);
    }

    fn set_pressure_text(
        &mut self,
        text: &str,
    ) {
        T::set_pressure_text(self, text);
    }

    fn set_status_text(
        &mut self,
        text: &str,
    ) {
        T::set_status_text(self, text);
    }

    fn set_background(
        &mut self,
        color: Rgb888,
    ) {
        T::set_background(self, color);
    }
}
