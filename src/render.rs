//! Drawing the altimeter screen.
//!
//! The whole frame is redrawn from the [`ScreenSurface`] every time: the
//! background fill replaces the previous tint and text in one pass, so there is
//! no dirty tracking to get wrong.
//!
//! | Line | Font | Position |
//! |------|------|----------|
//! | "ALTITUDE" caption | 6x10 | `ALTITUDE_LABEL_Y` |
//! | altitude value | `ProFont` 24pt | `ALTITUDE_VALUE_Y` |
//! | "PRESSURE" caption | 6x10 | `PRESSURE_LABEL_Y` |
//! | pressure value | `ProFont` 18pt | `PRESSURE_VALUE_Y` |
//! | status label | 10x20 | `STATUS_Y` |

use altimeter_common::colors::{BLACK, SLATE, text_color_for};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::config::{
    ALTITUDE_LABEL_Y,
    ALTITUDE_VALUE_Y,
    CENTER_X,
    CENTER_Y,
    PRESSURE_LABEL_Y,
    PRESSURE_VALUE_Y,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    STATUS_Y,
};
use crate::styles::{
    CENTERED,
    LABEL_FONT,
    PAUSED_HINT_STYLE,
    PAUSED_TITLE_STYLE,
    SECONDARY_FONT,
    STATUS_FONT,
    VALUE_FONT,
};
use crate::surface::ScreenSurface;

const ALTITUDE_LABEL_POS: Point = Point::new(CENTER_X, ALTITUDE_LABEL_Y);
const ALTITUDE_VALUE_POS: Point = Point::new(CENTER_X, ALTITUDE_VALUE_Y);
const PRESSURE_LABEL_POS: Point = Point::new(CENTER_X, PRESSURE_LABEL_Y);
const PRESSURE_VALUE_POS: Point = Point::new(CENTER_X, PRESSURE_VALUE_Y);
const STATUS_POS: Point = Point::new(CENTER_X, STATUS_Y);

const PAUSED_CARD_WIDTH: u32 = 200;
const PAUSED_CARD_HEIGHT: u32 = 64;
const PAUSED_CARD_POS: Point = Point::new(
    (SCREEN_WIDTH - PAUSED_CARD_WIDTH) as i32 / 2,
    (SCREEN_HEIGHT - PAUSED_CARD_HEIGHT) as i32 / 2,
);
const PAUSED_CARD_SIZE: Size = Size::new(PAUSED_CARD_WIDTH, PAUSED_CARD_HEIGHT);
const PAUSED_TITLE_POS: Point = Point::new(CENTER_X, CENTER_Y - 2);
const PAUSED_HINT_POS: Point = Point::new(CENTER_X, CENTER_Y + 18);
const PAUSED_CARD_FILL: PrimitiveStyle<Rgb888> = PrimitiveStyle::with_fill(SLATE);

/// Draw the visible screen: tinted background, values and status.
pub fn draw_screen<D>(
    display: &mut D,
    surface: &ScreenSurface,
) where
    D: DrawTarget<Color = Rgb888>,
{
    let background = surface.background();
    display.clear(background).ok();

    let ink = text_color_for(background);
    let label_style = MonoTextStyle::new(LABEL_FONT, ink);

    Text::with_text_style("ALTITUDE", ALTITUDE_LABEL_POS, label_style, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(
        surface.altitude(),
        ALTITUDE_VALUE_POS,
        MonoTextStyle::new(VALUE_FONT, ink),
        CENTERED,
    )
    .draw(display)
    .ok();

    Text::with_text_style("PRESSURE", PRESSURE_LABEL_POS, label_style, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(
        surface.pressure(),
        PRESSURE_VALUE_POS,
        MonoTextStyle::new(SECONDARY_FONT, ink),
        CENTERED,
    )
    .draw(display)
    .ok();

    Text::with_text_style(surface.status(), STATUS_POS, MonoTextStyle::new(STATUS_FONT, ink), CENTERED)
        .draw(display)
        .ok();
}

/// Draw the hidden-state placeholder shown while the feed is stopped.
pub fn draw_paused<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb888>,
{
    display.clear(BLACK).ok();

    Rectangle::new(PAUSED_CARD_POS, PAUSED_CARD_SIZE)
        .into_styled(PAUSED_CARD_FILL)
        .draw(display)
        .ok();

    Text::with_text_style("PAUSED", PAUSED_TITLE_POS, PAUSED_TITLE_STYLE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("press H to resume", PAUSED_HINT_POS, PAUSED_HINT_STYLE, CENTERED)
        .draw(display)
        .ok();
}
