//! Pre-computed text styles.
//!
//! Text color follows the altitude tint (dark ink on the light sky, white once
//! it darkens), so value styles are built per frame from the exposed fonts:
//! `MonoTextStyle::new(VALUE_FONT, color)`. Only the paused card, whose colors
//! never change, gets full `const` styles.

use altimeter_common::colors::WHITE;
use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb888,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Used for every line on this screen.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small caption font (6x10 pixels).
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Large altitude font (`ProFont` 24pt).
pub const VALUE_FONT: &MonoFont = &PROFONT_24_POINT;

/// Medium pressure font (`ProFont` 18pt).
pub const SECONDARY_FONT: &MonoFont = &PROFONT_18_POINT;

/// Status line font (10x20 pixels).
pub const STATUS_FONT: &MonoFont = &FONT_10X20;

// =============================================================================
// Paused Card Styles
// =============================================================================

/// Title on the paused card.
pub const PAUSED_TITLE_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Hint line on the paused card.
pub const PAUSED_HINT_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&FONT_6X10, WHITE);
