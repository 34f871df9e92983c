// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::RangeInclusive;

use attributed_text::{Brush, Font};

/// The font family used when nothing more specific is known.
pub const DEFAULT_FONT_FAMILY: &str = "system-ui";

/// The default point size of rich text.
pub const STANDARD_FONT_SIZE: f32 = 16.0;

/// The smallest point size font size changes may produce.
pub const MIN_FONT_SIZE: f32 = 1.0;

/// The superscript levels superscript stepping is clamped to.
pub const SUPERSCRIPT_LEVELS: RangeInclusive<i8> = -1..=1;

/// The default appearance of a rich text surface.
///
/// Text without an explicit font is shown, and measured for font changes, in [`Theme::font`].
#[derive(Clone, Debug, PartialEq)]
pub struct Theme<B: Brush> {
    /// The default font.
    pub font: Font,
    /// The default glyph color.
    pub font_color: B,
    /// The color of the whole surface.
    pub background_color: B,
}

impl<B: Brush> Default for Theme<B> {
    fn default() -> Self {
        Self {
            font: Font::new(DEFAULT_FONT_FAMILY, STANDARD_FONT_SIZE),
            font_color: B::default(),
            background_color: B::default(),
        }
    }
}

/// The colors used to highlight a range of text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HighlightingStyle<B: Brush> {
    /// The color behind highlighted glyphs.
    pub background_color: B,
    /// The color of highlighted glyphs.
    pub foreground_color: B,
}
