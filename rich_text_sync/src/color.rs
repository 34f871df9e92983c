// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attributed_text::{AttributeKey, Brush};

/// A semantic color slot of rich text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RichTextColor {
    /// The color of the glyphs.
    Foreground,
    /// The color behind the glyphs.
    Background,
    /// The color of the strikethrough decoration.
    Strikethrough,
    /// The color of glyph outlines.
    Stroke,
    /// The color of the underline decoration.
    Underline,
    /// A slot with no attribute behind it. Reads are always empty and writes are ignored.
    Undefined,
}

impl RichTextColor {
    /// All colors that have an attribute, in presentation order.
    pub const ALL: [Self; 5] = [
        Self::Foreground,
        Self::Background,
        Self::Strikethrough,
        Self::Stroke,
        Self::Underline,
    ];

    /// The attribute storing this color, if there is one.
    pub fn attribute(self) -> Option<AttributeKey> {
        match self {
            Self::Foreground => Some(AttributeKey::ForegroundColor),
            Self::Background => Some(AttributeKey::BackgroundColor),
            Self::Strikethrough => Some(AttributeKey::StrikethroughColor),
            Self::Stroke => Some(AttributeKey::StrokeColor),
            Self::Underline => Some(AttributeKey::UnderlineColor),
            Self::Undefined => None,
        }
    }
}

/// The current value of every [`RichTextColor`].
#[derive(Clone, Debug, PartialEq)]
pub struct RichTextColors<B: Brush> {
    foreground: Option<B>,
    background: Option<B>,
    strikethrough: Option<B>,
    stroke: Option<B>,
    underline: Option<B>,
}

impl<B: Brush> Default for RichTextColors<B> {
    fn default() -> Self {
        Self {
            foreground: None,
            background: None,
            strikethrough: None,
            stroke: None,
            underline: None,
        }
    }
}

impl<B: Brush> RichTextColors<B> {
    /// The value of `color`, if set.
    pub fn get(&self, color: RichTextColor) -> Option<&B> {
        match color {
            RichTextColor::Foreground => self.foreground.as_ref(),
            RichTextColor::Background => self.background.as_ref(),
            RichTextColor::Strikethrough => self.strikethrough.as_ref(),
            RichTextColor::Stroke => self.stroke.as_ref(),
            RichTextColor::Underline => self.underline.as_ref(),
            RichTextColor::Undefined => None,
        }
    }

    /// Set or clear `color`. Writes to [`RichTextColor::Undefined`] are ignored.
    pub fn set(&mut self, color: RichTextColor, value: Option<B>) {
        let slot = match color {
            RichTextColor::Foreground => &mut self.foreground,
            RichTextColor::Background => &mut self.background,
            RichTextColor::Strikethrough => &mut self.strikethrough,
            RichTextColor::Stroke => &mut self.stroke,
            RichTextColor::Underline => &mut self.underline,
            RichTextColor::Undefined => return,
        };
        *slot = value;
    }
}
