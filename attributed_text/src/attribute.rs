// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use crate::{Brush, Font, ParagraphStyle};

/// The key of a primitive text attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    /// The [`Font`] of the text.
    Font,
    /// The color of the glyphs.
    ForegroundColor,
    /// The color behind the glyphs.
    BackgroundColor,
    /// The [`LineStyle`] of the underline decoration.
    UnderlineStyle,
    /// The color of the underline decoration.
    UnderlineColor,
    /// The [`LineStyle`] of the strikethrough decoration.
    StrikethroughStyle,
    /// The color of the strikethrough decoration.
    StrikethroughColor,
    /// The color of glyph outlines.
    StrokeColor,
    /// The [`ParagraphStyle`] of the enclosing paragraph.
    ParagraphStyle,
    /// The superscript level; positive raises, negative lowers.
    Superscript,
    /// An inline [`Attachment`], carried by an object replacement character.
    Attachment,
}

/// The style of a line decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// No line is drawn.
    #[default]
    None,
    /// A single thin line.
    Single,
    /// A single thick line.
    Thick,
    /// Two thin lines.
    Double,
}

impl LineStyle {
    /// Whether a line is drawn at all.
    pub fn is_visible(self) -> bool {
        self != Self::None
    }
}

/// Opaque inline content, such as an image.
///
/// The bytes are shared; cloning an attachment is cheap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    data: Arc<[u8]>,
}

impl Attachment {
    /// Create an attachment from its encoded bytes.
    pub fn new(data: impl Into<Arc<[u8]>>) -> Self {
        Self { data: data.into() }
    }

    /// The encoded bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// The value of a primitive text attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue<B: Brush> {
    /// See [`AttributeKey::Font`].
    Font(Font),
    /// See [`AttributeKey::ForegroundColor`].
    ForegroundColor(B),
    /// See [`AttributeKey::BackgroundColor`].
    BackgroundColor(B),
    /// See [`AttributeKey::UnderlineStyle`].
    UnderlineStyle(LineStyle),
    /// See [`AttributeKey::UnderlineColor`].
    UnderlineColor(B),
    /// See [`AttributeKey::StrikethroughStyle`].
    StrikethroughStyle(LineStyle),
    /// See [`AttributeKey::StrikethroughColor`].
    StrikethroughColor(B),
    /// See [`AttributeKey::StrokeColor`].
    StrokeColor(B),
    /// See [`AttributeKey::ParagraphStyle`].
    ParagraphStyle(ParagraphStyle),
    /// See [`AttributeKey::Superscript`].
    Superscript(i8),
    /// See [`AttributeKey::Attachment`].
    Attachment(Attachment),
}

impl<B: Brush> AttributeValue<B> {
    /// The key this value is stored under.
    pub fn key(&self) -> AttributeKey {
        match self {
            Self::Font(_) => AttributeKey::Font,
            Self::ForegroundColor(_) => AttributeKey::ForegroundColor,
            Self::BackgroundColor(_) => AttributeKey::BackgroundColor,
            Self::UnderlineStyle(_) => AttributeKey::UnderlineStyle,
            Self::UnderlineColor(_) => AttributeKey::UnderlineColor,
            Self::StrikethroughStyle(_) => AttributeKey::StrikethroughStyle,
            Self::StrikethroughColor(_) => AttributeKey::StrikethroughColor,
            Self::StrokeColor(_) => AttributeKey::StrokeColor,
            Self::ParagraphStyle(_) => AttributeKey::ParagraphStyle,
            Self::Superscript(_) => AttributeKey::Superscript,
            Self::Attachment(_) => AttributeKey::Attachment,
        }
    }

    /// The color carried by this value, if it is a color attribute.
    pub fn as_color(&self) -> Option<&B> {
        match self {
            Self::ForegroundColor(color)
            | Self::BackgroundColor(color)
            | Self::UnderlineColor(color)
            | Self::StrikethroughColor(color)
            | Self::StrokeColor(color) => Some(color),
            _ => None,
        }
    }

    /// Build the color value for a color `key`.
    ///
    /// Returns `None` if `key` does not hold a color.
    pub fn color(key: AttributeKey, color: B) -> Option<Self> {
        Some(match key {
            AttributeKey::ForegroundColor => Self::ForegroundColor(color),
            AttributeKey::BackgroundColor => Self::BackgroundColor(color),
            AttributeKey::UnderlineColor => Self::UnderlineColor(color),
            AttributeKey::StrikethroughColor => Self::StrikethroughColor(color),
            AttributeKey::StrokeColor => Self::StrokeColor(color),
            _ => return None,
        })
    }
}

/// The full set of attributes at a position in the text.
///
/// Every key holds at most one value; absent keys fall back to whatever default the consumer
/// uses.
#[derive(Clone, Debug, PartialEq)]
pub struct Attributes<B: Brush> {
    font: Option<Font>,
    foreground_color: Option<B>,
    background_color: Option<B>,
    underline_style: Option<LineStyle>,
    underline_color: Option<B>,
    strikethrough_style: Option<LineStyle>,
    strikethrough_color: Option<B>,
    stroke_color: Option<B>,
    paragraph_style: Option<ParagraphStyle>,
    superscript: Option<i8>,
    attachment: Option<Attachment>,
}

impl<B: Brush> Default for Attributes<B> {
    fn default() -> Self {
        Self {
            font: None,
            foreground_color: None,
            background_color: None,
            underline_style: None,
            underline_color: None,
            strikethrough_style: None,
            strikethrough_color: None,
            stroke_color: None,
            paragraph_style: None,
            superscript: None,
            attachment: None,
        }
    }
}

impl<B: Brush> Attributes<B> {
    /// An empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, value: AttributeValue<B>) -> Self {
        self.insert(value);
        self
    }

    /// Whether no attribute is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The value stored under `key`, if any.
    pub fn get(&self, key: AttributeKey) -> Option<AttributeValue<B>> {
        match key {
            AttributeKey::Font => self.font.clone().map(AttributeValue::Font),
            AttributeKey::ForegroundColor => self
                .foreground_color
                .clone()
                .map(AttributeValue::ForegroundColor),
            AttributeKey::BackgroundColor => self
                .background_color
                .clone()
                .map(AttributeValue::BackgroundColor),
            AttributeKey::UnderlineStyle => self.underline_style.map(AttributeValue::UnderlineStyle),
            AttributeKey::UnderlineColor => self
                .underline_color
                .clone()
                .map(AttributeValue::UnderlineColor),
            AttributeKey::StrikethroughStyle => self
                .strikethrough_style
                .map(AttributeValue::StrikethroughStyle),
            AttributeKey::StrikethroughColor => self
                .strikethrough_color
                .clone()
                .map(AttributeValue::StrikethroughColor),
            AttributeKey::StrokeColor => self.stroke_color.clone().map(AttributeValue::StrokeColor),
            AttributeKey::ParagraphStyle => self.paragraph_style.map(AttributeValue::ParagraphStyle),
            AttributeKey::Superscript => self.superscript.map(AttributeValue::Superscript),
            AttributeKey::Attachment => self.attachment.clone().map(AttributeValue::Attachment),
        }
    }

    /// Store `value` under its key, replacing any previous value.
    pub fn insert(&mut self, value: AttributeValue<B>) {
        match value {
            AttributeValue::Font(v) => self.font = Some(v),
            AttributeValue::ForegroundColor(v) => self.foreground_color = Some(v),
            AttributeValue::BackgroundColor(v) => self.background_color = Some(v),
            AttributeValue::UnderlineStyle(v) => self.underline_style = Some(v),
            AttributeValue::UnderlineColor(v) => self.underline_color = Some(v),
            AttributeValue::StrikethroughStyle(v) => self.strikethrough_style = Some(v),
            AttributeValue::StrikethroughColor(v) => self.strikethrough_color = Some(v),
            AttributeValue::StrokeColor(v) => self.stroke_color = Some(v),
            AttributeValue::ParagraphStyle(v) => self.paragraph_style = Some(v),
            AttributeValue::Superscript(v) => self.superscript = Some(v),
            AttributeValue::Attachment(v) => self.attachment = Some(v),
        }
    }

    /// Remove the value stored under `key`.
    pub fn remove(&mut self, key: AttributeKey) {
        match key {
            AttributeKey::Font => self.font = None,
            AttributeKey::ForegroundColor => self.foreground_color = None,
            AttributeKey::BackgroundColor => self.background_color = None,
            AttributeKey::UnderlineStyle => self.underline_style = None,
            AttributeKey::UnderlineColor => self.underline_color = None,
            AttributeKey::StrikethroughStyle => self.strikethrough_style = None,
            AttributeKey::StrikethroughColor => self.strikethrough_color = None,
            AttributeKey::StrokeColor => self.stroke_color = None,
            AttributeKey::ParagraphStyle => self.paragraph_style = None,
            AttributeKey::Superscript => self.superscript = None,
            AttributeKey::Attachment => self.attachment = None,
        }
    }

    /// The font, if set.
    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    /// The paragraph style, if set.
    pub fn paragraph_style(&self) -> Option<&ParagraphStyle> {
        self.paragraph_style.as_ref()
    }

    /// The attachment, if set.
    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }
}
