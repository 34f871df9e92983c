// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attributed_text::{AttributeKey, FontTraits};

/// A boolean text style which can be toggled independently of the others.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RichTextStyle {
    /// Bold text, a trait of the font.
    Bold,
    /// Italic text, a trait of the font.
    Italic,
    /// Underlined text, a line decoration.
    Underlined,
    /// Struck through text, a line decoration.
    Strikethrough,
}

impl RichTextStyle {
    /// All styles, in presentation order.
    pub const ALL: [Self; 4] = [
        Self::Bold,
        Self::Italic,
        Self::Underlined,
        Self::Strikethrough,
    ];

    /// The font trait carrying this style, if it is a font style.
    pub fn font_trait(self) -> Option<FontTraits> {
        match self {
            Self::Bold => Some(FontTraits::BOLD),
            Self::Italic => Some(FontTraits::ITALIC),
            Self::Underlined | Self::Strikethrough => None,
        }
    }

    /// The line style attribute carrying this style, if it is a decoration.
    pub fn line_attribute(self) -> Option<AttributeKey> {
        match self {
            Self::Underlined => Some(AttributeKey::UnderlineStyle),
            Self::Strikethrough => Some(AttributeKey::StrikethroughStyle),
            Self::Bold | Self::Italic => None,
        }
    }

    /// The flag for this style in a [`StyleSet`].
    pub fn flag(self) -> StyleSet {
        match self {
            Self::Bold => StyleSet::BOLD,
            Self::Italic => StyleSet::ITALIC,
            Self::Underlined => StyleSet::UNDERLINED,
            Self::Strikethrough => StyleSet::STRIKETHROUGH,
        }
    }
}

bitflags::bitflags! {
    /// A set of active [`RichTextStyle`]s.
    ///
    /// Styles are not mutually exclusive; toggling one is a symmetric difference that never
    /// affects the others.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct StyleSet: u8 {
        /// See [`RichTextStyle::Bold`].
        const BOLD = 0b0000_0001;
        /// See [`RichTextStyle::Italic`].
        const ITALIC = 0b0000_0010;
        /// See [`RichTextStyle::Underlined`].
        const UNDERLINED = 0b0000_0100;
        /// See [`RichTextStyle::Strikethrough`].
        const STRIKETHROUGH = 0b0000_1000;
    }
}

impl StyleSet {
    /// Whether `style` is in the set.
    pub fn has_style(self, style: RichTextStyle) -> bool {
        self.contains(style.flag())
    }

    /// The set with `style` added or removed.
    #[must_use]
    pub fn with_style(mut self, style: RichTextStyle, value: bool) -> Self {
        self.set(style.flag(), value);
        self
    }

    /// The set with `style` flipped.
    #[must_use]
    pub fn toggled(self, style: RichTextStyle) -> Self {
        self ^ style.flag()
    }

    /// The font traits for the font styles in this set.
    pub fn font_traits(self) -> FontTraits {
        let mut traits = FontTraits::empty();
        traits.set(FontTraits::BOLD, self.contains(Self::BOLD));
        traits.set(FontTraits::ITALIC, self.contains(Self::ITALIC));
        traits
    }
}
