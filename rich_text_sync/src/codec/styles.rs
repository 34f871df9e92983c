// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bold, italic, underline and strikethrough.
//!
//! Bold and italic are traits of the run's font, falling back to the theme font where a run has
//! none; underline and strikethrough are line styles.

use attributed_text::{
    AttributeKey, AttributeValue, Attributes, Brush, CharacterRange, LineStyle,
};

use super::{attributes, update, Outcome};
use crate::{RichTextStyle, RichTextSurface, StyleSet};

/// The styles at the start of `range`.
pub fn styles<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &S,
    range: Option<CharacterRange>,
) -> Option<StyleSet> {
    let attributes = attributes(surface, range)?;
    let mut styles = StyleSet::empty();
    for style in RichTextStyle::ALL {
        styles.set(style.flag(), has_style_in(surface, &attributes, style));
    }
    Some(styles)
}

/// The styles `surface` can show.
///
/// Bold and italic need [`AttributeKey::Font`]; line styles need their own attribute.
pub fn supported_styles<B: Brush, S: RichTextSurface<B> + ?Sized>(surface: &S) -> StyleSet {
    RichTextStyle::ALL
        .into_iter()
        .filter(|style| {
            surface.supports_attribute(style.line_attribute().unwrap_or(AttributeKey::Font))
        })
        .fold(StyleSet::empty(), |set, style| set | style.flag())
}

/// Whether `style` is active at the start of `range`.
pub fn has_style<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &S,
    style: RichTextStyle,
    range: Option<CharacterRange>,
) -> bool {
    attributes(surface, range).is_some_and(|attributes| has_style_in(surface, &attributes, style))
}

fn has_style_in<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &S,
    attributes: &Attributes<B>,
    style: RichTextStyle,
) -> bool {
    if let Some(flag) = style.font_trait() {
        return surface.supports_attribute(AttributeKey::Font)
            && attributes
                .font()
                .unwrap_or(&surface.theme().font)
                .traits()
                .contains(flag);
    }
    match style.line_attribute() {
        Some(key) if surface.supports_attribute(key) => matches!(
            attributes.get(key),
            Some(AttributeValue::UnderlineStyle(line) | AttributeValue::StrikethroughStyle(line))
                if line.is_visible()
        ),
        _ => false,
    }
}

/// Turn `style` on or off over `range`.
///
/// Only the trait or line style of `style` changes; other traits of each run's font are kept.
pub fn set_style<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &mut S,
    style: RichTextStyle,
    value: bool,
    range: Option<CharacterRange>,
) -> Outcome {
    if let Some(flag) = style.font_trait() {
        if !surface.supports_attribute(AttributeKey::Font) {
            return Outcome::Unsupported;
        }
        let theme_font = surface.theme().font.clone();
        return update(surface, range, |attributes| {
            let font = attributes.font().unwrap_or(&theme_font);
            let mut traits = font.traits();
            traits.set(flag, value);
            if traits != font.traits() {
                let font = font.with_traits(traits);
                attributes.insert(AttributeValue::Font(font));
            }
        });
    }
    let Some(key) = style.line_attribute() else {
        return Outcome::Unsupported;
    };
    if !surface.supports_attribute(key) {
        return Outcome::Unsupported;
    }
    update(surface, range, |attributes| {
        let visible = match attributes.get(key) {
            Some(AttributeValue::UnderlineStyle(line) | AttributeValue::StrikethroughStyle(line)) => {
                line.is_visible()
            }
            _ => false,
        };
        if value && !visible {
            attributes.insert(line_value(style, LineStyle::Single));
        } else if !value && visible {
            attributes.remove(key);
        }
    })
}

/// Flip `style` over `range`, based on its state at the start of the range.
pub fn toggle_style<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &mut S,
    style: RichTextStyle,
    range: Option<CharacterRange>,
) -> Outcome {
    let value = !has_style(surface, style, range);
    set_style(surface, style, value, range)
}

fn line_value<B: Brush>(style: RichTextStyle, line: LineStyle) -> AttributeValue<B> {
    if style == RichTextStyle::Strikethrough {
        AttributeValue::StrikethroughStyle(line)
    } else {
        AttributeValue::UnderlineStyle(line)
    }
}
