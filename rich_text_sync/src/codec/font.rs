// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font family and size.
//!
//! Runs without a font use the theme font. Writes rebuild each run's own font, so traits and
//! the property not being written are kept per run.

use attributed_text::{AttributeKey, AttributeValue, Brush, CharacterRange, Font};

use super::{attributes, update, Outcome};
use crate::{RichTextSurface, MIN_FONT_SIZE};

/// The font at the start of `range`.
pub fn font<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &S,
    range: Option<CharacterRange>,
) -> Option<Font> {
    if !surface.supports_attribute(AttributeKey::Font) {
        return None;
    }
    let attributes = attributes(surface, range)?;
    Some(
        attributes
            .font()
            .cloned()
            .unwrap_or_else(|| surface.theme().font.clone()),
    )
}

/// Set the font family over `range`.
///
/// An empty name resets to the theme's family.
pub fn set_font_name<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &mut S,
    name: &str,
    range: Option<CharacterRange>,
) -> Outcome {
    let theme_font = surface.theme().font.clone();
    let family = if name.is_empty() {
        theme_font.family()
    } else {
        name
    };
    edit_fonts(surface, range, |font| {
        (font.family() != family).then(|| font.with_family(family))
    })
}

/// Set the font size over `range`, clamped to [`MIN_FONT_SIZE`].
pub fn set_font_size<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &mut S,
    size: f32,
    range: Option<CharacterRange>,
) -> Outcome {
    if !size.is_finite() {
        tracing::debug!(size, "ignoring non-finite font size");
        return Outcome::Unsupported;
    }
    let size = size.max(MIN_FONT_SIZE);
    edit_fonts(surface, range, |font| {
        (font.size() != size).then(|| font.with_size(size))
    })
}

/// Grow or shrink every run's font in `range` by `points`, clamped to [`MIN_FONT_SIZE`].
///
/// Runs keep their relative sizes unless clamped, so stepping by `points` and then by
/// `-points` restores the original sizes.
pub fn step_font_size<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &mut S,
    points: i32,
    range: Option<CharacterRange>,
) -> Outcome {
    if points == 0 {
        return Outcome::Unchanged;
    }
    let points = points as f32;
    edit_fonts(surface, range, |font| {
        let size = (font.size() + points).max(MIN_FONT_SIZE);
        (font.size() != size).then(|| font.with_size(size))
    })
}

/// Replace each run's font with `f(font)` where it returns a new one.
fn edit_fonts<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &mut S,
    range: Option<CharacterRange>,
    mut f: impl FnMut(&Font) -> Option<Font>,
) -> Outcome {
    if !surface.supports_attribute(AttributeKey::Font) {
        return Outcome::Unsupported;
    }
    let theme_font = surface.theme().font.clone();
    update(surface, range, |attributes| {
        if let Some(font) = f(attributes.font().unwrap_or(&theme_font)) {
            attributes.insert(AttributeValue::Font(font));
        }
    })
}
